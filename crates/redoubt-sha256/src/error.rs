// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// SHA-256 / HMAC-SHA256 error
///
/// Hashing raw bytes never fails. Errors only come from turning text into
/// bytes and from tag verification.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sha256Error {
    /// A character does not fit in a single byte under the Latin-1 encoding
    #[error("character U+{code_point:04X} at position {index} does not fit in a single byte")]
    NonByteCharacter {
        /// Character position in the input text
        index: usize,
        /// Unicode code point of the rejected character
        code_point: u32,
    },

    /// HMAC tag does not match the recomputed one
    #[error("HMAC tag mismatch")]
    TagMismatch,
}
