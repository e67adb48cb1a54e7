// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hex helpers for test vectors

use alloc::vec::Vec;

/// Decode a hex string, panicking on malformed input
pub(crate) fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "odd-length hex string: {hex}");

    hex.as_bytes()
        .chunks_exact(2)
        .map(|pair| {
            let pair = core::str::from_utf8(pair).expect("hex must be ASCII");
            u8::from_str_radix(pair, 16).expect("invalid hex digit")
        })
        .collect()
}

/// Decode a 64-character hex digest
pub(crate) fn digest_from_hex(hex: &str) -> [u8; 32] {
    hex_to_bytes(hex)
        .try_into()
        .expect("digest hex must be 64 characters")
}
