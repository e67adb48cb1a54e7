// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 and HMAC-SHA256
//!
//! Implementation per FIPS 180-4 (SHA-256) and RFC 2104 (HMAC), validated
//! against the FIPS examples and the RFC 4231 test cases. Pure Rust, no
//! platform cryptography.
//!
//! The digest is computed as a fold over the padded message: every 64-byte
//! block is expanded into its message schedule and compressed into a
//! [`HashState`], which is threaded by value from one block to the next.
//!
//! ```rust
//! use redoubt_sha256::{hmac_sha256, sha256};
//!
//! assert_eq!(
//!     sha256(b"abc").to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//!
//! let tag = hmac_sha256(b"key", b"The quick brown fox jumps over the lazy dog");
//! assert_eq!(
//!     tag.to_hex(),
//!     "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
//! );
//! ```
//!
//! Text input goes through an explicit [`TextEncoding`]. The legacy
//! one-byte-per-character rule ([`TextEncoding::Latin1`]) rejects any
//! character above U+00FF instead of truncating it.
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf>
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//! - RFC 4231: Identifiers and Test Vectors for HMAC-SHA-256
//!   <https://datatracker.ietf.org/doc/html/rfc4231>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod compress;
mod consts;
mod digest;
mod encoding;
mod error;
mod hmac;
mod padding;
mod schedule;
mod word;

pub use compress::{HashState, compress, compress_block};
pub use consts::{BLOCK_LEN, H0, HASH_LEN, HEX_LEN, K256};
pub use digest::{Digest, DigestOutput, OutputFormat, sha256, sha256_input};
pub use encoding::{Input, TextEncoding};
pub use error::Sha256Error;
pub use hmac::{hmac_sha256, hmac_sha256_text, verify};
pub use padding::{PaddedMessage, pad, padded_len};
pub use schedule::MessageSchedule;
