// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-SHA256 implementation per RFC 2104

use alloc::string::String;
use alloc::vec::Vec;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use crate::consts::{BLOCK_LEN, HASH_LEN, IPAD, OPAD};
use crate::digest::{Digest, sha256};
use crate::encoding::TextEncoding;
use crate::error::Sha256Error;

/// Key normalized to exactly one block, wiped on drop.
///
/// Keys longer than [`BLOCK_LEN`] are replaced by their SHA-256 digest;
/// either way the rest of the block is zero.
struct HmacKeyBuffer([u8; BLOCK_LEN]);

impl HmacKeyBuffer {
    fn new(key: &[u8]) -> Self {
        let mut block = [0u8; BLOCK_LEN];

        if key.len() > BLOCK_LEN {
            log::debug!(
                "hmac: key is {} bytes, longer than the {BLOCK_LEN}-byte block; hashing it",
                key.len()
            );
            let mut hashed = sha256(key).into_bytes();
            block[..HASH_LEN].copy_from_slice(&hashed);
            hashed.zeroize();
        } else {
            block[..key.len()].copy_from_slice(key);
        }

        Self(block)
    }

    /// K ⊕ pad, byte-wise over the whole block
    fn xor_pad(&self, pad: u8) -> Zeroizing<[u8; BLOCK_LEN]> {
        let mut padded = Zeroizing::new([pad; BLOCK_LEN]);
        for (out, k) in padded.iter_mut().zip(&self.0) {
            *out ^= k;
        }
        padded
    }
}

impl Drop for HmacKeyBuffer {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// HMAC-SHA256 per RFC 2104
///
/// `H(K ⊕ opad || H(K ⊕ ipad || message))`. Key and message may be empty.
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> Digest {
    let key_block = HmacKeyBuffer::new(key);

    // Inner hash: SHA256(k_ipad || message)
    let mut inner = Zeroizing::new(Vec::with_capacity(BLOCK_LEN + message.len()));
    inner.extend_from_slice(&*key_block.xor_pad(IPAD));
    inner.extend_from_slice(message);
    let inner_hash = Zeroizing::new(sha256(&inner).into_bytes());

    // Outer hash: SHA256(k_opad || inner_hash)
    let mut outer = Zeroizing::new([0u8; BLOCK_LEN + HASH_LEN]);
    outer[..BLOCK_LEN].copy_from_slice(&*key_block.xor_pad(OPAD));
    outer[BLOCK_LEN..].copy_from_slice(&*inner_hash);

    sha256(&*outer)
}

/// HMAC-SHA256 of text key and message, as lowercase hex.
///
/// Both sides use [`TextEncoding::Latin1`]; the block-size check on the
/// key applies to its encoded bytes.
pub fn hmac_sha256_text(key: &str, message: &str) -> Result<String, Sha256Error> {
    let key = Zeroizing::new(TextEncoding::Latin1.encode(key)?.into_owned());
    let message = TextEncoding::Latin1.encode(message)?;

    Ok(hmac_sha256(&key, &message).to_hex())
}

/// Check `tag` against HMAC-SHA256(key, message).
///
/// The comparison runs in constant time over the tag bytes. A tag of the
/// wrong length never matches.
pub fn verify(key: &[u8], message: &[u8], tag: &[u8]) -> Result<(), Sha256Error> {
    let expected = hmac_sha256(key, message);

    if bool::from(expected.as_bytes()[..].ct_eq(tag)) {
        Ok(())
    } else {
        log::debug!("hmac: tag mismatch ({} byte tag)", tag.len());
        Err(Sha256Error::TagMismatch)
    }
}
