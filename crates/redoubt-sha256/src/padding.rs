// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message padding and parsing per FIPS 180-4 Sections 5.1.1 and 5.2.1

use alloc::vec;
use alloc::vec::Vec;

use crate::consts::{BLOCK_LEN, LENGTH_FIELD_LEN};

/// Offset of the length field inside the last block
const LENGTH_FIELD_OFFSET: usize = BLOCK_LEN - LENGTH_FIELD_LEN;

/// Padded message: `M || 0x80 || 0x00.. || bitlen(M)` as u64 big-endian.
///
/// Its length is always a non-zero multiple of [`BLOCK_LEN`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedMessage {
    blocks: Vec<[u8; BLOCK_LEN]>,
}

impl PaddedMessage {
    /// Padded buffer
    pub fn as_bytes(&self) -> &[u8] {
        self.blocks.as_flattened()
    }

    /// Padded length in bytes
    pub fn len(&self) -> usize {
        self.blocks.len() * BLOCK_LEN
    }

    /// Always false: even the empty message pads to one block
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of 64-byte blocks
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Blocks in message order
    pub fn blocks(&self) -> core::slice::Iter<'_, [u8; BLOCK_LEN]> {
        self.blocks.iter()
    }
}

/// Number of zero bytes between the `0x80` terminator and the length field
#[inline(always)]
fn zero_pad_len(message_len: usize) -> usize {
    (LENGTH_FIELD_OFFSET + BLOCK_LEN - (message_len + 1) % BLOCK_LEN) % BLOCK_LEN
}

/// Length of `pad(message)` for a message of `message_len` bytes
pub fn padded_len(message_len: usize) -> usize {
    message_len + 1 + zero_pad_len(message_len) + LENGTH_FIELD_LEN
}

/// Big-endian bit length of a `message_len`-byte message, mod 2^64
#[inline(always)]
pub(crate) fn length_field(message_len: usize) -> [u8; LENGTH_FIELD_LEN] {
    (message_len as u64).wrapping_mul(8).to_be_bytes()
}

/// Pad `message` to a whole number of blocks.
///
/// The length field holds the full 64-bit bit length (mod 2^64), not only
/// its low 32 bits.
pub fn pad(message: &[u8]) -> PaddedMessage {
    let m = message.len();
    let total = padded_len(m);

    let mut blocks = vec![[0u8; BLOCK_LEN]; total / BLOCK_LEN];
    let bytes = blocks.as_flattened_mut();
    bytes[..m].copy_from_slice(message);
    bytes[m] = 0x80;
    bytes[total - LENGTH_FIELD_LEN..].copy_from_slice(&length_field(m));

    PaddedMessage { blocks }
}
