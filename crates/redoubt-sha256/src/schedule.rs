// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message schedule per FIPS 180-4 Section 6.2.2 step 1

use core::ops::Index;

use crate::consts::BLOCK_LEN;
use crate::word::{ssig0, ssig1};

/// Message schedule W[0..63] of one block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageSchedule {
    w: [u32; 64],
}

impl MessageSchedule {
    /// Expand a 64-byte block into its 64-word schedule.
    pub fn expand(block: &[u8; BLOCK_LEN]) -> Self {
        let mut w = [0u32; 64];

        // W[0..15] from block (big-endian)
        for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
            *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }

        // W[16..63]: W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
        for t in 16..64 {
            w[t] = ssig1(w[t - 2])
                .wrapping_add(w[t - 7])
                .wrapping_add(ssig0(w[t - 15]))
                .wrapping_add(w[t - 16]);
        }

        Self { w }
    }

    /// All 64 schedule words
    pub fn words(&self) -> &[u32; 64] {
        &self.w
    }
}

impl Index<usize> for MessageSchedule {
    type Output = u32;

    fn index(&self, t: usize) -> &u32 {
        &self.w[t]
    }
}
