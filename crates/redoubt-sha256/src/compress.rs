// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 compression function per FIPS 180-4 Section 6.2.2

use crate::consts::{BLOCK_LEN, H0, HASH_LEN, K256};
use crate::schedule::MessageSchedule;
use crate::word::{bsig0, bsig1, ch, maj};

/// Hash state H(i), or the working variables a..h during a round.
///
/// A plain value: [`compress`] takes one and returns the next, nothing is
/// updated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashState {
    /// H0 / a
    pub a: u32,
    /// H1 / b
    pub b: u32,
    /// H2 / c
    pub c: u32,
    /// H3 / d
    pub d: u32,
    /// H4 / e
    pub e: u32,
    /// H5 / f
    pub f: u32,
    /// H6 / g
    pub g: u32,
    /// H7 / h
    pub h: u32,
}

impl HashState {
    /// H(0) per FIPS 180-4 Section 5.3.3
    pub const INITIAL: Self = Self::from_words(H0);

    /// Build a state from H0..H7
    pub const fn from_words(words: [u32; 8]) -> Self {
        let [a, b, c, d, e, f, g, h] = words;
        Self { a, b, c, d, e, f, g, h }
    }

    /// State as H0..H7
    pub const fn to_words(self) -> [u32; 8] {
        [self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h]
    }

    /// Serialize as 32 bytes, big-endian word by word
    pub fn to_be_bytes(self) -> [u8; HASH_LEN] {
        let mut out = [0u8; HASH_LEN];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.to_words()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// H + other, word-wise mod 2^32
    #[inline(always)]
    fn wrapping_add(self, other: Self) -> Self {
        Self {
            a: self.a.wrapping_add(other.a),
            b: self.b.wrapping_add(other.b),
            c: self.c.wrapping_add(other.c),
            d: self.d.wrapping_add(other.d),
            e: self.e.wrapping_add(other.e),
            f: self.f.wrapping_add(other.f),
            g: self.g.wrapping_add(other.g),
            h: self.h.wrapping_add(other.h),
        }
    }

    /// One round t of the 64-round loop
    #[inline(always)]
    pub(crate) fn round(self, k: u32, w: u32) -> Self {
        let Self { a, b, c, d, e, f, g, h } = self;

        // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
        let t1 = h
            .wrapping_add(bsig1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(k)
            .wrapping_add(w);

        // T2 = Σ0(a) + Maj(a,b,c)
        let t2 = bsig0(a).wrapping_add(maj(a, b, c));

        // h=g, g=f, f=e, e=d+T1, d=c, c=b, b=a, a=T1+T2
        Self {
            a: t1.wrapping_add(t2),
            b: a,
            c: b,
            d: c,
            e: d.wrapping_add(t1),
            f: e,
            g: f,
            h: g,
        }
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Fold one scheduled block into `state`.
///
/// Pure: returns H(i) given H(i-1) and the block's schedule.
pub fn compress(state: HashState, schedule: &MessageSchedule) -> HashState {
    let working = K256
        .iter()
        .zip(schedule.words())
        .fold(state, |vars, (&k, &w)| vars.round(k, w));

    state.wrapping_add(working)
}

/// Expand and compress a single 64-byte block
pub fn compress_block(state: HashState, block: &[u8; BLOCK_LEN]) -> HashState {
    compress(state, &MessageSchedule::expand(block))
}
