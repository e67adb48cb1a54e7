// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 digest per FIPS 180-4 Section 6.2

use alloc::string::String;
use core::fmt::{self, Write};

use subtle::{Choice, ConstantTimeEq};

use crate::compress::{HashState, compress};
use crate::consts::{HASH_LEN, HEX_LEN};
use crate::encoding::Input;
use crate::error::Sha256Error;
use crate::padding::pad;
use crate::schedule::MessageSchedule;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// SHA-256 digest H(N), 32 bytes big-endian
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; HASH_LEN]);

impl Digest {
    /// Wrap raw digest bytes
    pub const fn from_bytes(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw digest bytes
    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    /// Consume into raw digest bytes
    pub fn into_bytes(self) -> [u8; HASH_LEN] {
        self.0
    }

    /// 64-character lowercase hex
    pub fn to_hex(&self) -> String {
        let mut hex = String::with_capacity(HEX_LEN);
        // Writing into a String cannot fail
        let _ = write!(hex, "{self:x}");
        hex
    }

    /// Render in the requested output format
    pub fn encode(&self, format: OutputFormat) -> DigestOutput {
        match format {
            OutputFormat::Bytes => DigestOutput::Bytes(self.0),
            OutputFormat::Hex => DigestOutput::Hex(self.to_hex()),
        }
    }
}

impl From<HashState> for Digest {
    fn from(state: HashState) -> Self {
        Self(state.to_be_bytes())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl ConstantTimeEq for Digest {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in &self.0 {
            f.write_char(HEX_DIGITS[(byte >> 4) as usize] as char)?;
            f.write_char(HEX_DIGITS[(byte & 0x0f) as usize] as char)?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self:x})")
    }
}

/// Requested digest representation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// 32 raw bytes
    Bytes,
    /// 64 lowercase hex characters
    #[default]
    Hex,
}

/// Digest in the representation chosen by [`OutputFormat`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestOutput {
    /// 32 raw bytes
    Bytes([u8; HASH_LEN]),
    /// 64 lowercase hex characters
    Hex(String),
}

impl DigestOutput {
    /// Raw bytes, if this is [`DigestOutput::Bytes`]
    pub fn as_bytes(&self) -> Option<&[u8; HASH_LEN]> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            Self::Hex(_) => None,
        }
    }

    /// Hex string, if this is [`DigestOutput::Hex`]
    pub fn as_hex(&self) -> Option<&str> {
        match self {
            Self::Bytes(_) => None,
            Self::Hex(hex) => Some(hex),
        }
    }
}

/// SHA-256 of `message`.
///
/// Pads the message, then folds every block into the hash state in order
/// starting from H(0).
pub fn sha256(message: &[u8]) -> Digest {
    let padded = pad(message);

    log::trace!(
        "sha256: {} message bytes, {} blocks",
        message.len(),
        padded.block_count()
    );

    padded
        .blocks()
        .fold(HashState::INITIAL, |state, block| {
            compress(state, &MessageSchedule::expand(block))
        })
        .into()
}

/// SHA-256 of bytes or encoded text, in the requested output format.
///
/// Fails only when text cannot be encoded (see [`crate::TextEncoding`]).
pub fn sha256_input<'a>(
    input: impl Into<Input<'a>>,
    format: OutputFormat,
) -> Result<DigestOutput, Sha256Error> {
    let message = input.into().to_bytes()?;
    Ok(sha256(&message).encode(format))
}
