// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Text to message bytes

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::error::Sha256Error;

/// How text is turned into message bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    /// One byte per character, the byte being the code point.
    ///
    /// Characters above U+00FF are rejected with
    /// [`Sha256Error::NonByteCharacter`].
    #[default]
    Latin1,
    /// UTF-8 bytes of the string
    Utf8,
}

impl TextEncoding {
    /// Encode `text` into message bytes
    pub fn encode<'a>(self, text: &'a str) -> Result<Cow<'a, [u8]>, Sha256Error> {
        match self {
            Self::Utf8 => Ok(Cow::Borrowed(text.as_bytes())),
            // ASCII is identical under both encodings
            Self::Latin1 if text.is_ascii() => Ok(Cow::Borrowed(text.as_bytes())),
            Self::Latin1 => latin1(text).map(Cow::Owned),
        }
    }
}

fn latin1(text: &str) -> Result<Vec<u8>, Sha256Error> {
    text.chars()
        .enumerate()
        .map(|(index, c)| {
            u8::try_from(c).map_err(|_| {
                log::debug!("latin1: rejecting U+{:04X} at position {}", c as u32, index);
                Sha256Error::NonByteCharacter {
                    index,
                    code_point: c as u32,
                }
            })
        })
        .collect()
}

/// Message input: pre-encoded bytes, or text plus its encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    /// Raw message bytes
    Bytes(&'a [u8]),
    /// Text to encode first
    Text(&'a str, TextEncoding),
}

impl<'a> Input<'a> {
    /// Text with the legacy one-byte-per-character encoding
    pub fn latin1(text: &'a str) -> Self {
        Self::Text(text, TextEncoding::Latin1)
    }

    /// Message bytes, borrowed whenever no conversion is needed
    pub fn to_bytes(self) -> Result<Cow<'a, [u8]>, Sha256Error> {
        match self {
            Self::Bytes(bytes) => Ok(Cow::Borrowed(bytes)),
            Self::Text(text, encoding) => encoding.encode(text),
        }
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::Bytes(bytes)
    }
}
