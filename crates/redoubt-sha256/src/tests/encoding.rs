// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::borrow::Cow;

use crate::digest::sha256;
use crate::encoding::{Input, TextEncoding};
use crate::error::Sha256Error;

#[test]
fn test_latin1_is_default() {
    assert_eq!(TextEncoding::default(), TextEncoding::Latin1);
}

#[test]
fn test_latin1_ascii_is_borrowed() {
    let encoded = TextEncoding::Latin1.encode("abc").expect("ascii");
    assert!(matches!(encoded, Cow::Borrowed(_)));
    assert_eq!(&*encoded, b"abc");
}

#[test]
fn test_latin1_one_byte_per_character() {
    let encoded = TextEncoding::Latin1.encode("café ÿ").expect("latin1");
    assert_eq!(&*encoded, &[b'c', b'a', b'f', 0xe9, b' ', 0xff]);
}

#[test]
fn test_latin1_rejects_first_non_byte_character() {
    let err = TextEncoding::Latin1
        .encode("aĀb€")
        .expect_err("U+0100 is the first code point above a byte");

    assert_eq!(
        err,
        Sha256Error::NonByteCharacter {
            index: 1,
            code_point: 0x100,
        }
    );
}

#[test]
fn test_non_byte_character_message() {
    let err = Sha256Error::NonByteCharacter {
        index: 3,
        code_point: 0x20ac,
    };

    assert_eq!(
        alloc::format!("{err}"),
        "character U+20AC at position 3 does not fit in a single byte"
    );
    assert_eq!(alloc::format!("{}", Sha256Error::TagMismatch), "HMAC tag mismatch");
}

#[test]
fn test_utf8_never_fails() {
    let encoded = TextEncoding::Utf8.encode("é€").expect("utf-8");
    assert_eq!(&*encoded, "é€".as_bytes());
}

#[test]
fn test_input_to_bytes() {
    let bytes = Input::Bytes(&[1, 2, 3]).to_bytes().expect("bytes");
    assert_eq!(&*bytes, &[1, 2, 3]);

    let text = Input::latin1("é").to_bytes().expect("latin1");
    assert_eq!(&*text, &[0xe9]);

    let utf8 = Input::Text("é", TextEncoding::Utf8).to_bytes().expect("utf-8");
    assert_eq!(&*utf8, &[0xc3, 0xa9]);
}

#[test]
fn test_latin1_text_hashes_like_its_bytes() {
    let encoded = Input::latin1("é").to_bytes().expect("latin1");

    assert_eq!(
        sha256(&encoded).to_hex(),
        "de2e331d891ae267a7009cb45b4e8830f170e0c937288ea2731a1941c7a53b0d"
    );
}
