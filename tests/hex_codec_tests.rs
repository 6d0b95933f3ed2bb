//! Hex codec behaviour tests.
//!
//! These pin down the exact decoding rules that callers depend on: prefix
//! skipping, unshifted odd trailing nibbles and abort-and-clear on bad input.

use drbg_data::{decode_hex, encode_hex, try_decode_hex, Bytes, ConversionError, HexText};
use hex_literal::hex;

#[test]
fn test_encode_known_vectors() {
    assert_eq!(encode_hex(hex!("00")), "00");
    assert_eq!(encode_hex(hex!("05")), "05");
    assert_eq!(encode_hex(hex!("deadbeefcafebabe")), "deadbeefcafebabe");
    assert_eq!(encode_hex(Vec::<u8>::new()), "");
}

#[test]
fn test_encode_length_is_twice_input() {
    let data: Vec<u8> = (0..=255).collect();
    let encoded = encode_hex(&data);
    assert_eq!(encoded.len(), data.len() * 2);
    assert!(encoded.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
}

#[test]
fn test_decode_empty_inputs() {
    assert!(decode_hex("").is_empty());
    assert!(decode_hex("0x").is_empty());
}

#[test]
fn test_decode_case_insensitive() {
    assert_eq!(decode_hex("0xFF"), hex!("ff"));
    assert_eq!(decode_hex("ff"), hex!("ff"));
    assert_eq!(
        encode_hex(decode_hex("0xDEADbeef")),
        "deadbeef",
        "re-encoding lowercases"
    );
}

#[test]
fn test_decode_single_nibble() {
    assert_eq!(decode_hex("a"), vec![0x0a]);
    assert_eq!(decode_hex("0xf"), vec![0x0f]);
    assert_eq!(decode_hex("abc"), vec![0xab, 0x0c]);
}

#[test]
fn test_decode_invalid_discards_partial_result() {
    assert!(decode_hex("zz").is_empty());
    assert!(decode_hex("00112233z").is_empty());
    assert!(decode_hex("0x00-11").is_empty());
    // the prefix is only recognised in lowercase
    assert!(decode_hex("0XFF").is_empty());
    // a prefix that is not at the start is just an invalid character
    assert!(decode_hex("ff0x").is_empty());
}

#[test]
fn test_try_decode_errors() {
    assert_eq!(
        try_decode_hex("00112233z"),
        Err(ConversionError::MalformedHex {
            position: 8,
            character: 'z'
        })
    );
    assert_eq!(
        try_decode_hex("0X"),
        Err(ConversionError::MalformedHex {
            position: 1,
            character: 'X'
        })
    );
    assert_eq!(try_decode_hex("0xabc"), Ok(vec![0xab, 0x0c]));
}

#[test]
fn test_hex_text_and_bytes_agree() {
    let text = HexText::new("0x0102FF");
    assert_eq!(text.decode(), Bytes::from_hex(text.as_str()));
    assert_eq!(text.decode().to_hex_text(), HexText::new("0102ff"));
}

#[test]
fn test_hex_text_serde_is_transparent() {
    let text = HexText::new("abcd");
    assert_eq!(serde_json::to_string(&text).unwrap(), "\"abcd\"");
    let back: HexText = serde_json::from_str("\"abcd\"").unwrap();
    assert_eq!(back, text);
}
