//! # DRBG Data
//!
//! Byte-level conversions underneath HMAC-DRBG style primitives.
//!
//! This crate lets higher-level code move freely between:
//! - raw byte sequences (`Bytes`, `[u8]`, `Vec<u8>`, `[u8; N]`)
//! - hexadecimal text (`HexText`)
//! - fixed-width integers (`u8`..`u64`, `i8`..`i64`)
//! - arbitrary-precision numbers (`Number`, a `num_bigint::BigUint`)
//!
//! and combine them with `+`/`*` and concatenation without manual casting.
//!
//! ## Design Principles
//!
//! - **Lenient by default**: malformed hex decodes to an empty sequence and an
//!   empty sequence reads as the byte `0`. Strict `try_*` variants report these
//!   cases as [`ConversionError`].
//! - **Explicit byte order**: integers are captured big-endian unless a
//!   [`ByteOrder`] says otherwise.
//! - **Stateless**: every conversion is a pure function of its inputs.
//!
//! ## Example
//!
//! ```rust
//! use drbg_data::{concat, decode_hex, mul, Bytes, HexText, Number};
//!
//! assert_eq!(decode_hex("0xFF"), vec![0xff]);
//! assert_eq!(decode_hex("a"), vec![0x0a]);
//! assert!(decode_hex("zz").is_empty());
//!
//! let joined = concat(&Bytes::from([0x01, 0x02]), &0x0304u16);
//! assert_eq!(joined.to_hex(), "01020304");
//!
//! assert_eq!(mul(&HexText::new("ff"), &2u8), Number::from(510u32));
//! ```

pub mod bytes;
pub mod config;
pub mod convert;
pub mod encoding;
pub mod error;
pub mod ops;

// Re-exports
pub use bytes::Bytes;
pub use config::{ByteOrder, ConversionConfig, Converter, FailurePolicy};
pub use convert::{
    bytes_to_number, number_to_bytes, ByteConvertible, FixedWidth, FromBytes, Number,
    NumberConvertible,
};
pub use encoding::{
    decode as decode_hex, decode_with as decode_hex_with, encode as encode_hex,
    try_decode as try_decode_hex, HexText,
};
pub use error::{ConversionError, ConversionResult};
pub use ops::{add, append_byte, concat, concat_opt, mul};
