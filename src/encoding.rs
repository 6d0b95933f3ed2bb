//! Hexadecimal codec.
//!
//! Encoding always produces lowercase digits with no prefix or separators.
//! Decoding is deliberately forgiving about *shape* and unforgiving about
//! *content*:
//!
//! - a leading `0x` is skipped (only the lowercase form is recognised);
//! - upper and lower case digits are both accepted;
//! - an odd trailing digit becomes a byte of its own, unshifted (`"5"` → `0x05`);
//! - any other character makes [`decode`] return an empty vector, dropping
//!   everything decoded so far. [`try_decode`] reports the same condition as
//!   [`ConversionError::MalformedHex`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bytes::Bytes;
use crate::config::FailurePolicy;
use crate::error::{ConversionError, ConversionResult};

/// Prefix skipped by the decoder.
pub const HEX_PREFIX: &str = "0x";

/// Encode bytes as lowercase hex, two digits per byte.
#[inline]
pub fn encode<T: AsRef<[u8]>>(data: T) -> String {
    hex::encode(data)
}

/// Decode hex text, returning an empty vector if any character is not a hex digit.
pub fn decode(text: &str) -> Vec<u8> {
    match try_decode(text) {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!("Discarding malformed hex input of {} bytes: {}", text.len(), err);
            Vec::new()
        }
    }
}

/// Decode hex text, reporting the first invalid character.
///
/// The packing rules are the same as [`decode`]; only the failure is surfaced.
///
/// # Errors
///
/// Returns `ConversionError::MalformedHex` with the character position counted
/// from the start of `text` (prefix included).
pub fn try_decode(text: &str) -> ConversionResult<Vec<u8>> {
    let (offset, digits) = match text.strip_prefix(HEX_PREFIX) {
        Some(rest) => (HEX_PREFIX.len(), rest),
        None => (0, text),
    };

    let mut bytes = Vec::with_capacity(digits.len() / 2 + 1);
    let mut high: Option<u8> = None;

    for (index, c) in digits.chars().enumerate() {
        let value = nibble(c).ok_or_else(|| ConversionError::malformed_hex(offset + index, c))?;
        match high.take() {
            Some(h) => bytes.push((h << 4) | value),
            None => high = Some(value),
        }
    }

    // odd digit count: the last nibble stands alone in the low bits
    if let Some(low) = high {
        bytes.push(low);
    }

    Ok(bytes)
}

/// Decode hex text under the given failure policy.
///
/// # Errors
///
/// Only `FailurePolicy::Strict` can fail, with `ConversionError::MalformedHex`.
pub fn decode_with(text: &str, policy: FailurePolicy) -> ConversionResult<Vec<u8>> {
    match policy {
        FailurePolicy::Lenient => Ok(decode(text)),
        FailurePolicy::Strict => try_decode(text),
    }
}

/// Returns true when every character after the optional prefix is a hex digit.
pub fn is_valid(text: &str) -> bool {
    let digits = text.strip_prefix(HEX_PREFIX).unwrap_or(text);
    digits.chars().all(|c| nibble(c).is_some())
}

/// Value of a single hex digit.
#[inline]
pub const fn nibble(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        _ => None,
    }
}

/// Text that is read as hexadecimal when converted to bytes.
///
/// `HexText::new` accepts anything and defers judgement to conversion time,
/// where the lenient decoder applies. `HexText::parse` and `FromStr` validate
/// up front.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexText(String);

impl HexText {
    /// Wraps text without validating it.
    #[inline]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Wraps text after checking that it decodes cleanly.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::MalformedHex` if any character is not a hex digit.
    pub fn parse(text: impl Into<String>) -> ConversionResult<Self> {
        let text = text.into();
        try_decode(&text)?;
        Ok(Self(text))
    }

    /// Canonical lowercase encoding of `data`.
    #[inline]
    pub fn encode<T: AsRef<[u8]>>(data: T) -> Self {
        Self(encode(data))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lenient decode of the wrapped text.
    #[inline]
    pub fn decode(&self) -> Bytes {
        Bytes::new(decode(&self.0))
    }

    /// Strict decode of the wrapped text.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::MalformedHex` if any character is not a hex digit.
    #[inline]
    pub fn try_decode(&self) -> ConversionResult<Bytes> {
        try_decode(&self.0).map(Bytes::new)
    }
}

impl fmt::Display for HexText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for HexText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexText({:?})", self.0)
    }
}

impl FromStr for HexText {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for HexText {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<HexText> for String {
    #[inline]
    fn from(value: HexText) -> Self {
        value.0
    }
}
