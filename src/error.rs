//! Error types for the strict conversion variants.
//!
//! The default conversions in this crate never fail: malformed hex decodes to an
//! empty sequence and an empty sequence reads as the byte `0`. The `try_*`
//! functions surface those situations through [`ConversionError`] instead.

use thiserror::Error;

/// Result type alias for strict conversion operations.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Conversion failures reported by the strict variants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// A character outside `0-9`, `A-F`, `a-f` was found in hex text.
    #[error("Malformed hex: invalid character {character:?} at position {position}")]
    MalformedHex { position: usize, character: char },

    /// A value was requested from an empty byte sequence.
    #[error("Empty input: at least one byte is required")]
    EmptyInput,

    /// A fixed-width integer was read from a sequence of the wrong length.
    #[error("Length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The conversion configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ConversionError {
    /// Helper for creating a malformed hex error.
    pub fn malformed_hex(position: usize, character: char) -> Self {
        Self::MalformedHex {
            position,
            character,
        }
    }

    /// Helper for creating a length mismatch error.
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    /// Helper for creating a configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<toml::de::Error> for ConversionError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(err.to_string())
    }
}
