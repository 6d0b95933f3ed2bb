//! Conversion configuration.
//!
//! Two behaviours are configurable: the byte order used when fixed-width
//! integers are captured as bytes, and whether unreadable input (malformed
//! hex, an empty sequence read as a byte) falls back silently or is reported.
//!
//! ```toml
//! byte_order = "big"          # "big" | "little" | "native"
//! failure_policy = "lenient"  # "lenient" | "strict"
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::bytes::Bytes;
use crate::convert::{FixedWidth, FromBytes};
use crate::encoding;
use crate::error::ConversionResult;

/// Byte order for fixed-width integer capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Most significant byte first; agrees with how bytes are read as a `Number`.
    #[default]
    Big,
    Little,
    /// Host memory order. Output differs between platforms.
    Native,
}

impl ByteOrder {
    /// The concrete order `Native` stands for on this host.
    #[inline]
    pub const fn resolve(self) -> Self {
        match self {
            ByteOrder::Native if cfg!(target_endian = "big") => ByteOrder::Big,
            ByteOrder::Native => ByteOrder::Little,
            other => other,
        }
    }
}

/// What a [`Converter`] does with input it cannot read: hex text containing a
/// non-hex character, or an empty sequence read as a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Fall back: malformed hex yields an empty sequence, an empty read yields `0`.
    #[default]
    Lenient,
    /// Return `ConversionError::MalformedHex` or `ConversionError::EmptyInput`.
    Strict,
}

/// Conversion settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConversionConfig {
    pub byte_order: ByteOrder,
    pub failure_policy: FailurePolicy,
}

impl ConversionConfig {
    /// Strict failure policy with the default byte order.
    pub fn strict() -> Self {
        Self {
            failure_policy: FailurePolicy::Strict,
            ..Self::default()
        }
    }

    /// Parses a configuration from TOML; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::Config` if the document is not valid TOML or
    /// names an unknown order or policy.
    pub fn from_toml_str(source: &str) -> ConversionResult<Self> {
        Ok(toml::from_str(source)?)
    }
}

/// Applies a [`ConversionConfig`] to the codec and bridge functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    config: ConversionConfig,
}

impl Converter {
    pub fn new(config: ConversionConfig) -> Self {
        trace!(
            "Converter configured: byte_order={:?} failure_policy={:?}",
            config.byte_order,
            config.failure_policy
        );
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    #[inline]
    pub fn encode_hex<T: AsRef<[u8]>>(&self, data: T) -> String {
        encoding::encode(data)
    }

    /// Decodes hex text under the configured policy.
    ///
    /// # Errors
    ///
    /// Fails only under `FailurePolicy::Strict`, with `ConversionError::MalformedHex`.
    pub fn decode_hex(&self, text: &str) -> ConversionResult<Bytes> {
        encoding::decode_with(text, self.config.failure_policy).map(Bytes::new)
    }

    /// Captures an integer in the configured byte order.
    #[inline]
    pub fn int_to_bytes<T: FixedWidth>(&self, value: T) -> Bytes {
        value.to_bytes_in(self.config.byte_order)
    }

    /// Reads an integer in the configured byte order.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::LengthMismatch` unless `bytes` is exactly `T::WIDTH` long.
    #[inline]
    pub fn int_from_bytes<T: FixedWidth>(&self, bytes: &[u8]) -> ConversionResult<T> {
        T::from_bytes_in(bytes, self.config.byte_order)
    }

    /// Reads the first byte; an empty sequence yields `0` under the lenient
    /// policy and `ConversionError::EmptyInput` under the strict one.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::EmptyInput` under `FailurePolicy::Strict`.
    pub fn byte_from_bytes(&self, bytes: &[u8]) -> ConversionResult<u8> {
        match self.config.failure_policy {
            FailurePolicy::Lenient => Ok(u8::from_bytes(bytes)),
            FailurePolicy::Strict => u8::try_from_bytes(bytes),
        }
    }
}
