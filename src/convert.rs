//! Byte/number bridge.
//!
//! Every representation this crate knows about converts to a [`Bytes`] value
//! through [`ByteConvertible`], and from there to a [`Number`] by reading the
//! bytes as an unsigned big-endian magnitude.
//!
//! Fixed-width integers are captured big-endian by default, so `0x0102u16`
//! becomes `[0x01, 0x02]` and converts to the number `258`. Negative values are
//! captured as their two's-complement bit pattern and therefore convert to
//! large positive numbers (`-1i16` → `0xffff`). Use [`FixedWidth`] for the
//! other byte orders.

use num_bigint::BigUint;
use num_traits::Zero;
use tracing::debug;

use crate::bytes::Bytes;
use crate::config::ByteOrder;
use crate::encoding::{self, HexText};
use crate::error::{ConversionError, ConversionResult};

/// Arbitrary-precision non-negative integer.
pub type Number = BigUint;

/// Values that can be read as a [`Number`].
pub trait NumberConvertible {
    fn to_number(&self) -> Number;
}

/// Values with a canonical byte form.
pub trait ByteConvertible: NumberConvertible {
    fn to_bytes(&self) -> Bytes;

    #[inline]
    fn byte_count(&self) -> usize {
        self.to_bytes().len()
    }

    /// Lowercase hex of the byte form.
    #[inline]
    fn to_hex(&self) -> String {
        encoding::encode(self.to_bytes())
    }

    #[inline]
    fn to_hex_text(&self) -> HexText {
        HexText::encode(self.to_bytes())
    }
}

/// Values that can be rebuilt from bytes.
pub trait FromBytes: Sized {
    /// Lenient conversion; never fails.
    fn from_bytes(bytes: &[u8]) -> Self;

    /// Strict conversion.
    ///
    /// # Errors
    ///
    /// Implementations report input they would otherwise have had to pad,
    /// truncate or default.
    #[inline]
    fn try_from_bytes(bytes: &[u8]) -> ConversionResult<Self> {
        Ok(Self::from_bytes(bytes))
    }
}

/// Fixed-width integers with an explicit byte order.
pub trait FixedWidth: Copy {
    /// Size in bytes.
    const WIDTH: usize;

    fn to_bytes_in(self, order: ByteOrder) -> Bytes;

    /// # Errors
    ///
    /// Returns `ConversionError::LengthMismatch` unless `bytes.len() == Self::WIDTH`.
    fn from_bytes_in(bytes: &[u8], order: ByteOrder) -> ConversionResult<Self>;
}

/// Reads `bytes` as an unsigned big-endian magnitude; empty input is zero.
#[inline]
pub fn bytes_to_number(bytes: &[u8]) -> Number {
    Number::from_bytes_be(bytes)
}

/// Minimal big-endian magnitude of `number`; zero is the empty sequence.
#[inline]
pub fn number_to_bytes(number: &Number) -> Bytes {
    if number.is_zero() {
        Bytes::default()
    } else {
        Bytes::new(number.to_bytes_be())
    }
}

macro_rules! number_via_bytes {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NumberConvertible for $ty {
                #[inline]
                fn to_number(&self) -> Number {
                    bytes_to_number(&self.to_bytes())
                }
            }
        )*
    };
}

macro_rules! impl_fixed_width {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FixedWidth for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                #[inline]
                fn to_bytes_in(self, order: ByteOrder) -> Bytes {
                    let buf = match order {
                        ByteOrder::Big => self.to_be_bytes(),
                        ByteOrder::Little => self.to_le_bytes(),
                        ByteOrder::Native => self.to_ne_bytes(),
                    };
                    Bytes::from(buf)
                }

                #[inline]
                fn from_bytes_in(bytes: &[u8], order: ByteOrder) -> ConversionResult<Self> {
                    let buf: [u8; std::mem::size_of::<$ty>()] = bytes
                        .try_into()
                        .map_err(|_| ConversionError::length_mismatch(Self::WIDTH, bytes.len()))?;
                    Ok(match order {
                        ByteOrder::Big => <$ty>::from_be_bytes(buf),
                        ByteOrder::Little => <$ty>::from_le_bytes(buf),
                        ByteOrder::Native => <$ty>::from_ne_bytes(buf),
                    })
                }
            }

            impl ByteConvertible for $ty {
                #[inline]
                fn to_bytes(&self) -> Bytes {
                    self.to_bytes_in(ByteOrder::Big)
                }

                #[inline]
                fn byte_count(&self) -> usize {
                    Self::WIDTH
                }
            }

            number_via_bytes!($ty);
        )*
    };
}

impl_fixed_width!(u8, i8, u16, i16, u32, i32, u64, i64);

// Multi-byte integers read leniently as big-endian, keeping the value mod 2^bits:
// short input is zero-extended on the left, long input keeps its trailing bytes.
macro_rules! impl_wide_from_bytes {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromBytes for $ty {
                fn from_bytes(bytes: &[u8]) -> Self {
                    const WIDTH: usize = std::mem::size_of::<$ty>();
                    if bytes.len() != WIDTH {
                        debug!(
                            "Reading {} from {} bytes, expected {}",
                            stringify!($ty),
                            bytes.len(),
                            WIDTH
                        );
                    }
                    let take = bytes.len().min(WIDTH);
                    let mut buf = [0u8; WIDTH];
                    buf[WIDTH - take..].copy_from_slice(&bytes[bytes.len() - take..]);
                    <$ty>::from_be_bytes(buf)
                }

                #[inline]
                fn try_from_bytes(bytes: &[u8]) -> ConversionResult<Self> {
                    Self::from_bytes_in(bytes, ByteOrder::Big)
                }
            }
        )*
    };
}

impl_wide_from_bytes!(u16, i16, u32, i32, u64, i64);

impl FromBytes for u8 {
    /// First byte of the sequence, or `0` when it is empty.
    fn from_bytes(bytes: &[u8]) -> Self {
        match bytes.first() {
            Some(byte) => *byte,
            None => {
                debug!("Reading u8 from empty sequence, defaulting to 0");
                0
            }
        }
    }

    #[inline]
    fn try_from_bytes(bytes: &[u8]) -> ConversionResult<Self> {
        bytes.first().copied().ok_or(ConversionError::EmptyInput)
    }
}

impl FromBytes for i8 {
    #[inline]
    fn from_bytes(bytes: &[u8]) -> Self {
        u8::from_bytes(bytes) as i8
    }

    #[inline]
    fn try_from_bytes(bytes: &[u8]) -> ConversionResult<Self> {
        u8::try_from_bytes(bytes).map(|byte| byte as i8)
    }
}

impl ByteConvertible for [u8] {
    #[inline]
    fn to_bytes(&self) -> Bytes {
        Bytes::from(self)
    }

    #[inline]
    fn byte_count(&self) -> usize {
        self.len()
    }
}

impl<const N: usize> ByteConvertible for [u8; N] {
    #[inline]
    fn to_bytes(&self) -> Bytes {
        Bytes::from(*self)
    }

    #[inline]
    fn byte_count(&self) -> usize {
        N
    }
}

impl<const N: usize> NumberConvertible for [u8; N] {
    #[inline]
    fn to_number(&self) -> Number {
        bytes_to_number(self)
    }
}

impl ByteConvertible for Vec<u8> {
    #[inline]
    fn to_bytes(&self) -> Bytes {
        Bytes::from(self.as_slice())
    }

    #[inline]
    fn byte_count(&self) -> usize {
        self.len()
    }
}

impl ByteConvertible for Bytes {
    #[inline]
    fn to_bytes(&self) -> Bytes {
        self.clone()
    }

    #[inline]
    fn byte_count(&self) -> usize {
        self.len()
    }
}

impl ByteConvertible for HexText {
    #[inline]
    fn to_bytes(&self) -> Bytes {
        self.decode()
    }
}

/// Plain text converts through its UTF-8 encoding; wrap hex in [`HexText`].
impl ByteConvertible for str {
    #[inline]
    fn to_bytes(&self) -> Bytes {
        Bytes::from(self.as_bytes())
    }

    #[inline]
    fn byte_count(&self) -> usize {
        self.len()
    }
}

impl ByteConvertible for String {
    #[inline]
    fn to_bytes(&self) -> Bytes {
        self.as_str().to_bytes()
    }

    #[inline]
    fn byte_count(&self) -> usize {
        self.len()
    }
}

number_via_bytes!([u8], Vec<u8>, Bytes, HexText, str, String);

impl NumberConvertible for Number {
    #[inline]
    fn to_number(&self) -> Number {
        self.clone()
    }
}

impl ByteConvertible for Number {
    #[inline]
    fn to_bytes(&self) -> Bytes {
        number_to_bytes(self)
    }
}

impl FromBytes for Vec<u8> {
    #[inline]
    fn from_bytes(bytes: &[u8]) -> Self {
        bytes.to_vec()
    }
}

impl FromBytes for Bytes {
    #[inline]
    fn from_bytes(bytes: &[u8]) -> Self {
        Bytes::from(bytes)
    }
}

impl FromBytes for HexText {
    #[inline]
    fn from_bytes(bytes: &[u8]) -> Self {
        HexText::encode(bytes)
    }
}

impl FromBytes for Number {
    #[inline]
    fn from_bytes(bytes: &[u8]) -> Self {
        bytes_to_number(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_from_bytes() {
        assert_eq!(u8::from_bytes(&[]), 0);
        assert_eq!(u8::from_bytes(&[0x7f, 0x01]), 0x7f);
        assert_eq!(u8::try_from_bytes(&[]), Err(ConversionError::EmptyInput));
        assert_eq!(i8::from_bytes(&[0xff]), -1);
        assert_eq!(0xabu8.to_bytes(), [0xab]);
    }

    #[test]
    fn test_integers_default_to_big_endian() {
        assert_eq!(0x0102u16.to_bytes(), [0x01, 0x02]);
        assert_eq!(0x01020304u32.to_bytes(), [0x01, 0x02, 0x03, 0x04]);
        assert_eq!((-2i16).to_bytes(), [0xff, 0xfe]);
        assert_eq!(0u64.byte_count(), 8);
        assert_eq!(0x0102u16.to_number(), Number::from(258u32));
        assert_eq!((-1i16).to_number(), Number::from(0xffffu32));
    }

    #[test]
    fn test_fixed_width_orders() {
        let value = 0x0102_0304_0506_0708u64;
        assert_eq!(
            value.to_bytes_in(ByteOrder::Little),
            [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]
        );
        assert_eq!(
            value.to_bytes_in(ByteOrder::Native),
            value.to_bytes_in(ByteOrder::Native.resolve())
        );
        for order in [ByteOrder::Big, ByteOrder::Little, ByteOrder::Native] {
            let bytes = (-12345i32).to_bytes_in(order);
            assert_eq!(i32::from_bytes_in(&bytes, order), Ok(-12345));
        }
    }

    #[test]
    fn test_fixed_width_length_mismatch() {
        assert_eq!(
            u32::from_bytes_in(&[1, 2], ByteOrder::Big),
            Err(ConversionError::length_mismatch(4, 2))
        );
        assert_eq!(
            u16::try_from_bytes(&[1, 2, 3]),
            Err(ConversionError::length_mismatch(2, 3))
        );
    }

    #[test]
    fn test_lenient_wide_from_bytes() {
        assert_eq!(u32::from_bytes(&[0x01]), 1);
        assert_eq!(u32::from_bytes(&[]), 0);
        assert_eq!(u16::from_bytes(&[0xaa, 0x01, 0x02]), 0x0102);
        assert_eq!(i16::from_bytes(&[0xff, 0xff]), -1);
    }

    #[test]
    fn test_number_bytes() {
        assert_eq!(bytes_to_number(&[]), Number::zero());
        assert_eq!(bytes_to_number(&[0x01, 0x00]), Number::from(256u32));
        assert_eq!(number_to_bytes(&Number::zero()), Bytes::default());
        assert_eq!(number_to_bytes(&Number::from(256u32)), [0x01, 0x00]);
        assert_eq!(Number::from_bytes(&[0x00, 0x00, 0x05]), Number::from(5u32));
        assert_eq!(Number::from(5u32).to_number(), Number::from(5u32));
    }

    #[test]
    fn test_sequences_and_text() {
        let slice: &[u8] = &[0x01, 0x02];
        assert_eq!(slice.to_bytes(), [0x01, 0x02]);
        assert_eq!([0x01u8, 0x02].to_number(), Number::from(258u32));
        assert_eq!(vec![0xffu8].to_hex(), "ff");
        assert_eq!(HexText::new("0x0102").to_bytes(), [0x01, 0x02]);
        assert_eq!(HexText::new("0x0102").to_number(), Number::from(258u32));
        assert_eq!("AB".to_bytes(), [0x41, 0x42]);
        assert_eq!(String::from("AB").byte_count(), 2);
        assert_eq!(HexText::from_bytes(&[0x0a]).as_str(), "0a");
        assert_eq!(Vec::<u8>::from_bytes(&[3]), vec![3]);
    }
}
