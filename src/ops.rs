//! Combinators over mixed representations.
//!
//! Arithmetic coerces both operands to [`Number`]; a `Number` operand passes
//! through unchanged. Concatenation works on byte forms and never touches its
//! operands. The `+` operators on [`Bytes`] are shorthand for [`concat`],
//! [`concat_opt`] and [`append_byte`].

use std::ops::{Add, AddAssign};

use crate::bytes::Bytes;
use crate::convert::{ByteConvertible, Number, NumberConvertible};

/// Sum of two values read as numbers.
#[inline]
pub fn add<L, R>(lhs: &L, rhs: &R) -> Number
where
    L: NumberConvertible + ?Sized,
    R: NumberConvertible + ?Sized,
{
    lhs.to_number() + rhs.to_number()
}

/// Product of two values read as numbers.
#[inline]
pub fn mul<L, R>(lhs: &L, rhs: &R) -> Number
where
    L: NumberConvertible + ?Sized,
    R: NumberConvertible + ?Sized,
{
    lhs.to_number() * rhs.to_number()
}

/// `lhs`'s bytes followed by `rhs`'s bytes.
pub fn concat<L, R>(lhs: &L, rhs: &R) -> Bytes
where
    L: ByteConvertible + ?Sized,
    R: ByteConvertible + ?Sized,
{
    let mut out = lhs.to_bytes();
    out.extend_from_slice(&rhs.to_bytes());
    out
}

/// Like [`concat`], with `None` acting as the empty sequence.
pub fn concat_opt<L, R>(lhs: &L, rhs: Option<&R>) -> Bytes
where
    L: ByteConvertible + ?Sized,
    R: ByteConvertible + ?Sized,
{
    match rhs {
        Some(rhs) => concat(lhs, rhs),
        None => lhs.to_bytes(),
    }
}

/// `lhs`'s bytes followed by a single `byte`.
pub fn append_byte<L>(lhs: &L, byte: u8) -> Bytes
where
    L: ByteConvertible + ?Sized,
{
    let mut out = lhs.to_bytes();
    out.push(byte);
    out
}

impl<R: ByteConvertible + ?Sized> Add<&R> for Bytes {
    type Output = Bytes;

    #[inline]
    fn add(mut self, rhs: &R) -> Bytes {
        self.extend_from_slice(&rhs.to_bytes());
        self
    }
}

impl<R: ByteConvertible + ?Sized> Add<&R> for &Bytes {
    type Output = Bytes;

    #[inline]
    fn add(self, rhs: &R) -> Bytes {
        concat(self, rhs)
    }
}

impl<R: ByteConvertible + ?Sized> Add<Option<&R>> for Bytes {
    type Output = Bytes;

    #[inline]
    fn add(self, rhs: Option<&R>) -> Bytes {
        match rhs {
            Some(rhs) => self + rhs,
            None => self,
        }
    }
}

impl<R: ByteConvertible + ?Sized> Add<Option<&R>> for &Bytes {
    type Output = Bytes;

    #[inline]
    fn add(self, rhs: Option<&R>) -> Bytes {
        concat_opt(self, rhs)
    }
}

impl Add<u8> for Bytes {
    type Output = Bytes;

    #[inline]
    fn add(mut self, byte: u8) -> Bytes {
        self.push(byte);
        self
    }
}

impl Add<u8> for &Bytes {
    type Output = Bytes;

    #[inline]
    fn add(self, byte: u8) -> Bytes {
        append_byte(self, byte)
    }
}

impl<R: ByteConvertible + ?Sized> AddAssign<&R> for Bytes {
    #[inline]
    fn add_assign(&mut self, rhs: &R) {
        self.extend_from_slice(&rhs.to_bytes());
    }
}

impl AddAssign<u8> for Bytes {
    #[inline]
    fn add_assign(&mut self, byte: u8) {
        self.push(byte);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::HexText;

    #[test]
    fn test_arithmetic_mixed_operands() {
        let n = Number::from(10u32);
        assert_eq!(add(&n, &5u8), Number::from(15u32));
        assert_eq!(add(&5u8, &n), Number::from(15u32));
        assert_eq!(add(&0x0100u16, &[0x01u8]), Number::from(257u32));
        assert_eq!(mul(&n, &n), Number::from(100u32));
        assert_eq!(mul(&HexText::new("ff"), &2u8), Number::from(510u32));
    }

    #[test]
    fn test_concat() {
        let a = Bytes::from([0x01, 0x02]);
        let b = Bytes::from([0x03]);
        assert_eq!(concat(&a, &b), [0x01, 0x02, 0x03]);
        // operands are untouched
        assert_eq!(a, [0x01, 0x02]);
        assert_eq!(b, [0x03]);
        assert_eq!(concat(&0x0102u16, "A"), [0x01, 0x02, 0x41]);
    }

    #[test]
    fn test_concat_opt_none_is_identity() {
        let a = Bytes::from([0x01, 0x02]);
        assert_eq!(concat_opt::<_, Bytes>(&a, None), a);
        assert_eq!(concat_opt(&a, Some(&0x03u8)), [0x01, 0x02, 0x03]);
        assert_eq!(concat_opt::<_, [u8]>(&7u8, None), [0x07]);
    }

    #[test]
    fn test_append_byte() {
        assert_eq!(append_byte(&HexText::new("0a0b"), 0x0c), [0x0a, 0x0b, 0x0c]);
        assert_eq!(append_byte(&Bytes::default(), 0xff), [0xff]);
    }

    #[test]
    fn test_bytes_operators() {
        let a = Bytes::from([0x01]);
        assert_eq!(&a + &[0x02u8, 0x03], [0x01, 0x02, 0x03]);
        assert_eq!(&a + 0x09u8, [0x01, 0x09]);
        assert_eq!(&a + None::<&Bytes>, [0x01]);
        assert_eq!(a.clone() + Some(&HexText::new("ff")), [0x01, 0xff]);

        let mut acc = a + &0x0203u16;
        acc += 0x04u8;
        acc += &vec![0x05u8];
        assert_eq!(acc, [0x01, 0x02, 0x03, 0x04, 0x05]);
    }
}
