//! The core [`Number`] value: a signed big-integer magnitude paired with a
//! non-negative decimal scale.

use alloc::rc::Rc;
use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::error::Error;

lazy_static::lazy_static! {
    static ref ZERO_VALUE: Rc<BigInt> = Rc::new(BigInt::zero());
    static ref ONE_VALUE: Rc<BigInt> = Rc::new(BigInt::from(1));
    static ref TWO_VALUE: Rc<BigInt> = Rc::new(BigInt::from(2));
}

/// An arbitrary-precision decimal value: `sign * digits * 10^(-scale)`.
///
/// Cloning a `Number` is cheap; the underlying magnitude is reference-counted
/// and is only copied when a mutation (currently just in-place negation)
/// would otherwise disturb a value another handle can see.
#[derive(Clone, Debug)]
pub struct Number {
    value: Rc<BigInt>,
    scale: u32,
}

impl Number {
    /// A fresh zero value at the given scale.
    pub fn new(scale: u32) -> Number {
        Number {
            value: Rc::clone(&ZERO_VALUE),
            scale,
        }
    }

    /// The shared zero singleton, scale 0.
    pub fn zero() -> Number {
        Number::new(0)
    }

    /// The shared one singleton, scale 0.
    pub fn one() -> Number {
        Number {
            value: Rc::clone(&ONE_VALUE),
            scale: 0,
        }
    }

    /// The shared two singleton, scale 0.
    pub fn two() -> Number {
        Number {
            value: Rc::clone(&TWO_VALUE),
            scale: 0,
        }
    }

    pub(crate) fn from_bigint(value: BigInt, scale: u32) -> Number {
        Number {
            value: Rc::new(value),
            scale,
        }
    }

    pub(crate) fn bigint(&self) -> &BigInt {
        &self.value
    }

    /// The declared scale: the number of digits after the decimal point.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// `true` if the value is exactly zero, regardless of scale.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// `true` if the value is strictly negative.
    pub fn is_neg(&self) -> bool {
        self.value.is_negative()
    }

    /// The number of significant digits in the magnitude (sign excluded).
    /// Zero has a length of one digit, matching the base-10 rendering of
    /// the underlying big integer (`"0"`).
    pub fn length(&self) -> u64 {
        self.value.abs().to_str_radix(10).len() as u64
    }

    /// Negate in place when this is the sole owner of the backing value,
    /// otherwise allocate a fresh negated value. Negating zero is always a
    /// no-op, which also keeps the shared zero singleton immutable.
    pub fn negate_mut(&mut self) {
        if self.value.is_zero() {
            return;
        }
        match Rc::get_mut(&mut self.value) {
            Some(v) => {
                let negated = -core::mem::take(v);
                *v = negated;
            }
            None => {
                self.value = Rc::new(-self.value.as_ref().clone());
            }
        }
    }

    /// The negation of this value, as a new `Number`.
    pub fn negated(&self) -> Number {
        let mut n = self.clone();
        n.negate_mut();
        n
    }

    /// Truncating conversion to `i64`. Returns 0 both for a genuine zero
    /// value and for a value too large to fit; use [`Number::fits_i64`] to
    /// disambiguate, matching the original `bc_num2long` contract.
    pub fn to_i64(&self) -> i64 {
        let truncated = crate::ops::common::shift_scale(&self.value, self.scale, 0);
        match crate::ops::common::to_i64_checked(&truncated) {
            Some(v) if v != i64::MIN => v,
            _ => 0,
        }
    }

    /// Whether the truncated integer part of this value fits in an `i64`.
    pub fn fits_i64(&self) -> bool {
        let truncated = crate::ops::common::shift_scale(&self.value, self.scale, 0);
        matches!(crate::ops::common::to_i64_checked(&truncated), Some(v) if v != i64::MIN)
    }

    /// Signed integer compare against `other` after aligning scales. This is
    /// the magnitude-aware compare used by `Ord`.
    pub fn compare(&self, other: &Number) -> Ordering {
        crate::ops::cmp::compare(self, other, true)
    }

    /// Magnitude-only compare against `other` after aligning scales.
    pub fn compare_abs(&self, other: &Number) -> Ordering {
        crate::ops::cmp::compare(self, other, false)
    }

    /// `self + other`, with the result scale at least `scale_min`.
    pub fn add_scaled(&self, other: &Number, scale_min: u32) -> Number {
        crate::ops::add::add(self, other, scale_min)
    }

    /// `self - other`, with the result scale at least `scale_min`.
    pub fn sub_scaled(&self, other: &Number, scale_min: u32) -> Number {
        crate::ops::add::sub(self, other, scale_min)
    }

    /// `self * other`, truncated to at most `scale` fractional digits (but
    /// never below either operand's own scale).
    pub fn multiply(&self, other: &Number, scale: u32) -> Number {
        crate::ops::mul::multiply(self, other, scale)
    }

    /// Truncating division `self / other` to `scale` fractional digits.
    pub fn divide(&self, other: &Number, scale: u32) -> Result<Number, Error> {
        crate::ops::div::divide(self, other, scale)
    }

    /// Simultaneous quotient and remainder, satisfying
    /// `self == quotient * other + remainder` at the chosen working scale.
    pub fn divmod(&self, other: &Number, scale: u32) -> Result<(Number, Number), Error> {
        crate::ops::div::divmod(self, other, scale)
    }

    /// `self % other`, per the same working scale as [`Number::divmod`].
    pub fn modulo(&self, other: &Number, scale: u32) -> Result<Number, Error> {
        crate::ops::div::modulo(self, other, scale)
    }

    /// Raise `self` to the integer power `expo`, truncating any fractional
    /// part of the exponent (with a warning).
    pub fn raise(&self, expo: &Number, scale: u32) -> Result<Number, Error> {
        crate::ops::pow::raise(self, expo, scale)
    }

    /// Modular exponentiation `self ^ expo mod modulus`.
    pub fn raise_mod(&self, expo: &Number, modulus: &Number, scale: u32) -> Result<Number, Error> {
        crate::ops::pow::raise_mod(self, expo, modulus, scale)
    }

    /// The truncated integer square root, at working scale
    /// `max(scale, self.scale())`. Returns `None` for a negative value.
    pub fn sqrt(&self, scale: u32) -> Option<Number> {
        crate::ops::sqrt::sqrt(self, scale)
    }

    /// Parse a base-10 textual number, truncating the fractional part to at
    /// most `scale` digits. Malformed input silently degrades to zero,
    /// matching the front-end-validates-first contract of the original.
    pub fn parse(text: &str, scale: u32) -> Number {
        crate::str::parse::parse(text, scale)
    }

    /// Format in the given base. For `base == 10` this is identical to
    /// `Display`. Digits are written through `emit` one character at a time.
    pub fn out_num(&self, base: u32, leading_zero: bool, emit: impl FnMut(char)) -> Result<(), Error> {
        crate::str::radix::out_num(self, base, leading_zero, emit)
    }

    /// Convenience wrapper over [`Number::out_num`] that collects the output
    /// into an owned `String`.
    pub fn to_radix_string(&self, base: u32, leading_zero: bool) -> Result<String, Error> {
        let mut out = String::new();
        self.out_num(base, leading_zero, |c| out.push(c))?;
        Ok(out)
    }
}

impl Default for Number {
    fn default() -> Number {
        Number::zero()
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl core::ops::Neg for Number {
    type Output = Number;
    fn neg(self) -> Number {
        self.negated()
    }
}

impl core::ops::Neg for &Number {
    type Output = Number;
    fn neg(self) -> Number {
        self.negated()
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Number {
                    Number::from_bigint(BigInt::from(value), 0)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::str::fmt::format(self, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_has_length_one() {
        assert_eq!(Number::zero().length(), 1);
    }

    #[test]
    fn negate_twice_is_identity() {
        let n = Number::parse("12.50", 2);
        let back = n.negated().negated();
        assert_eq!(n, back);
        assert_eq!(back.scale(), n.scale());
    }

    #[test]
    fn negate_zero_is_noop() {
        let mut z = Number::zero();
        z.negate_mut();
        assert!(z.is_zero());
        assert!(!z.is_neg());
    }

    #[test]
    fn from_integer_has_scale_zero() {
        let n = Number::from(42i64);
        assert_eq!(n.scale(), 0);
        assert_eq!(n.to_i64(), 42);
    }

    #[test]
    fn shared_singletons_compare_equal_to_parsed() {
        assert_eq!(Number::zero(), Number::parse("0", 4));
        assert_eq!(Number::one(), Number::parse("1.000", 3));
    }
}
