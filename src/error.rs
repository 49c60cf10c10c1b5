#[cfg(doc)]
use crate::Number;
use core::fmt;

/// Errors that can be returned from fallible [`Number`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Division, modulo or divmod attempted with a zero divisor.
    DivByZero,
    /// `raise_mod` was called with a negative exponent.
    NegativeExponent,
    /// The integer part of an exponent given to `raise` does not fit a machine
    /// integer and the base has magnitude greater than one.
    ExponentOverflow,
    /// `out_num` or `to_radix_string` was called with a base smaller than two.
    InvalidBase,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::DivByZero => "division by zero".fmt(f),
            Error::NegativeExponent => "negative exponent in modular exponentiation".fmt(f),
            Error::ExponentOverflow => "exponent too large".fmt(f),
            Error::InvalidBase => "base must be at least 2".fmt(f),
        }
    }
}
