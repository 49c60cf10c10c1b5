use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// Step a `BigInt` value that currently represents `from_scale` fractional
/// digits so that it represents `to_scale` fractional digits instead.
/// Stepping up (`to_scale > from_scale`) is exact; stepping down truncates
/// toward zero, which is the only rounding this crate ever performs.
pub(crate) fn shift_scale(value: &BigInt, from_scale: u32, to_scale: u32) -> BigInt {
    use core::cmp::Ordering::*;
    match to_scale.cmp(&from_scale) {
        Equal => value.clone(),
        Greater => value * pow10(to_scale - from_scale),
        Less => {
            let (q, _) = num_integer::Integer::div_rem(value, &pow10(from_scale - to_scale));
            q
        }
    }
}

/// `10^exp` as a `BigInt`. Small exponents are the overwhelmingly common
/// case (aligning operands that differ by a handful of decimal places), so
/// there is no need for the fixed lookup table the original's 0-28 scale
/// range allowed; `BigInt::pow` is already O(exp) multiplications.
pub(crate) fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u32).pow(exp)
}

/// `BigInt -> i64`, truncating conversion that fails (returns `None`) only
/// when the value doesn't fit, never when it's merely zero.
pub(crate) fn to_i64_checked(value: &BigInt) -> Option<i64> {
    value.to_i64()
}
