use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Pow, Zero};

use crate::error::Error;
use crate::number::Number;
use crate::ops::common::shift_scale;

/// Raise `base` to the integer power `expo`, truncating any fractional
/// part of the exponent (warning when it was non-zero).
///
/// Working scale is `min(base.scale() * |expo|, max(scale, base.scale()))`
/// for a non-negative exponent, or the requested `scale` directly for a
/// negative one (since a negative power routes through [`divide`]).
pub(crate) fn raise(base: &Number, expo: &Number, scale: u32) -> Result<Number, Error> {
    if expo.scale() != 0 {
        log::warn!(
            "raise: exponent has non-zero scale {}; truncating to its integer part",
            expo.scale()
        );
    }
    let e_int = shift_scale(expo.bigint(), expo.scale(), 0);
    if e_int.is_zero() {
        return Ok(Number::one());
    }

    let neg = e_int.sign() == num_bigint::Sign::Minus;
    let base_magnitude_le_one = base.bigint().magnitude() <= &BigUint::one();

    let e_abs_u32 = match to_u32_magnitude(&e_int) {
        Some(e) => e,
        None if base_magnitude_le_one && base.scale() == 0 => {
            let odd = Integer::is_odd(&e_int);
            return raise_unit_base(base, odd, neg);
        }
        None => return Err(Error::ExponentOverflow),
    };

    let full_scale: u64 = (base.scale() as u64) * (e_abs_u32 as u64);
    let full_scale: u32 = full_scale.try_into().map_err(|_| Error::ExponentOverflow)?;

    let rscale = if neg { scale } else { full_scale.min(scale.max(base.scale())) };

    let power: BigInt = Pow::pow(base.bigint().clone(), e_abs_u32);
    let temp = shift_scale(&power, full_scale, rscale);

    if neg {
        let temp = Number::from_bigint(temp, rscale);
        crate::ops::div::divide(&Number::one(), &temp, rscale)
    } else {
        Ok(Number::from_bigint(temp, rscale))
    }
}

/// `base == -1, 0, 1` with an exponent too large to hold in a machine word:
/// the result is still computable in O(1), since the magnitude never
/// changes and only the sign (for `-1`, by parity of the exponent) matters.
fn raise_unit_base(base: &Number, expo_is_odd: bool, expo_is_neg: bool) -> Result<Number, Error> {
    if base.is_zero() {
        return if expo_is_neg { Err(Error::DivByZero) } else { Ok(Number::zero()) };
    }
    if base.is_neg() {
        Ok(if expo_is_odd { Number::from_bigint(BigInt::from(-1), 0) } else { Number::one() })
    } else {
        Ok(Number::one())
    }
}

fn to_u32_magnitude(value: &BigInt) -> Option<u32> {
    let digits = value.magnitude().to_u32_digits();
    match digits.len() {
        0 => Some(0),
        1 => Some(digits[0]),
        _ => None,
    }
}

/// Modular exponentiation `base ^ expo mod modulus` via square-and-multiply,
/// reducing after every multiplication so intermediate values never grow
/// past `max(scale, base.scale())` digits.
pub(crate) fn raise_mod(base: &Number, expo: &Number, modulus: &Number, scale: u32) -> Result<Number, Error> {
    if modulus.is_zero() {
        return Err(Error::DivByZero);
    }
    if expo.is_neg() {
        return Err(Error::NegativeExponent);
    }
    if base.scale() != 0 {
        log::warn!("raise_mod: base has non-zero scale {}; truncating to its integer part", base.scale());
    }
    if expo.scale() != 0 {
        log::warn!("raise_mod: exponent has non-zero scale {}; truncating to its integer part", expo.scale());
    }
    if modulus.scale() != 0 {
        log::warn!("raise_mod: modulus has non-zero scale {}; truncating to its integer part", modulus.scale());
    }

    let work_scale = scale.max(base.scale());
    let base_int = Number::from_bigint(shift_scale(base.bigint(), base.scale(), 0), 0);
    let modulus_int = Number::from_bigint(shift_scale(modulus.bigint(), modulus.scale(), 0), 0);
    let mut e = Number::from_bigint(shift_scale(expo.bigint(), expo.scale(), 0), 0);

    let mut result = Number::one().modulo(&modulus_int, work_scale)?;
    let mut cur = base_int.modulo(&modulus_int, work_scale)?;

    while !e.is_zero() {
        let (q, r) = crate::ops::div::divmod(&e, &Number::two(), 0)?;
        if !r.is_zero() {
            result = result.multiply(&cur, work_scale).modulo(&modulus_int, work_scale)?;
        }
        cur = cur.multiply(&cur, work_scale).modulo(&modulus_int, work_scale)?;
        e = q;
    }

    Ok(result)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn raise_computes_positive_integer_power() {
        let base = Number::parse("2", 0);
        let expo = Number::parse("10", 0);
        let r = raise(&base, &expo, 0).unwrap();
        assert_eq!(r.to_string(), "1024");
    }

    #[test]
    fn raise_computes_negative_integer_power() {
        let base = Number::parse("2", 0);
        let expo = Number::parse("-3", 0);
        let r = raise(&base, &expo, 5).unwrap();
        assert_eq!(r.to_string(), "0.12500");
    }

    #[test]
    fn raise_to_zero_is_one() {
        let base = Number::parse("123.456", 3);
        let expo = Number::zero();
        assert_eq!(raise(&base, &expo, 0).unwrap(), Number::one());
    }

    #[test]
    fn raise_preserves_operand_scale_fidelity() {
        let base = Number::parse("1.23", 2);
        let expo = Number::parse("2", 0);
        let r = raise(&base, &expo, 10).unwrap();
        assert_eq!(r.to_string(), "1.5129");
    }

    #[test]
    fn raise_mod_matches_plain_mod_of_raise() {
        let base = Number::parse("4", 0);
        let expo = Number::parse("13", 0);
        let modulus = Number::parse("497", 0);
        let via_mod = raise_mod(&base, &expo, &modulus, 0).unwrap();

        let full = raise(&base, &expo, 0).unwrap();
        let via_raise = full.modulo(&modulus, 0).unwrap();
        assert_eq!(via_mod, via_raise);
    }

    #[test]
    fn raise_mod_rejects_zero_modulus() {
        let base = Number::parse("2", 0);
        let expo = Number::parse("2", 0);
        assert_eq!(raise_mod(&base, &expo, &Number::zero(), 0), Err(Error::DivByZero));
    }

    #[test]
    fn raise_mod_rejects_negative_exponent() {
        let base = Number::parse("2", 0);
        let expo = Number::parse("-2", 0);
        let modulus = Number::parse("5", 0);
        assert_eq!(raise_mod(&base, &expo, &modulus, 0), Err(Error::NegativeExponent));
    }

    #[test]
    fn raise_negative_one_to_large_even_exponent_is_one() {
        let base = Number::parse("-1", 0);
        // Larger than any machine word; exercises the unit-magnitude fast path.
        let expo = Number::parse("100000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000", 0);
        assert_eq!(raise(&base, &expo, 0).unwrap(), Number::one());
    }
}
