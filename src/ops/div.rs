use num_integer::Integer;

use crate::error::Error;
use crate::number::Number;
use crate::ops::common::shift_scale;

/// Truncating division `n1 / n2` to exactly `scale` fractional digits.
///
/// The dividend is first stepped so that its fixed point lines up with the
/// requested quotient scale: `step = n2.scale() + scale - n1.scale()`
/// digits are multiplied in (or truncated away, if `step` is negative)
/// before the big-integer division, which itself truncates toward zero.
pub(crate) fn divide(n1: &Number, n2: &Number, scale: u32) -> Result<Number, Error> {
    if n2.is_zero() {
        return Err(Error::DivByZero);
    }

    let step = n2.scale() as i64 + scale as i64 - n1.scale() as i64;
    let dividend = if step >= 0 {
        shift_scale(n1.bigint(), 0, step as u32)
    } else {
        shift_scale(n1.bigint(), (-step) as u32, 0)
    };

    let (quotient, _) = Integer::div_rem(&dividend, n2.bigint());
    Ok(Number::from_bigint(quotient, scale))
}

/// Simultaneous quotient and remainder at `rscale = max(n1.scale(), n2.scale() + scale)`,
/// satisfying `n1 == quotient * n2 + remainder` exactly at that scale.
pub(crate) fn divmod(n1: &Number, n2: &Number, scale: u32) -> Result<(Number, Number), Error> {
    if n2.is_zero() {
        return Err(Error::DivByZero);
    }

    let rscale = n1.scale().max(n2.scale().saturating_add(scale));
    let quotient = divide(n1, n2, scale)?;
    let product = quotient.multiply(n2, rscale);
    let remainder = n1.sub_scaled(&product, rscale);
    Ok((quotient, remainder))
}

/// `n1 % n2`: the remainder half of [`divmod`], quotient discarded.
pub(crate) fn modulo(n1: &Number, n2: &Number, scale: u32) -> Result<Number, Error> {
    let (_, remainder) = divmod(n1, n2, scale)?;
    Ok(remainder)
}
