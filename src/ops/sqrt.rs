use num_bigint::BigInt;
use num_integer::Roots;

use crate::number::Number;
use crate::ops::common::shift_scale;

/// Truncated integer square root at working scale `rscale = max(scale, v.scale())`.
/// Returns `None` for a negative radicand, leaving the caller's slot untouched.
pub(crate) fn sqrt(v: &Number, scale: u32) -> Option<Number> {
    if v.is_neg() {
        return None;
    }

    let rscale = scale.max(v.scale());

    if v.is_zero() {
        return Some(Number::new(rscale));
    }
    if v.compare(&Number::one()).is_eq() {
        let one_at_scale = crate::ops::common::pow10(rscale);
        return Some(Number::from_bigint(one_at_scale, rscale));
    }

    // Scale must move by an even amount so that sqrt(value * 10^step) lands
    // on a radicand whose root is exact at `rscale` fractional digits.
    let step = v.scale() + 2 * (rscale - v.scale());
    let radicand = shift_scale(v.bigint(), v.scale(), step);
    let root = radicand.magnitude().sqrt();
    Some(Number::from_bigint(BigInt::from(root), rscale))
}
