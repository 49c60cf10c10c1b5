use crate::number::Number;
use crate::ops::common::shift_scale;

/// `n1 + n2`, result scale `max(scale_min, n1.scale(), n2.scale())`.
pub(crate) fn add(n1: &Number, n2: &Number, scale_min: u32) -> Number {
    let sum_scale = n1.scale().max(n2.scale());
    let a = shift_scale(n1.bigint(), n1.scale(), sum_scale);
    let b = shift_scale(n2.bigint(), n2.scale(), sum_scale);
    let mut sum = a + b;

    let result_scale = sum_scale.max(scale_min);
    if sum_scale < scale_min {
        sum = shift_scale(&sum, sum_scale, result_scale);
    }
    Number::from_bigint(sum, result_scale)
}

/// `n1 - n2`, result scale `max(scale_min, n1.scale(), n2.scale())`.
pub(crate) fn sub(n1: &Number, n2: &Number, scale_min: u32) -> Number {
    let diff_scale = n1.scale().max(n2.scale());
    let a = shift_scale(n1.bigint(), n1.scale(), diff_scale);
    let b = shift_scale(n2.bigint(), n2.scale(), diff_scale);
    let mut diff = a - b;

    let result_scale = diff_scale.max(scale_min);
    if diff_scale < scale_min {
        diff = shift_scale(&diff, diff_scale, result_scale);
    }
    Number::from_bigint(diff, result_scale)
}
