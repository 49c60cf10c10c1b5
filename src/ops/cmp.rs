use core::cmp::Ordering;

use crate::number::Number;
use crate::ops::common::shift_scale;

/// Compare `n1` and `n2` after aligning them to the larger of their two
/// scales, stepping the smaller-scale operand up (never truncating either
/// side, since a compare can always be made exact by stepping up).
pub(crate) fn compare(n1: &Number, n2: &Number, use_sign: bool) -> Ordering {
    let (a, b) = match n1.scale().cmp(&n2.scale()) {
        Ordering::Equal => (n1.bigint().clone(), n2.bigint().clone()),
        Ordering::Greater => (n1.bigint().clone(), shift_scale(n2.bigint(), n2.scale(), n1.scale())),
        Ordering::Less => (shift_scale(n1.bigint(), n1.scale(), n2.scale()), n2.bigint().clone()),
    };

    if use_sign {
        a.cmp(&b)
    } else {
        a.magnitude().cmp(b.magnitude())
    }
}
