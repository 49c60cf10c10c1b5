use crate::number::Number;
use crate::ops::common::shift_scale;

/// `n1 * n2`. The exact scale of the product is `n1.scale() + n2.scale()`;
/// it is truncated down to `min(full_scale, max(scale, n1.scale(), n2.scale()))`,
/// which always keeps at least as many fractional digits as either operand.
pub(crate) fn multiply(n1: &Number, n2: &Number, scale: u32) -> Number {
    let full_scale = n1.scale() + n2.scale();
    let prod_scale = full_scale.min(scale.max(n1.scale()).max(n2.scale()));

    let product = n1.bigint() * n2.bigint();
    let product = if full_scale > prod_scale {
        shift_scale(&product, full_scale, prod_scale)
    } else {
        product
    };
    Number::from_bigint(product, prod_scale)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn multiply_keeps_exact_scale_when_allowed() {
        let a = Number::parse("1.23", 2);
        let b = Number::parse("4.5", 1);
        let p = multiply(&a, &b, 10);
        assert_eq!(p.scale(), 3);
        assert_eq!(p, Number::parse("5.535", 3));
    }

    #[test]
    fn multiply_truncates_to_requested_scale() {
        let a = Number::parse("0.1", 1);
        let b = Number::parse("0.1", 1);
        let p = multiply(&a, &b, 3);
        assert_eq!(p.scale(), 2);
        assert_eq!(p, Number::parse("0.01", 2));
    }

    #[test]
    fn multiply_never_drops_below_operand_scale() {
        let a = Number::parse("2", 0);
        let b = Number::parse("3.14159", 5);
        let p = multiply(&a, &b, 0);
        assert_eq!(p.scale(), 5);
        assert_eq!(p, Number::parse("6.28318", 5));
    }
}
