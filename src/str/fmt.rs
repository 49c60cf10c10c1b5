use core::fmt;

use num_traits::Signed;

use crate::number::Number;

/// Format `n` in base 10: `-?\d+(\.\d{scale})?`. At least one integer digit
/// is always written; the fractional part, when `scale > 0`, is exactly
/// `scale` digits, zero-padded on the left if the magnitude has fewer.
pub(crate) fn format(n: &Number, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let scale = n.scale() as usize;
    let digits = n.bigint().abs().to_str_radix(10);

    if n.is_neg() {
        f.write_str("-")?;
    }

    if scale == 0 {
        return f.write_str(&digits);
    }

    if digits.len() > scale {
        let split = digits.len() - scale;
        f.write_str(&digits[..split])?;
        f.write_str(".")?;
        f.write_str(&digits[split..])
    } else {
        f.write_str("0.")?;
        for _ in 0..(scale - digits.len()) {
            f.write_str("0")?;
        }
        f.write_str(&digits)
    }
}

#[cfg(test)]
mod test {
    use crate::number::Number;

    #[test]
    fn formats_with_exact_scale() {
        assert_eq!(Number::parse("3.14", 5).to_string(), "3.14");
    }

    #[test]
    fn zero_pads_fraction_shorter_than_scale() {
        let n = crate::number::Number::from_bigint(num_bigint::BigInt::from(5), 4);
        assert_eq!(n.to_string(), "0.0005");
    }

    #[test]
    fn negative_values_carry_leading_minus() {
        assert_eq!(Number::parse("-2.5", 2).to_string(), "-2.50");
    }

    #[test]
    fn zero_formats_without_sign() {
        assert_eq!(Number::new(3).to_string(), "0.000");
    }
}
