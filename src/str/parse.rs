use alloc::string::String;

use num_bigint::BigInt;

use crate::number::Number;

/// Parse a base-10 textual number: optional leading `+`/`-`, a run of
/// decimal digits, an optional `.` followed by another run of digits — at
/// least one digit somewhere is required. Leading zeros on the integer part
/// are discarded; the fractional part is truncated to at most `scale`
/// digits and the result's stored scale is `min(fractional_digits, scale)`.
///
/// Malformed input (extraneous characters, no digits at all) silently
/// degrades to a share of [`Number::zero`] rather than failing: the front
/// end is expected to have validated the syntax before ever calling this.
pub(crate) fn parse(text: &str, scale: u32) -> Number {
    let bytes = text.as_bytes();
    let mut i = 0;

    let neg = match bytes.first() {
        Some(b'+') => {
            i += 1;
            false
        }
        Some(b'-') => {
            i += 1;
            true
        }
        _ => false,
    };

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_part = &text[int_start..i];

    let mut frac_part = "";
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        frac_part = &text[frac_start..i];
    }

    if i != bytes.len() || (int_part.is_empty() && frac_part.is_empty()) {
        return Number::zero();
    }

    let stored_scale = (frac_part.len() as u32).min(scale);
    let kept_frac = &frac_part[..stored_scale as usize];

    let mut digits = String::with_capacity(int_part.len() + kept_frac.len());
    digits.push_str(int_part);
    digits.push_str(kept_frac);

    let trimmed = digits.trim_start_matches('0');
    let digits = if trimmed.is_empty() { "0" } else { trimmed };

    let mut magnitude: BigInt = digits
        .parse()
        .expect("digit string contains only ascii digits");
    if neg {
        magnitude = -magnitude;
    }
    Number::from_bigint(magnitude, stored_scale)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_simple_decimal() {
        let n = parse("3.14", 5);
        assert_eq!(n.scale(), 2);
        assert_eq!(n.to_string(), "3.14");
        assert_eq!(n.length(), 3);
    }

    #[test]
    fn truncates_fraction_to_requested_scale() {
        let n = parse("1.23456", 2);
        assert_eq!(n.scale(), 2);
        assert_eq!(n.to_string(), "1.23");
    }

    #[test]
    fn strips_leading_zeros_on_integer_part() {
        let n = parse("007.50", 5);
        assert_eq!(n.scale(), 2);
        assert_eq!(n.to_string(), "7.50");
    }

    #[test]
    fn accepts_leading_sign() {
        assert!(parse("+5", 0).to_string() == "5");
        assert!(parse("-5", 0).is_neg());
    }

    #[test]
    fn accepts_bare_fraction() {
        let n = parse(".5", 1);
        assert_eq!(n.to_string(), "0.5");
    }

    #[test]
    fn malformed_input_degrades_to_zero() {
        assert!(parse("", 2).is_zero());
        assert!(parse("abc", 2).is_zero());
        assert!(parse("1.2.3", 2).is_zero());
        assert!(parse("1e5", 2).is_zero());
    }

    #[test]
    fn all_zero_digits_keep_declared_scale() {
        let n = parse("0.00", 5);
        assert_eq!(n.scale(), 2);
        assert!(n.is_zero());
    }
}
