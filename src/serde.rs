use core::fmt;

use alloc::string::ToString;

use crate::Number;

/// Serializes as the base-10 string produced by [`core::fmt::Display`], so a
/// round trip through JSON (or any other self-describing format) preserves
/// the exact scale: `"123.400"`, not `123.4`.
impl serde::Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Number {
    fn deserialize<D>(deserializer: D) -> Result<Number, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_str(NumberVisitor)
    }
}

struct NumberVisitor;

impl<'de> serde::de::Visitor<'de> for NumberVisitor {
    type Value = Number;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a decimal number string, e.g. \"-12.340\"")
    }

    fn visit_str<E>(self, value: &str) -> Result<Number, E>
    where
        E: serde::de::Error,
    {
        Ok(Number::parse(value, fractional_digits(value)))
    }

    fn visit_string<E>(self, value: alloc::string::String) -> Result<Number, E>
    where
        E: serde::de::Error,
    {
        self.visit_str(&value)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Number, E>
    where
        E: serde::de::Error,
    {
        Ok(Number::from(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Number, E>
    where
        E: serde::de::Error,
    {
        Ok(Number::from(value))
    }
}

/// `Number::parse` caps the fractional part at a scale the caller already
/// knows; a deserialized string has no such context, so its own digit count
/// after the decimal point becomes the scale to parse at.
fn fractional_digits(text: &str) -> u32 {
    match text.find('.') {
        Some(dot) => text[dot + 1..].chars().take_while(|c| c.is_ascii_digit()).count() as u32,
        None => 0,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn serializes_as_display_string() {
        let n = Number::parse("123.400", 3);
        assert_eq!(serde_json::to_string(&n).unwrap(), "\"123.400\"");
    }

    #[test]
    fn deserializes_preserving_scale() {
        let n: Number = serde_json::from_str("\"123.400\"").unwrap();
        assert_eq!(n.scale(), 3);
        assert_eq!(n.to_string(), "123.400");
    }

    #[test]
    fn round_trips_negative_values() {
        let n = Number::parse("-7.5", 1);
        let text = serde_json::to_string(&n).unwrap();
        let back: Number = serde_json::from_str(&text).unwrap();
        assert_eq!(back, n);
    }

    #[test]
    fn deserializes_integral_strings_at_scale_zero() {
        let n: Number = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(n.scale(), 0);
        assert_eq!(n.to_string(), "42");
    }
}
