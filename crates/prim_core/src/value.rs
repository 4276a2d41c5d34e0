//! Scalar style values carried by tokens and fragments

use std::borrow::Cow;
use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::color::Color;
use crate::error::StyleError;

/// A single style value.
///
/// Token tables hold these, and every live fragment pairs one with a
/// [`StyleAttribute`](crate::StyleAttribute).
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    /// Plain number in logical pixels (or unitless for flex/z-index/opacity)
    Number(f32),
    /// Percentage of the parent, `50.0` means `50%`
    Percent(f32),
    /// Color value
    Color(Color),
    /// Enumerated keyword such as `row`, `flex-start` or `600`
    Keyword(Cow<'static, str>),
}

impl StyleValue {
    /// Static keyword value
    pub const fn keyword(value: &'static str) -> Self {
        StyleValue::Keyword(Cow::Borrowed(value))
    }

    /// Parse a config string.
    ///
    /// `"50%"` is a percentage and `#...`/`transparent` a color. Anything
    /// else, bare numbers included, stays a keyword: font weights such as
    /// `"600"` are strings on the wire. Numbers come from TOML numbers.
    pub fn parse(input: &str) -> Result<Self, StyleError> {
        let trimmed = input.trim();

        if let Some(percent) = trimmed.strip_suffix('%') {
            if let Ok(value) = percent.trim().parse::<f32>() {
                return Ok(StyleValue::Percent(value));
            }
        }

        if trimmed.starts_with('#') || trimmed.eq_ignore_ascii_case("transparent") {
            return Color::parse_hex(trimmed).map(StyleValue::Color);
        }

        Ok(StyleValue::Keyword(Cow::Owned(trimmed.to_string())))
    }

    pub fn as_number(&self) -> Option<f32> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            StyleValue::Color(c) => Some(*c),
            _ => None,
        }
    }

    pub fn is_color(&self) -> bool {
        matches!(self, StyleValue::Color(_))
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::Percent(p) => write!(f, "{}%", p),
            StyleValue::Color(c) => write!(f, "{}", c),
            StyleValue::Keyword(k) => f.write_str(k),
        }
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        StyleValue::Number(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value as f32)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(value as f32)
    }
}

impl From<Color> for StyleValue {
    fn from(value: Color) -> Self {
        StyleValue::Color(value)
    }
}

impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleValue::Number(n) => serializer.serialize_f32(*n),
            other => serializer.collect_str(other),
        }
    }
}

impl<'de> Deserialize<'de> for StyleValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StyleValueVisitor;

        impl Visitor<'_> for StyleValueVisitor {
            type Value = StyleValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or a style value string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<StyleValue, E> {
                Ok(StyleValue::Number(v as f32))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<StyleValue, E> {
                Ok(StyleValue::Number(v as f32))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<StyleValue, E> {
                Ok(StyleValue::Number(v as f32))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<StyleValue, E> {
                StyleValue::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(StyleValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!(StyleValue::parse("50%").unwrap(), StyleValue::Percent(50.0));
        assert_eq!(
            StyleValue::parse("#fff").unwrap(),
            StyleValue::Color(Color::WHITE)
        );
        assert_eq!(StyleValue::parse("600").unwrap(), StyleValue::keyword("600"));
        assert_eq!(
            StyleValue::parse("flex-start").unwrap(),
            StyleValue::keyword("flex-start")
        );
        assert!(StyleValue::parse("#nothex").is_err());
    }

    #[test]
    fn test_serialize() {
        assert_eq!(
            serde_json::to_value(StyleValue::Number(44.0)).unwrap(),
            serde_json::json!(44.0)
        );
        assert_eq!(
            serde_json::to_value(StyleValue::Percent(100.0)).unwrap(),
            serde_json::json!("100%")
        );
        assert_eq!(
            serde_json::to_value(StyleValue::Color(Color::BLACK)).unwrap(),
            serde_json::json!("#000000")
        );
    }

    #[test]
    fn test_deserialize_number_and_string() {
        let n: StyleValue = serde_json::from_str("22").unwrap();
        assert_eq!(n, StyleValue::Number(22.0));
        let c: StyleValue = serde_json::from_str("\"#ddd\"").unwrap();
        assert_eq!(c, StyleValue::Color(Color::from_hex(0xDDDDDD)));
    }
}
