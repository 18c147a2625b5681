//! Tolerant number decoding for backend payloads.
//!
//! The backend serialises most numeric columns as strings (`"stock": "12"`),
//! while freshly created rows may come back as real JSON numbers. Both shapes
//! are accepted here; `null` and `""` decode as zero.
//!
//! Usage:
//! ```rust
//! #[derive(serde::Deserialize)]
//! struct Row {
//!     #[serde(deserialize_with = "contracts::shared::lenient::f64_from_any")]
//!     price: f64,
//! }
//! ```

use serde::de::{self, Deserializer, Unexpected, Visitor};
use std::fmt;

struct F64Visitor;

impl<'de> Visitor<'de> for F64Visitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        parse_decimal(v).ok_or_else(|| E::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_none<E: de::Error>(self) -> Result<f64, E> {
        Ok(0.0)
    }
}

struct I64Visitor;

impl<'de> Visitor<'de> for I64Visitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer or an integer string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
        if v.fract() == 0.0 && v.is_finite() {
            Ok(v as i64)
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        parse_integer(v).ok_or_else(|| E::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_unit<E: de::Error>(self) -> Result<i64, E> {
        Ok(0)
    }

    fn visit_none<E: de::Error>(self) -> Result<i64, E> {
        Ok(0)
    }
}

struct StringVisitor;

impl<'de> Visitor<'de> for StringVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string or a number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        if v.fract() == 0.0 && v.is_finite() {
            Ok(format!("{}", v as i64))
        } else {
            Ok(v.to_string())
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }
}

/// Decode an identifier that may arrive as a string or a bare number.
pub fn string_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(StringVisitor)
}

/// Decode an `f64` from a JSON number or numeric string.
pub fn f64_from_any<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(F64Visitor)
}

/// Decode an `i64` from a JSON number or integer string.
pub fn i64_from_any<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(I64Visitor)
}

/// Parse a user- or backend-supplied decimal. Accepts a comma separator.
/// Empty input is zero.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Parse an integer, tolerating a `.0` suffix (`"12.0"` → 12). Empty input is zero.
pub fn parse_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    if let Ok(v) = trimmed.parse::<i64>() {
        return Some(v);
    }
    match parse_decimal(trimmed) {
        Some(v) if v.fract() == 0.0 => Some(v as i64),
        _ => None,
    }
}

/// Serialise any `Display` value as a JSON string.
///
/// The product and role endpoints bind their bodies to `dict[str, str]`,
/// so numbers have to travel as strings.
pub mod as_string {
    use serde::Serializer;
    use std::fmt::Display;

    pub fn serialize<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Display,
    {
        serializer.collect_str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "f64_from_any")]
        price: f64,
        #[serde(deserialize_with = "i64_from_any")]
        stock: i64,
    }

    #[derive(Deserialize)]
    struct Keyed {
        #[serde(deserialize_with = "string_from_any")]
        id: String,
    }

    #[derive(Serialize)]
    struct Body {
        #[serde(with = "as_string")]
        stock: i64,
    }

    #[test]
    fn decodes_strings_and_numbers() {
        let row: Row = serde_json::from_str(r#"{"price": "12.50", "stock": "7"}"#).unwrap();
        assert_eq!(row.price, 12.5);
        assert_eq!(row.stock, 7);

        let row: Row = serde_json::from_str(r#"{"price": 3, "stock": 4.0}"#).unwrap();
        assert_eq!(row.price, 3.0);
        assert_eq!(row.stock, 4);
    }

    #[test]
    fn empty_and_null_decode_as_zero() {
        let row: Row = serde_json::from_str(r#"{"price": "", "stock": null}"#).unwrap();
        assert_eq!(row.price, 0.0);
        assert_eq!(row.stock, 0);
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Row>(r#"{"price": "abc", "stock": 1}"#).is_err());
        assert!(serde_json::from_str::<Row>(r#"{"price": 1, "stock": "1.5"}"#).is_err());
    }

    #[test]
    fn ids_accept_numbers() {
        let k: Keyed = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(k.id, "42");
        let k: Keyed = serde_json::from_str(r#"{"id": "A-7"}"#).unwrap();
        assert_eq!(k.id, "A-7");
        let k: Keyed = serde_json::from_str(r#"{"id": null}"#).unwrap();
        assert_eq!(k.id, "");
    }

    #[test]
    fn parses_comma_decimals() {
        assert_eq!(parse_decimal("4,25"), Some(4.25));
        assert_eq!(parse_integer(" 12 "), Some(12));
        assert_eq!(parse_integer("12.0"), Some(12));
        assert_eq!(parse_integer("1e3"), Some(1000));
        assert_eq!(parse_integer("x"), None);
    }

    #[test]
    fn serialises_numbers_as_strings() {
        let json = serde_json::to_string(&Body { stock: 15 }).unwrap();
        assert_eq!(json, r#"{"stock":"15"}"#);
    }
}
