use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::XValue;

/// Opaque field value read from one record.
///
/// The engine never owns record data; it only inspects these values while
/// projecting points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RawValue {
    #[default]
    Null,
    Boolean(bool),
    Number(f64),
    Text(String),
    Date(DateTime<Utc>),
}

impl RawValue {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<DateTime<Utc>> for RawValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl<T> From<Option<T>> for RawValue
where
    T: Into<RawValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Parses a value as a Y coordinate.
///
/// Numbers pass through, strings are parsed by their leading numeric prefix,
/// everything else yields `None`.
#[must_use]
pub fn parse_as_number(value: &RawValue) -> Option<f64> {
    match value {
        RawValue::Number(number) => Some(*number),
        RawValue::Text(text) => parse_leading_float(text),
        _ => None,
    }
}

/// Parses a value as an X coordinate.
///
/// Strings that do not start with a number are kept verbatim as categorical
/// X values.
#[must_use]
pub fn parse_as_x(value: &RawValue) -> Option<XValue> {
    match value {
        RawValue::Number(number) => Some(XValue::Number(*number)),
        RawValue::Text(text) => Some(
            parse_leading_float(text).map_or_else(|| XValue::Text(text.clone()), XValue::Number),
        ),
        RawValue::Date(date) => Some(XValue::Date(*date)),
        RawValue::Boolean(_) | RawValue::Null => None,
    }
}

/// Parses the longest numeric prefix of `text`, after leading whitespace.
///
/// Accepts an optional sign, decimal digits with an optional fraction, an
/// optional exponent and the literal `Infinity`. Trailing garbage is ignored,
/// so `"12.5kg"` parses as `12.5`.
#[must_use]
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if trimmed[end..].starts_with("Infinity") {
        let sign = if bytes.first() == Some(&b'-') { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let integer_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - integer_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        mantissa_digits += fraction_end - fraction_start;
        if mantissa_digits > 0 {
            end = fraction_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exponent_end = end + 1;
        if exponent_end < bytes.len() && matches!(bytes[exponent_end], b'+' | b'-') {
            exponent_end += 1;
        }
        let exponent_digits_start = exponent_end;
        while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits_start {
            end = exponent_end;
        }
    }

    trimmed[..end].parse::<f64>().ok()
}
