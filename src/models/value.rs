//! Typed field values
//!
//! Source files carry everything as text; values that are entirely numeric
//! are coerced to numbers so sorting and serialization agree.

use std::fmt;

use serde::{Serialize, Serializer};

/// Total numeric-string test: `Some` only when the whole trimmed value
/// parses as a finite number. No prefix parsing — `"10x"` is text.
///
/// This is the single coercion point shared by load-time storage and
/// sort-time comparison.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// A single field value: source text, or a number when the entire source
/// string parsed as one.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Coerce a source string: `Number` when `parse_numeric` accepts the
    /// whole value, `Text` otherwise.
    pub fn coerce(raw: &str) -> Self {
        match parse_numeric(raw) {
            Some(n) => FieldValue::Number(n),
            None => FieldValue::Text(raw.to_string()),
        }
    }

    /// Build a text value without coercion
    pub fn text(raw: impl Into<String>) -> Self {
        FieldValue::Text(raw.into())
    }

    /// Numeric view used by sort comparison: numbers as-is, text through
    /// `parse_numeric`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => parse_numeric(s),
        }
    }

    /// Check whether this value is stored as a number
    pub fn is_number(&self) -> bool {
        matches!(self, FieldValue::Number(_))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Number(n) => {
                // Integral values serialize as JSON integers, not `N.0`.
                if n.fract() == 0.0 && *n >= i64::MIN as f64 && *n <= i64::MAX as f64 {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_accepts_whole_numbers_only() {
        assert_eq!(parse_numeric("10"), Some(10.0));
        assert_eq!(parse_numeric("-3.5"), Some(-3.5));
        assert_eq!(parse_numeric("1e3"), Some(1000.0));
        assert_eq!(parse_numeric(" 42 "), Some(42.0));

        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("   "), None);
        assert_eq!(parse_numeric("10x"), None);
        assert_eq!(parse_numeric("x10"), None);
        assert_eq!(parse_numeric("1,5"), None);
    }

    #[test]
    fn test_parse_numeric_rejects_non_finite() {
        assert_eq!(parse_numeric("NaN"), None);
        assert_eq!(parse_numeric("inf"), None);
        assert_eq!(parse_numeric("-Infinity"), None);
    }

    #[test]
    fn test_coerce() {
        assert_eq!(FieldValue::coerce("10"), FieldValue::Number(10.0));
        assert_eq!(
            FieldValue::coerce("widget"),
            FieldValue::Text("widget".to_string())
        );
    }

    #[test]
    fn test_as_number_reads_numeric_text() {
        assert_eq!(FieldValue::text("12.5").as_number(), Some(12.5));
        assert_eq!(FieldValue::Number(7.0).as_number(), Some(7.0));
        assert_eq!(FieldValue::text("widget").as_number(), None);
    }

    #[test]
    fn test_serialize_integral_without_decimal_point() {
        assert_eq!(
            serde_json::to_string(&FieldValue::Number(10.0)).unwrap(),
            "10"
        );
        assert_eq!(
            serde_json::to_string(&FieldValue::Number(10.5)).unwrap(),
            "10.5"
        );
        assert_eq!(
            serde_json::to_string(&FieldValue::text("abc")).unwrap(),
            "\"abc\""
        );
    }

    #[test]
    fn test_display_matches_serialized_form() {
        assert_eq!(FieldValue::Number(10.0).to_string(), "10");
        assert_eq!(FieldValue::Number(2.25).to_string(), "2.25");
        assert_eq!(FieldValue::text("Widget").to_string(), "Widget");
    }
}
