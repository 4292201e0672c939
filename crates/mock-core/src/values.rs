//! Generated value representation.
//!
//! `MockValue` is the type-agnostic value produced by the generation engine.
//! It converts losslessly into `serde_json::Value` (dates become RFC 3339
//! strings) and carries the primitive coercions used when an override
//! produces a value of the wrong kind.

use crate::types::PrimitiveKind;
use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A generated value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MockValue {
    /// Null value
    Null,

    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// Date/time in UTC
    DateTime(DateTime<Utc>),

    /// String value
    String(String),

    /// Ordered sequence of values
    Array(Vec<MockValue>),

    /// Object with keys in insertion order
    Object(IndexMap<String, MockValue>),
}

impl MockValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this value is an integer or a float.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64. Integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a DateTime.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Try to get this value as an array.
    pub fn as_array(&self) -> Option<&Vec<MockValue>> {
        match self {
            Self::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to get this value as an object.
    pub fn as_object(&self) -> Option<&IndexMap<String, MockValue>> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Get a field of an object value.
    pub fn get(&self, key: &str) -> Option<&MockValue> {
        self.as_object()?.get(key)
    }

    /// Truthiness: `null`, `false`, `0`, `NaN` and `""` are false, everything else is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0 && !f.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::DateTime(_) | Self::Array(_) | Self::Object(_) => true,
        }
    }

    /// Coerce into the given primitive kind.
    ///
    /// Numbers parse from strings (blank strings become `0`), booleans become
    /// `0`/`1`, and anything that does not read as a number becomes `0`.
    pub fn coerce(self, kind: PrimitiveKind) -> MockValue {
        match kind {
            PrimitiveKind::String => match self {
                Self::String(_) => self,
                other => Self::String(other.to_string()),
            },
            PrimitiveKind::Number => match self {
                Self::Int(_) => self,
                Self::Float(f) if f.is_finite() => self,
                Self::Float(_) => Self::Int(0),
                Self::Bool(b) => Self::Int(i64::from(b)),
                Self::String(s) => parse_number(&s),
                Self::DateTime(dt) => Self::Int(dt.timestamp_millis()),
                Self::Null | Self::Array(_) | Self::Object(_) => Self::Int(0),
            },
            PrimitiveKind::Boolean => Self::Bool(self.is_truthy()),
        }
    }
}

fn parse_number(s: &str) -> MockValue {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return MockValue::Int(0);
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return MockValue::Int(i);
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => MockValue::Float(f),
        _ => MockValue::Int(0),
    }
}

impl fmt::Display for MockValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::DateTime(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Self::String(s) => f.write_str(s),
            Self::Array(_) | Self::Object(_) => {
                let json = serde_json::Value::from(self.clone());
                write!(f, "{json}")
            }
        }
    }
}

impl From<bool> for MockValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for MockValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for MockValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for MockValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for MockValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for MockValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<DateTime<Utc>> for MockValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<Vec<MockValue>> for MockValue {
    fn from(value: Vec<MockValue>) -> Self {
        Self::Array(value)
    }
}

impl From<serde_json::Value> for MockValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Self::Float(f)
                } else {
                    Self::String(n.to_string())
                }
            }
            Value::String(s) => Self::String(s),
            Value::Array(arr) => Self::Array(arr.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<MockValue> for serde_json::Value {
    fn from(value: MockValue) -> Self {
        use serde_json::Value;

        match value {
            MockValue::Null => Value::Null,
            MockValue::Bool(b) => Value::Bool(b),
            MockValue::Int(i) => Value::from(i),
            // Non-finite floats have no JSON representation
            MockValue::Float(f) => serde_json::Number::from_f64(f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            MockValue::DateTime(dt) => {
                Value::String(dt.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            MockValue::String(s) => Value::String(s),
            MockValue::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            MockValue::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_mock_value_accessors() {
        assert_eq!(MockValue::Bool(true).as_bool(), Some(true));
        assert_eq!(MockValue::Int(42).as_i64(), Some(42));
        assert_eq!(MockValue::Float(3.15).as_f64(), Some(3.15));
        assert_eq!(MockValue::from("test").as_str(), Some("test"));

        // Cross-type conversions
        assert_eq!(MockValue::Int(42).as_f64(), Some(42.0));
        assert_eq!(MockValue::Bool(true).as_i64(), None);
    }

    #[test]
    fn test_coerce_to_string() {
        assert_eq!(
            MockValue::Int(7).coerce(PrimitiveKind::String),
            MockValue::from("7")
        );
        assert_eq!(
            MockValue::Bool(false).coerce(PrimitiveKind::String),
            MockValue::from("false")
        );
        let arr = MockValue::Array(vec![MockValue::Int(1), MockValue::from("a")]);
        assert_eq!(
            arr.coerce(PrimitiveKind::String),
            MockValue::from(r#"[1,"a"]"#)
        );
    }

    #[test]
    fn test_coerce_to_number() {
        assert_eq!(
            MockValue::from(" 42 ").coerce(PrimitiveKind::Number),
            MockValue::Int(42)
        );
        assert_eq!(
            MockValue::from("2.5").coerce(PrimitiveKind::Number),
            MockValue::Float(2.5)
        );
        assert_eq!(
            MockValue::from("lorem").coerce(PrimitiveKind::Number),
            MockValue::Int(0)
        );
        assert_eq!(
            MockValue::Bool(true).coerce(PrimitiveKind::Number),
            MockValue::Int(1)
        );
        assert_eq!(
            MockValue::Float(f64::NAN).coerce(PrimitiveKind::Number),
            MockValue::Int(0)
        );
    }

    #[test]
    fn test_coerce_to_boolean() {
        assert_eq!(
            MockValue::from("").coerce(PrimitiveKind::Boolean),
            MockValue::Bool(false)
        );
        assert_eq!(
            MockValue::from("no").coerce(PrimitiveKind::Boolean),
            MockValue::Bool(true)
        );
        assert_eq!(
            MockValue::Int(0).coerce(PrimitiveKind::Boolean),
            MockValue::Bool(false)
        );
        assert_eq!(
            MockValue::Null.coerce(PrimitiveKind::Boolean),
            MockValue::Bool(false)
        );
    }

    #[test]
    fn test_json_conversion_preserves_order() {
        let mut obj = IndexMap::new();
        obj.insert("zeta".to_string(), MockValue::Int(1));
        obj.insert("alpha".to_string(), MockValue::Float(1.5));
        obj.insert(
            "when".to_string(),
            MockValue::DateTime(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()),
        );

        let json = serde_json::Value::from(MockValue::Object(obj));
        let text = serde_json::to_string(&json).unwrap();
        assert_eq!(
            text,
            r#"{"zeta":1,"alpha":1.5,"when":"2024-01-02T03:04:05.000Z"}"#
        );
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::json!({ "a": [1, 2.5, "x", null, true] });
        let value = MockValue::from(json);
        let arr = value.get("a").and_then(MockValue::as_array).unwrap();
        assert_eq!(arr[0], MockValue::Int(1));
        assert_eq!(arr[1], MockValue::Float(2.5));
        assert_eq!(arr[2], MockValue::from("x"));
        assert!(arr[3].is_null());
        assert_eq!(arr[4], MockValue::Bool(true));
    }
}
