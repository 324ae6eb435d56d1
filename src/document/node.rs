//! JSON value representation.
//!
//! This module provides the in-memory tree used by every field operation in
//! fieldquill. A parsed document is a single `JsonValue`; objects keep their
//! keys in insertion order so that a document re-serialized after an edit
//! lists its keys exactly as they were read, with new keys appended.
//!
//! # Example
//!
//! ```
//! use fieldquill::document::node::{JsonNumber, JsonValue};
//! use indexmap::IndexMap;
//!
//! let mut fields = IndexMap::new();
//! fields.insert("name".to_string(), JsonValue::String("fieldquill".to_string()));
//! fields.insert("version".to_string(), JsonValue::Number(JsonNumber::Integer(1)));
//! let mut doc = JsonValue::Object(fields);
//!
//! if let JsonValue::Object(ref mut fields) = doc {
//!     fields.insert("stable".to_string(), JsonValue::Bool(false));
//! }
//! assert_eq!(doc.get_key("stable"), Some(&JsonValue::Bool(false)));
//! ```

use indexmap::IndexMap;

/// Represents JSON numbers.
///
/// Integers that fit in `i64` are `Integer`; larger non-negative integers
/// are `Unsigned` so they survive a round trip unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JsonNumber {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

impl std::fmt::Display for JsonNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonNumber::Integer(i) => write!(f, "{}", i),
            JsonNumber::Unsigned(u) => write!(f, "{}", u),
            JsonNumber::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl JsonNumber {
    pub fn as_f64(&self) -> f64 {
        match self {
            JsonNumber::Integer(i) => *i as f64,
            JsonNumber::Unsigned(u) => *u as f64,
            JsonNumber::Float(f) => *f,
        }
    }

    /// Converts to `i64`, truncating floats toward zero and saturating at the
    /// `i64` bounds.
    pub fn as_i64(&self) -> i64 {
        match self {
            JsonNumber::Integer(i) => *i,
            JsonNumber::Unsigned(u) => i64::try_from(*u).unwrap_or(i64::MAX),
            JsonNumber::Float(f) => f.trunc() as i64,
        }
    }
}

/// A JSON value.
///
/// This enum is the closed set of JSON types. Containers own their children
/// directly; a document is never shared between two operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum JsonValue {
    /// A JSON null
    #[default]
    Null,
    /// A JSON boolean
    Bool(bool),
    /// A JSON number (integer or float)
    Number(JsonNumber),
    /// A JSON string
    String(String),
    /// A JSON array containing ordered values
    Array(Vec<JsonValue>),
    /// A JSON object, keys in insertion order
    Object(IndexMap<String, JsonValue>),
}

impl JsonValue {
    /// Creates an empty object, the value used for auto-created structure.
    pub fn empty_object() -> Self {
        JsonValue::Object(IndexMap::new())
    }

    /// Returns true if this value is an object.
    ///
    /// # Example
    ///
    /// ```
    /// use fieldquill::document::node::{JsonNumber, JsonValue};
    ///
    /// assert!(JsonValue::empty_object().is_object());
    /// assert!(!JsonValue::Number(JsonNumber::Integer(42)).is_object());
    /// ```
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Returns true if this value is a container (object or array).
    ///
    /// # Example
    ///
    /// ```
    /// use fieldquill::document::node::JsonValue;
    ///
    /// assert!(JsonValue::Array(vec![]).is_container());
    /// assert!(JsonValue::empty_object().is_container());
    /// assert!(!JsonValue::Null.is_container());
    /// ```
    pub fn is_container(&self) -> bool {
        matches!(self, JsonValue::Object(_) | JsonValue::Array(_))
    }

    /// Short lowercase name of the value's type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Number(_) => "number",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }

    /// Looks up a key if this value is an object.
    pub fn get_key(&self, key: &str) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(fields) => fields.get(key),
            _ => None,
        }
    }

    /// Looks up an element if this value is an array.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        match self {
            JsonValue::Array(items) => items.get(index),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::Bool(b)
    }
}

impl From<i64> for JsonValue {
    fn from(i: i64) -> Self {
        JsonValue::Number(JsonNumber::Integer(i))
    }
}

impl From<f64> for JsonValue {
    fn from(f: f64) -> Self {
        JsonValue::Number(JsonNumber::Float(f))
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::String(s.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::String(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_number_display() {
        assert_eq!(format!("{}", JsonNumber::Integer(42)), "42");
        assert_eq!(format!("{}", JsonNumber::Float(42.5)), "42.5");
        assert_eq!(format!("{}", JsonNumber::Unsigned(u64::MAX)), "18446744073709551615");
    }

    #[test]
    fn test_json_number_as_i64_truncates() {
        assert_eq!(JsonNumber::Float(9.9).as_i64(), 9);
        assert_eq!(JsonNumber::Float(-9.9).as_i64(), -9);
        assert_eq!(JsonNumber::Unsigned(u64::MAX).as_i64(), i64::MAX);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(JsonValue::Null.type_name(), "null");
        assert_eq!(JsonValue::from(true).type_name(), "boolean");
        assert_eq!(JsonValue::from(1i64).type_name(), "number");
        assert_eq!(JsonValue::from("x").type_name(), "string");
        assert_eq!(JsonValue::Array(vec![]).type_name(), "array");
        assert_eq!(JsonValue::empty_object().type_name(), "object");
    }

    #[test]
    fn test_get_key_and_index() {
        let mut fields = IndexMap::new();
        fields.insert(
            "items".to_string(),
            JsonValue::Array(vec![JsonValue::from("a"), JsonValue::from("b")]),
        );
        let doc = JsonValue::Object(fields);

        let items = doc.get_key("items").unwrap();
        assert_eq!(items.get_index(1), Some(&JsonValue::from("b")));
        assert_eq!(items.get_index(2), None);
        assert_eq!(doc.get_key("missing"), None);
        assert_eq!(items.get_key("items"), None);
    }
}
