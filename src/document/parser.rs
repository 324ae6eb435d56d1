//! JSON parsing into `JsonValue` trees.
//!
//! Parsing is delegated to `serde_json` (built with `preserve_order`, so
//! object keys come back in source order) and the result is converted into
//! the crate's own tagged value type.
//!
//! # Example
//!
//! ```
//! use fieldquill::document::parser::parse_json;
//!
//! let doc = parse_json(r#"{"name": "Alice", "age": 30}"#).unwrap();
//! assert!(doc.is_object());
//!
//! assert!(parse_json(r#"{"unclosed": "#).is_err());
//! ```

use super::node::{JsonNumber, JsonValue};
use crate::fieldpath::FieldPathError;
use serde_json::Value as SerdeValue;

/// Parses JSON text into a `JsonValue`.
///
/// # Errors
///
/// Returns `FieldPathError::Parse` when the text is not well-formed JSON.
pub fn parse_json(json_str: &str) -> Result<JsonValue, FieldPathError> {
    let serde_value: SerdeValue = serde_json::from_str(json_str)?;
    Ok(parse_value(&serde_value))
}

/// Converts a `serde_json::Value` into a `JsonValue`.
pub fn parse_value(value: &SerdeValue) -> JsonValue {
    match value {
        SerdeValue::Object(map) => JsonValue::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), parse_value(v)))
                .collect(),
        ),
        SerdeValue::Array(arr) => JsonValue::Array(arr.iter().map(parse_value).collect()),
        SerdeValue::String(s) => JsonValue::String(s.clone()),
        SerdeValue::Number(n) => JsonValue::Number(convert_number(n)),
        SerdeValue::Bool(b) => JsonValue::Bool(*b),
        SerdeValue::Null => JsonValue::Null,
    }
}

fn convert_number(n: &serde_json::Number) -> JsonNumber {
    if let Some(i) = n.as_i64() {
        JsonNumber::Integer(i)
    } else if let Some(u) = n.as_u64() {
        JsonNumber::Unsigned(u)
    } else {
        JsonNumber::Float(n.as_f64().unwrap_or(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalars() {
        assert_eq!(parse_json("null").unwrap(), JsonValue::Null);
        assert_eq!(parse_json("true").unwrap(), JsonValue::Bool(true));
        assert_eq!(
            parse_json("\"hi\"").unwrap(),
            JsonValue::String("hi".to_string())
        );
    }

    #[test]
    fn test_parse_numbers_keep_kind() {
        assert_eq!(
            parse_json("42").unwrap(),
            JsonValue::Number(JsonNumber::Integer(42))
        );
        assert_eq!(
            parse_json("-7").unwrap(),
            JsonValue::Number(JsonNumber::Integer(-7))
        );
        assert_eq!(
            parse_json("3.5").unwrap(),
            JsonValue::Number(JsonNumber::Float(3.5))
        );
        assert_eq!(
            parse_json("18446744073709551615").unwrap(),
            JsonValue::Number(JsonNumber::Unsigned(u64::MAX))
        );
    }

    #[test]
    fn test_parse_preserves_key_order() {
        let doc = parse_json(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        match doc {
            JsonValue::Object(fields) => {
                let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
                assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
            }
            other => panic!("Expected object, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_nested() {
        let doc = parse_json(r#"{"items": [{"name": "A"}, {"name": "B"}]}"#).unwrap();
        let second = doc.get_key("items").and_then(|items| items.get_index(1));
        assert_eq!(
            second.and_then(|item| item.get_key("name")),
            Some(&JsonValue::String("B".to_string()))
        );
    }

    #[test]
    fn test_parse_invalid() {
        let err = parse_json("{\"a\": }").unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().starts_with("Invalid JSON: "));
    }
}
