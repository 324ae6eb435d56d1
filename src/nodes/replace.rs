//! Text-in, text-out field replacement.

use super::error_payload;
use crate::config::Config;
use crate::document::{parse_json, serialize_value};
use crate::fieldpath::{cast_value, FieldPath, FieldPathError, PathMutator};

/// Parses `json_text`, assigns the typed `new_value_text` at `field_path`
/// and returns the re-serialized document.
///
/// An empty `field_path` returns the document re-serialized without changes.
///
/// # Errors
///
/// Returns `FieldPathError::Parse` for malformed JSON and
/// `FieldPathError::Structural` when the path conflicts with the document.
pub fn try_replace_field(
    config: &Config,
    json_text: &str,
    field_path: &str,
    new_value_text: &str,
) -> Result<String, FieldPathError> {
    let mut document = parse_json(json_text)?;

    if !field_path.is_empty() {
        let value = cast_value(new_value_text);
        let path = FieldPath::parse(field_path);
        PathMutator::from_config(config).set_by_path(&mut document, &path, value)?;
    }

    Ok(serialize_value(&document, config.indent_size))
}

/// Like [`try_replace_field`], but reports failures as an `[ERROR] ...` string.
pub fn replace_field_with(
    config: &Config,
    json_text: &str,
    field_path: &str,
    new_value_text: &str,
) -> String {
    try_replace_field(config, json_text, field_path, new_value_text)
        .unwrap_or_else(|err| error_payload(&err))
}

/// Field replacement with the default configuration.
///
/// # Example
///
/// ```
/// use fieldquill::nodes::replace_field;
///
/// let out = replace_field(r#"{"age": 25}"#, "age", "26");
/// assert_eq!(out, "{\n    \"age\": 26\n}");
///
/// let err = replace_field(r#"{"a": 5}"#, "a.0", "1");
/// assert!(err.starts_with("[ERROR]"));
/// ```
pub fn replace_field(json_text: &str, field_path: &str, new_value_text: &str) -> String {
    replace_field_with(&Config::default(), json_text, field_path, new_value_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_reformats_only() {
        let out = replace_field(r#"{"b":1,"a":[true]}"#, "", "ignored");
        assert_eq!(out, "{\n    \"b\": 1,\n    \"a\": [\n        true\n    ]\n}");
    }

    #[test]
    fn test_invalid_json_payload() {
        let out = replace_field("{not json", "a", "1");
        assert!(out.starts_with("[ERROR] Invalid JSON: "));
    }

    #[test]
    fn test_structural_error_payload() {
        let out = replace_field(r#"{"a": 5}"#, "a.0", "x");
        assert!(out.starts_with("[ERROR] "));
        assert!(out.contains("non-array"));
    }

    #[test]
    fn test_indent_follows_config() {
        let config = Config {
            indent_size: 2,
            ..Config::default()
        };
        let out = replace_field_with(&config, "{}", "k", "v");
        assert_eq!(out, "{\n  \"k\": \"v\"\n}");
    }

    #[test]
    fn test_try_variant_distinguishes_error_from_string_value() {
        let config = Config::default();
        let ok = try_replace_field(&config, "{}", "msg", "[ERROR] not really").unwrap();
        assert!(ok.contains("\"msg\": \"[ERROR] not really\""));

        let err = try_replace_field(&config, "[", "msg", "x").unwrap_err();
        assert!(err.is_parse());
    }
}
