//! Text-in, text-out batch field removal.

use super::error_payload;
use crate::config::Config;
use crate::document::{parse_json, serialize_value};
use crate::fieldpath::{FieldPathError, PathMutator};

/// Parses `json_text`, removes every `|`-separated path in `field_spec` and
/// returns the re-serialized document.
///
/// # Errors
///
/// Returns `FieldPathError::Parse` for malformed JSON. Paths that do not
/// resolve are skipped, never reported.
pub fn try_remove_fields_text(
    config: &Config,
    json_text: &str,
    field_spec: &str,
) -> Result<String, FieldPathError> {
    let mut document = parse_json(json_text)?;
    PathMutator::from_config(config).remove_fields(&mut document, field_spec);
    Ok(serialize_value(&document, config.indent_size))
}

/// Like [`try_remove_fields_text`], but reports failures as an `[ERROR] ...` string.
///
/// # Example
///
/// ```
/// use fieldquill::config::Config;
/// use fieldquill::nodes::remove_fields_text;
///
/// let out = remove_fields_text(&Config::default(), r#"{"a":{"b":1,"c":2}}"#, "a.b | a.c");
/// assert_eq!(out, "{\n    \"a\": {}\n}");
/// ```
pub fn remove_fields_text(config: &Config, json_text: &str, field_spec: &str) -> String {
    try_remove_fields_text(config, json_text, field_spec)
        .unwrap_or_else(|err| error_payload(&err))
}
