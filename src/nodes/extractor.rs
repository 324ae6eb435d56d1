//! Field extraction into several typed views at once.

use std::fmt;

use crate::config::Config;
use crate::document::{parse_json, serialize_compact, serialize_value, JsonValue};
use crate::fieldpath::{get_by_path, FieldPathError};

/// Why a field could not be extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The input text is not a JSON document.
    Document(FieldPathError),
    /// No object member lies at the dotted name.
    NotFound { field: String },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::Document(err) => write!(f, "{}", err),
            ExtractError::NotFound { field } => write!(f, "Field '{}' not found", field),
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::Document(err) => Some(err),
            ExtractError::NotFound { .. } => None,
        }
    }
}

impl From<FieldPathError> for ExtractError {
    fn from(err: FieldPathError) -> Self {
        ExtractError::Document(err)
    }
}

/// Every view of an extracted field.
///
/// A failed extraction carries an `[ERROR] ...` message in `text` and the
/// zero value in every other view.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldExtraction {
    /// Strings verbatim, everything else as compact JSON
    pub text: String,
    /// Numeric view truncated toward zero, 0 when not numeric
    pub int: i64,
    /// Numeric view, 0.0 when not numeric
    pub float: f64,
    /// Indented JSON of the value
    pub json: String,
    /// Elements when the value is an array
    pub list: Vec<JsonValue>,
    /// Same elements, delivered one per batch item by the host
    pub batch: Vec<JsonValue>,
    failed: bool,
}

impl FieldExtraction {
    fn failed(err: &ExtractError) -> Self {
        Self {
            text: super::error_payload(err),
            int: 0,
            float: 0.0,
            json: "{}".to_string(),
            list: Vec::new(),
            batch: Vec::new(),
            failed: true,
        }
    }

    /// True when this is the report of a failed extraction. A field whose
    /// value merely looks like an error message is not one.
    pub fn is_error(&self) -> bool {
        self.failed
    }
}

/// Looks up `field_name` (dotted, objects only) in `json_text`.
///
/// # Errors
///
/// Returns `ExtractError::Document` for malformed JSON and
/// `ExtractError::NotFound` when the name does not resolve.
pub fn try_extract_field(
    config: &Config,
    json_text: &str,
    field_name: &str,
) -> Result<FieldExtraction, ExtractError> {
    let document = parse_json(json_text)?;

    let Some(value) = get_by_path(&document, field_name) else {
        tracing::debug!(field = field_name, "Field not found");
        return Err(ExtractError::NotFound {
            field: field_name.to_string(),
        });
    };

    let float = numeric_view(value);
    let items = match value {
        JsonValue::Array(items) => items.clone(),
        _ => Vec::new(),
    };

    Ok(FieldExtraction {
        text: text_view(value),
        int: int_view(value, float),
        float,
        json: serialize_value(value, config.extract_indent_size),
        list: items.clone(),
        batch: items,
        failed: false,
    })
}

/// Like [`try_extract_field`], but reports failures in-band.
///
/// # Example
///
/// ```
/// use fieldquill::config::Config;
/// use fieldquill::nodes::extract_field;
///
/// let doc = r#"{"info": {"city": "Gotham", "zip": "10001"}}"#;
/// let zip = extract_field(&Config::default(), doc, "info.zip");
/// assert_eq!(zip.text, "10001");
/// assert_eq!(zip.int, 10001);
///
/// let missing = extract_field(&Config::default(), doc, "info.street");
/// assert!(missing.is_error());
/// assert_eq!(missing.text, "[ERROR] Field 'info.street' not found");
/// ```
pub fn extract_field(config: &Config, json_text: &str, field_name: &str) -> FieldExtraction {
    try_extract_field(config, json_text, field_name)
        .unwrap_or_else(|err| FieldExtraction::failed(&err))
}

fn text_view(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => serialize_compact(other),
    }
}

/// Numbers convert exactly; everything else truncates the float view.
fn int_view(value: &JsonValue, float: f64) -> i64 {
    match value {
        JsonValue::Number(n) => n.as_i64(),
        _ if float.is_finite() => float.trunc() as i64,
        _ => 0,
    }
}

fn numeric_view(value: &JsonValue) -> f64 {
    match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::Bool(true) => 1.0,
        JsonValue::Bool(false) => 0.0,
        JsonValue::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}
