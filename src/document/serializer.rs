//! Stable, indented JSON output.
//!
//! Every container element goes on its own line, indented by `indent_size`
//! spaces per level. Keys appear in the object's insertion order. Non-ASCII
//! text is written as-is; only quotes, backslashes and control characters
//! are escaped.
//!
//! # Example
//!
//! ```
//! use fieldquill::document::parser::parse_json;
//! use fieldquill::document::serializer::serialize_value;
//!
//! let doc = parse_json(r#"{"a": [1, 2.5], "b": {}}"#).unwrap();
//! assert_eq!(
//!     serialize_value(&doc, 4),
//!     "{\n    \"a\": [\n        1,\n        2.5\n    ],\n    \"b\": {}\n}"
//! );
//! ```

use super::node::{JsonNumber, JsonValue};

/// Serializes a value with the given indentation width.
pub fn serialize_value(value: &JsonValue, indent_size: usize) -> String {
    let mut out = String::new();
    write_value(&mut out, value, indent_size, 0);
    out
}

/// Serializes a value on a single line with no insignificant whitespace.
///
/// # Example
///
/// ```
/// use fieldquill::document::parser::parse_json;
/// use fieldquill::document::serializer::serialize_compact;
///
/// let doc = parse_json(r#"{ "a" : [ 1 , true , null ] }"#).unwrap();
/// assert_eq!(serialize_compact(&doc), r#"{"a":[1,true,null]}"#);
/// ```
pub fn serialize_compact(value: &JsonValue) -> String {
    match value {
        JsonValue::Object(entries) => {
            let parts: Vec<String> = entries
                .iter()
                .map(|(key, child)| {
                    format!("\"{}\":{}", escape_json_string(key), serialize_compact(child))
                })
                .collect();
            format!("{{{}}}", parts.join(","))
        }
        JsonValue::Array(elements) => {
            let parts: Vec<String> = elements.iter().map(serialize_compact).collect();
            format!("[{}]", parts.join(","))
        }
        scalar => serialize_scalar(scalar),
    }
}

fn write_value(out: &mut String, value: &JsonValue, indent_size: usize, depth: usize) {
    let indent = " ".repeat(indent_size * depth);
    let next_indent = " ".repeat(indent_size * (depth + 1));

    match value {
        JsonValue::Object(entries) => {
            if entries.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push_str("{\n");
            for (i, (key, child)) in entries.iter().enumerate() {
                out.push_str(&next_indent);
                out.push('"');
                out.push_str(&escape_json_string(key));
                out.push_str("\": ");
                write_value(out, child, indent_size, depth + 1);
                if i < entries.len() - 1 {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(&indent);
            out.push('}');
        }
        JsonValue::Array(elements) => {
            if elements.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push_str("[\n");
            for (i, element) in elements.iter().enumerate() {
                out.push_str(&next_indent);
                write_value(out, element, indent_size, depth + 1);
                if i < elements.len() - 1 {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(&indent);
            out.push(']');
        }
        scalar => out.push_str(&serialize_scalar(scalar)),
    }
}

fn serialize_scalar(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => format!("\"{}\"", escape_json_string(s)),
        JsonValue::Number(n) => serialize_number(n),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Null => "null".to_string(),
        JsonValue::Object(_) | JsonValue::Array(_) => serialize_compact(value),
    }
}

/// Floats keep a fractional part or exponent so they re-parse as floats.
/// Non-finite floats have no JSON form and are written as `null`.
fn serialize_number(n: &JsonNumber) -> String {
    match n {
        JsonNumber::Integer(i) => i.to_string(),
        JsonNumber::Unsigned(u) => u.to_string(),
        JsonNumber::Float(f) if f.is_finite() => format!("{:?}", f),
        JsonNumber::Float(_) => "null".to_string(),
    }
}

/// Escapes special characters in a string for JSON serialization.
fn escape_json_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '\x08' => result.push_str("\\b"),
            '\x0C' => result.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }

    result
}
