//! Conversion of literal text into typed JSON values.
//!
//! A replacement value arrives as plain text and is typed by its spelling:
//!
//! | text (trimmed)              | result                  |
//! |-----------------------------|-------------------------|
//! | `true` / `false` (any case) | boolean                 |
//! | `null` (any case)           | null                    |
//! | `-?[0-9]+`                  | integer                 |
//! | a finite float literal      | float                   |
//! | anything else               | the untrimmed text      |
//!
//! A digit run too large for `i64` falls through to the float rule.

use crate::document::node::{JsonNumber, JsonValue};

/// Converts a literal into the JSON value it spells.
///
/// # Example
///
/// ```
/// use fieldquill::document::node::{JsonNumber, JsonValue};
/// use fieldquill::fieldpath::cast_value;
///
/// assert_eq!(cast_value(" TRUE "), JsonValue::Bool(true));
/// assert_eq!(cast_value("42"), JsonValue::Number(JsonNumber::Integer(42)));
/// assert_eq!(cast_value("2.5"), JsonValue::Number(JsonNumber::Float(2.5)));
/// assert_eq!(cast_value(" hello "), JsonValue::String(" hello ".to_string()));
/// ```
pub fn cast_value(raw: &str) -> JsonValue {
    let token = raw.trim();

    if token.eq_ignore_ascii_case("true") {
        return JsonValue::Bool(true);
    }
    if token.eq_ignore_ascii_case("false") {
        return JsonValue::Bool(false);
    }
    if token.eq_ignore_ascii_case("null") {
        return JsonValue::Null;
    }

    if is_integer_literal(token) {
        if let Ok(i) = token.parse::<i64>() {
            return JsonValue::Number(JsonNumber::Integer(i));
        }
    }

    match token.parse::<f64>() {
        Ok(f) if f.is_finite() => JsonValue::Number(JsonNumber::Float(f)),
        _ => JsonValue::String(raw.to_string()),
    }
}

/// Matches an optional single leading minus followed by one or more ASCII digits.
fn is_integer_literal(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
