//! String-in, string-out entry points for the host node graph.
//!
//! The host wires each node's single text output into the next node, so a
//! failure cannot travel as a separate value. These functions report it
//! in-band as text starting with `[ERROR]`. Rust callers that need to tell a
//! failure from a legitimate string should use the `try_` variants.

pub mod extractor;
pub mod remover;
pub mod replace;

pub use extractor::{extract_field, try_extract_field, ExtractError, FieldExtraction};
pub use remover::{remove_fields_text, try_remove_fields_text};
pub use replace::{replace_field, replace_field_with, try_replace_field};

use std::fmt::Display;

const ERROR_PREFIX: &str = "[ERROR]";

/// Formats an error the way the string entry points report it.
pub fn error_payload(err: &impl Display) -> String {
    format!("{} {}", ERROR_PREFIX, err)
}

/// Returns true if a node output has the shape of an in-band error report.
///
/// A legitimate output can have this shape too, so callers that hold the
/// `Result` from a `try_` variant should use that instead.
pub fn is_error_payload(output: &str) -> bool {
    output.starts_with(ERROR_PREFIX)
}
