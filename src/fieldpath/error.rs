//! Error types for document parsing and field path operations.

use std::fmt;

/// Errors that can occur while parsing a document or applying a field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPathError {
    /// The input text is not well-formed JSON.
    Parse { message: String },
    /// A path segment requires a shape the addressed value does not have.
    Structural { message: String },
}

impl FieldPathError {
    pub(crate) fn structural(message: impl Into<String>) -> Self {
        FieldPathError::Structural {
            message: message.into(),
        }
    }

    /// Returns true for errors caused by malformed input text.
    pub fn is_parse(&self) -> bool {
        matches!(self, FieldPathError::Parse { .. })
    }

    /// Returns true for errors caused by a path that conflicts with the document.
    pub fn is_structural(&self) -> bool {
        matches!(self, FieldPathError::Structural { .. })
    }
}

impl fmt::Display for FieldPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPathError::Parse { message } => write!(f, "Invalid JSON: {}", message),
            FieldPathError::Structural { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for FieldPathError {}

impl From<serde_json::Error> for FieldPathError {
    fn from(err: serde_json::Error) -> Self {
        FieldPathError::Parse {
            message: err.to_string(),
        }
    }
}
