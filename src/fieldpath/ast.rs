//! Dotted field path expressions.

use super::error::FieldPathError;

/// A segment in a dotted field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object member name (`name`, `info`, `-1`)
    Key(String),
    /// Array position; the segment text was all ASCII digits (`0`, `12`)
    Index(String),
}

impl PathSegment {
    /// Classifies a raw segment. Only unsigned digit runs address arrays.
    pub fn classify(raw: &str) -> Self {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            PathSegment::Index(raw.to_string())
        } else {
            PathSegment::Key(raw.to_string())
        }
    }

    /// The segment text exactly as written in the path.
    pub fn as_str(&self) -> &str {
        match self {
            PathSegment::Key(s) | PathSegment::Index(s) => s,
        }
    }

    /// Numeric value of an index segment.
    ///
    /// # Errors
    ///
    /// Returns a structural error when the digits do not fit in `usize`.
    pub fn index(&self) -> Result<Option<usize>, FieldPathError> {
        match self {
            PathSegment::Key(_) => Ok(None),
            PathSegment::Index(digits) => digits.parse::<usize>().map(Some).map_err(|_| {
                FieldPathError::structural(format!("array index {} is out of range", digits))
            }),
        }
    }
}

impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A complete dotted field path.
///
/// # Example
///
/// ```
/// use fieldquill::fieldpath::{FieldPath, PathSegment};
///
/// let path = FieldPath::parse("items.1.name");
/// assert_eq!(
///     path.segments,
///     vec![
///         PathSegment::Key("items".to_string()),
///         PathSegment::Index("1".to_string()),
///         PathSegment::Key("name".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    /// Segments that make up the path.
    pub segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Creates a new path with the given segments.
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// Splits a dotted expression into segments.
    ///
    /// An empty expression yields an empty path. Empty segments between
    /// consecutive dots are kept as empty keys.
    pub fn parse(expr: &str) -> Self {
        if expr.is_empty() {
            return Self::new(Vec::new());
        }
        Self::new(expr.split('.').map(PathSegment::classify).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<&str> = self.segments.iter().map(PathSegment::as_str).collect();
        write!(f, "{}", parts.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_digits_as_index() {
        for raw in ["0", "042"] {
            assert_eq!(PathSegment::classify(raw), PathSegment::Index(raw.to_string()));
        }
        for raw in ["-1", "+1", "1a", "", "٣"] {
            assert_eq!(PathSegment::classify(raw), PathSegment::Key(raw.to_string()));
        }
    }

    #[test]
    fn test_index_value() {
        assert_eq!(PathSegment::classify("042").index(), Ok(Some(42)));
        assert_eq!(PathSegment::classify("name").index(), Ok(None));

        let err = PathSegment::classify("99999999999999999999999").index().unwrap_err();
        assert!(err.is_structural());
    }

    #[test]
    fn test_parse_empty_path() {
        assert!(FieldPath::parse("").is_empty());
    }

    #[test]
    fn test_parse_keeps_empty_segments() {
        let path = FieldPath::parse("a..b");
        assert_eq!(path.segments.len(), 3);
        assert_eq!(path.segments[1], PathSegment::Key(String::new()));
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(FieldPath::parse("items.3.name").to_string(), "items.3.name");
    }
}
