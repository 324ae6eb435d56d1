//! Field path lookup, assignment and removal over `JsonValue` trees.
//!
//! Assignment creates missing structure as it walks: an absent or scalar
//! intermediate member becomes an empty object, and an array addressed past
//! its end is padded with empty objects. Removal never creates anything and
//! silently ignores paths that do not resolve.

use super::ast::{FieldPath, PathSegment};
use super::error::FieldPathError;
use crate::config::Config;
use crate::document::node::JsonValue;
use tracing::{debug, trace};

/// Applies field path edits to documents.
///
/// # Example
///
/// ```
/// use fieldquill::document::parser::parse_json;
/// use fieldquill::fieldpath::{cast_value, FieldPath, PathMutator};
///
/// let mutator = PathMutator::default();
/// let mut doc = parse_json("{}").unwrap();
/// mutator
///     .set_by_path(&mut doc, &FieldPath::parse("a.b.c.d"), cast_value("test"))
///     .unwrap();
/// assert_eq!(doc, parse_json(r#"{"a":{"b":{"c":{"d":"test"}}}}"#).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct PathMutator {
    max_array_extension: Option<usize>,
}

impl Default for PathMutator {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl PathMutator {
    /// Creates a mutator that pads arrays by at most `max_array_extension`
    /// elements in a single step, or without limit when `None`.
    pub fn new(max_array_extension: Option<usize>) -> Self {
        Self {
            max_array_extension,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_array_extension)
    }

    /// Assigns `value` at `path`, creating intermediate structure as needed.
    ///
    /// The path is checked against the document before anything is changed,
    /// so on error the document is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `FieldPathError::Structural` when
    /// - an index segment addresses a value that is not an array,
    /// - a key segment addresses a value that is not an object,
    /// - an index is too large to pad the array up to, or would pad it by
    ///   more than the configured limit,
    /// - the path is empty.
    pub fn set_by_path(
        &self,
        document: &mut JsonValue,
        path: &FieldPath,
        value: JsonValue,
    ) -> Result<(), FieldPathError> {
        if path.is_empty() {
            return Err(FieldPathError::structural("field path is empty"));
        }

        let result = self
            .check(document, &path.segments)
            .and_then(|()| self.assign(document, &path.segments, value));
        match &result {
            Ok(()) => debug!(path = %path, "Assigned field"),
            Err(err) => debug!(path = %path, error = %err, "Field assignment rejected"),
        }
        result
    }

    /// Walks `segments` read-only and reports the error `assign` would hit.
    fn check(&self, document: &JsonValue, segments: &[PathSegment]) -> Result<(), FieldPathError> {
        // `None` once the walk is inside structure `assign` would create,
        // which is always a fresh empty object.
        let mut current = Some(document);

        for segment in segments {
            match segment.index()? {
                Some(index) => {
                    let items = match current {
                        Some(JsonValue::Array(items)) => items,
                        other => {
                            let found = other.map_or("object", JsonValue::type_name);
                            return Err(non_array(segment, found));
                        }
                    };
                    self.check_extension(items.len(), index)?;
                    current = items.get(index);
                }
                None => {
                    let fields = match current {
                        Some(JsonValue::Object(fields)) => Some(fields),
                        None => None,
                        Some(other) => return Err(non_object(segment, other.type_name())),
                    };
                    current = fields
                        .and_then(|fields| fields.get(segment.as_str()))
                        .filter(|child| child.is_container());
                }
            }
        }

        Ok(())
    }

    fn assign(
        &self,
        document: &mut JsonValue,
        segments: &[PathSegment],
        value: JsonValue,
    ) -> Result<(), FieldPathError> {
        let last = segments.len() - 1;
        let mut current = document;

        for (position, segment) in segments.iter().enumerate() {
            let is_last = position == last;

            match segment.index()? {
                Some(index) => {
                    let items = match current {
                        JsonValue::Array(items) => items,
                        other => return Err(non_array(segment, other.type_name())),
                    };
                    self.pad_array(items, index)?;
                    let Some(slot) = items.get_mut(index) else {
                        return Err(index_too_large(index));
                    };
                    if is_last {
                        *slot = value;
                        return Ok(());
                    }
                    current = slot;
                }
                None => {
                    let fields = match current {
                        JsonValue::Object(fields) => fields,
                        other => return Err(non_object(segment, other.type_name())),
                    };
                    if is_last {
                        fields.insert(segment.as_str().to_string(), value);
                        return Ok(());
                    }
                    let slot = fields
                        .entry(segment.as_str().to_string())
                        .or_insert_with(JsonValue::empty_object);
                    if !slot.is_container() {
                        trace!(
                            key = %segment,
                            replaced = slot.type_name(),
                            "Replacing scalar with object"
                        );
                        *slot = JsonValue::empty_object();
                    }
                    current = slot;
                }
            }
        }

        Ok(())
    }

    /// Number of elements needed to bring `index` into range of an array of
    /// length `len`, checked against the padding limit and `usize` overflow.
    fn check_extension(&self, len: usize, index: usize) -> Result<usize, FieldPathError> {
        if index < len {
            return Ok(0);
        }

        let new_len = index.checked_add(1).ok_or_else(|| index_too_large(index))?;
        let missing = new_len - len;
        if let Some(limit) = self.max_array_extension {
            if missing > limit {
                return Err(FieldPathError::structural(format!(
                    "array index {} would add {} elements (limit {})",
                    index, missing, limit
                )));
            }
        }
        Ok(missing)
    }

    /// Pads `items` with empty objects until `index` is in range.
    fn pad_array(&self, items: &mut Vec<JsonValue>, index: usize) -> Result<(), FieldPathError> {
        let missing = self.check_extension(items.len(), index)?;
        if missing == 0 {
            return Ok(());
        }

        trace!(index, len = items.len(), missing, "Extending array");
        items
            .try_reserve_exact(missing)
            .map_err(|_| index_too_large(index))?;
        items.resize_with(index + 1, JsonValue::empty_object);
        Ok(())
    }

    /// Removes the object member named by a dotted path.
    ///
    /// Every step must land on an object that holds the named key; anything
    /// else makes the call a no-op. Array elements are never removed.
    /// Returns true when a member was removed.
    pub fn remove_by_path(&self, document: &mut JsonValue, path: &str) -> bool {
        let keys: Vec<&str> = path.split('.').collect();
        let Some((target, parents)) = keys.split_last() else {
            return false;
        };

        let mut current = document;
        for key in parents {
            current = match current {
                JsonValue::Object(fields) => match fields.get_mut(*key) {
                    Some(child) => child,
                    None => {
                        trace!(path, key, "Removal path not found");
                        return false;
                    }
                },
                _ => {
                    trace!(path, key, "Removal path crosses a non-object");
                    return false;
                }
            };
        }

        let removed = match current {
            JsonValue::Object(fields) => fields.shift_remove(*target).is_some(),
            _ => false,
        };
        debug!(path, removed, "Processed removal");
        removed
    }

    /// Removes every path listed in a `|`-separated spec, left to right.
    ///
    /// Tokens are trimmed and empty tokens skipped. Later paths see the
    /// effects of earlier ones. Returns how many members were removed.
    pub fn remove_fields(&self, document: &mut JsonValue, field_spec: &str) -> usize {
        field_spec
            .split('|')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .filter(|token| self.remove_by_path(document, token))
            .count()
    }
}

fn non_array(segment: &PathSegment, found: &str) -> FieldPathError {
    FieldPathError::structural(format!(
        "trying to index non-array object: segment '{}' addresses a {}",
        segment, found
    ))
}

fn non_object(segment: &PathSegment, found: &str) -> FieldPathError {
    FieldPathError::structural(format!(
        "trying to access key '{}' on non-object value of type {}",
        segment, found
    ))
}

fn index_too_large(index: usize) -> FieldPathError {
    FieldPathError::structural(format!("array index {} is too large to extend to", index))
}

/// Looks up a dotted path through nested objects.
///
/// Only object members are followed; a digit segment is an ordinary key here.
///
/// # Example
///
/// ```
/// use fieldquill::document::parser::parse_json;
/// use fieldquill::fieldpath::get_by_path;
///
/// let doc = parse_json(r#"{"info": {"city": "Gotham"}}"#).unwrap();
/// assert_eq!(get_by_path(&doc, "info.city").and_then(|v| v.as_str()), Some("Gotham"));
/// assert!(get_by_path(&doc, "info.zip").is_none());
/// ```
pub fn get_by_path<'a>(document: &'a JsonValue, path: &str) -> Option<&'a JsonValue> {
    path.split('.')
        .try_fold(document, |current, key| current.get_key(key))
}

/// Assigns `value` at `path` using the default array padding limit.
pub fn set_by_path(
    document: &mut JsonValue,
    path: &FieldPath,
    value: JsonValue,
) -> Result<(), FieldPathError> {
    PathMutator::default().set_by_path(document, path, value)
}

/// Removes the object member named by a dotted path. See [`PathMutator::remove_by_path`].
pub fn remove_by_path(document: &mut JsonValue, path: &str) -> bool {
    PathMutator::default().remove_by_path(document, path)
}

/// Removes every path in a `|`-separated spec. See [`PathMutator::remove_fields`].
pub fn remove_fields(document: &mut JsonValue, field_spec: &str) -> usize {
    PathMutator::default().remove_fields(document, field_spec)
}
