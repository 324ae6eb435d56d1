//! Dotted field paths over JSON documents.
//!
//! A field path is a `.`-separated list of segments. When assigning, a
//! segment made only of ASCII digits addresses an array element and every
//! other segment names an object member. Lookup and removal only follow
//! object members.
//!
//! # Examples
//!
//! ```text
//! name            top-level member
//! info.city       nested member
//! items.1.name    member of the second array element
//! ```

pub mod ast;
pub mod coerce;
pub mod error;
pub mod mutator;

pub use ast::{FieldPath, PathSegment};
pub use coerce::cast_value;
pub use error::FieldPathError;
pub use mutator::{get_by_path, remove_by_path, remove_fields, set_by_path, PathMutator};
