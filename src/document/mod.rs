//! JSON document model.
//!
//! This module holds the tagged value tree, parsing from text and stable
//! re-serialization back to text.

pub mod node;
pub mod parser;
pub mod serializer;

pub use node::{JsonNumber, JsonValue};
pub use parser::parse_json;
pub use serializer::{serialize_compact, serialize_value};
