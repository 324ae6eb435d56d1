//! FieldQuill - dotted-path field replacement, removal and extraction for JSON.
//!
//! The crate is organised the same way data flows through it:
//!
//! - [`document`] parses text into a [`document::JsonValue`] tree and writes it back
//! - [`fieldpath`] reads, assigns and removes values addressed by dotted paths
//! - [`nodes`] wraps both behind the string-in, string-out contract of the host graph
//! - [`config`] and [`file`] support the command-line front end

pub mod config;
pub mod document;
pub mod fieldpath;
pub mod file;
pub mod nodes;
