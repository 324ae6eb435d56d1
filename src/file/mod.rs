//! File I/O for input documents.
//!
//! Edited documents are always written to stdout; this module only reads.

pub mod loader;
