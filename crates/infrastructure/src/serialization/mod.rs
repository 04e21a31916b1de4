//! JSON documents as they appear on disk.
//!
//! - Object keys in source order
//! - 2-space indentation
//! - Trailing newline
//! - UTF-8 without BOM

mod json;

pub use json::*;
