//! Postman Collection v2.1 codec
//!
//! Reads and writes the collection files that `colldir export` consumes and
//! `colldir import` produces.

pub mod codec;
pub mod mapper;
pub mod types;

pub use codec::{PostmanError, parse_collection, read_collection_file, render_collection, write_collection_file};
pub use mapper::{from_postman, to_postman};
pub use types::PostmanCollection;
