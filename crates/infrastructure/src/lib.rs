//! Colldir Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, and the Postman file codec.

pub mod persistence;
pub mod postman;
pub mod serialization;

pub use persistence::{FileSystemCollectionDirectory, JsonMetadataStore, StdFileSystem};
pub use postman::{
    PostmanCollection, PostmanError, parse_collection, read_collection_file, render_collection,
    write_collection_file,
};
pub use serialization::{DocumentError, parse_document, render_document};
