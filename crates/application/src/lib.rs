//! Colldir Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for the filesystem, sidecars and the converter)
//! - Filesystem primitives shared by commands
//! - Use case orchestration
//! - Application-level error handling

pub mod error;
pub mod guards;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
mod testing;

pub use error::{ConversionError, ConversionResult};
pub use guards::{assert_is_collection_directory, assert_path_absent, create_directory, create_file};
pub use ports::{CollectionDirectory, FileSystem, FileSystemError, MetadataStore};
pub use use_cases::{
    ExportCollection, ExportCollectionInput, ExportCollectionOutput, ImportCollection,
    ImportCollectionInput,
};
