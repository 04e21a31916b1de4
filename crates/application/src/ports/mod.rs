//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod collection_directory;
mod file_system;
mod metadata_store;

pub use collection_directory::CollectionDirectory;
pub use file_system::{FileSystem, FileSystemError};
pub use metadata_store::MetadataStore;
