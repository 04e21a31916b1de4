//! Persistence adapters: the real file system, sidecar files and the
//! collection/directory converter built on top of them.

mod collection_directory;
mod file_system;
mod metadata_store;

pub use collection_directory::FileSystemCollectionDirectory;
pub use file_system::StdFileSystem;
pub use metadata_store::JsonMetadataStore;
