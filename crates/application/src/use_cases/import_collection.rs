//! Import collection use case.

use std::path::PathBuf;

use colldir_domain::Collection;
use tracing::info;

use crate::guards::assert_is_collection_directory;
use crate::ports::{CollectionDirectory, FileSystem, MetadataStore};
use crate::ConversionResult;

/// Input for importing a collection.
#[derive(Debug, Clone)]
pub struct ImportCollectionInput {
    /// Path to the collection directory.
    pub source: PathBuf,
}

/// Use case for rebuilding a collection from its directory tree.
pub struct ImportCollection<D: CollectionDirectory, F: FileSystem, M: MetadataStore> {
    directory: D,
    fs: F,
    metadata: M,
}

impl<D: CollectionDirectory, F: FileSystem, M: MetadataStore> ImportCollection<D, F, M> {
    /// Creates a new `ImportCollection` use case.
    #[must_use]
    pub const fn new(directory: D, fs: F, metadata: M) -> Self {
        Self {
            directory,
            fs,
            metadata,
        }
    }

    /// Loads the collection at the input source.
    ///
    /// # Errors
    /// - Returns error if the source is not a collection directory
    /// - Returns error if a payload or sidecar cannot be parsed
    pub fn execute(&self, input: ImportCollectionInput) -> ConversionResult<Collection> {
        assert_is_collection_directory(&self.fs, &self.metadata, &input.source)?;

        let collection = self.directory.deserialize(&input.source)?;
        let (folders, requests) = collection.count_nodes();
        info!(
            source = %input.source.display(),
            name = collection.name(),
            folders,
            requests,
            "collection imported"
        );
        Ok(collection)
    }
}
