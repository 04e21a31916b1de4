//! Export collection use case.

use std::path::PathBuf;

use colldir_domain::{Collection, ExportOptions, ExportPlan};
use tracing::{debug, info};

use crate::guards::assert_path_absent;
use crate::ports::{CollectionDirectory, FileSystem};
use crate::ConversionResult;

/// Input for exporting a collection.
#[derive(Debug, Clone)]
pub struct ExportCollectionInput {
    /// The collection to write.
    pub collection: Collection,
    /// Directory the collection directory is created in.
    pub destination: PathBuf,
    /// Name handling options.
    pub options: ExportOptions,
    /// Remove an existing collection directory instead of failing.
    pub force_overwrite: bool,
}

/// Result of an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportCollectionOutput {
    /// Path of the created collection directory.
    pub path: PathBuf,
    /// Number of folders written.
    pub folders: usize,
    /// Number of requests written.
    pub requests: usize,
}

/// Use case for writing a collection out as a directory tree.
pub struct ExportCollection<D: CollectionDirectory, F: FileSystem> {
    directory: D,
    fs: F,
}

impl<D: CollectionDirectory, F: FileSystem> ExportCollection<D, F> {
    /// Creates a new `ExportCollection` use case.
    #[must_use]
    pub const fn new(directory: D, fs: F) -> Self {
        Self { directory, fs }
    }

    /// Writes the collection under the input destination.
    ///
    /// Names are validated before anything is removed or written, so a
    /// rejected name never costs an existing export.
    ///
    /// # Errors
    /// - Returns error if a node name is unusable
    /// - Returns error if the target exists and `force_overwrite` is false
    /// - Returns error if file system operations fail
    pub fn execute(&self, input: ExportCollectionInput) -> ConversionResult<ExportCollectionOutput> {
        let plan = ExportPlan::build(&input.collection, input.options)?;
        let target = input.destination.join(plan.root_name());

        if input.force_overwrite && self.fs.exists(&target) {
            info!(path = %target.display(), "removing existing export");
            self.fs.remove_dir_all(&target)?;
        } else {
            assert_path_absent(&self.fs, &target)?;
        }

        debug!(destination = %input.destination.display(), "exporting collection");
        let path = self
            .directory
            .serialize(&input.collection, &input.destination, input.options)?;

        let (folders, requests) = input.collection.count_nodes();
        info!(path = %path.display(), folders, requests, "collection exported");
        Ok(ExportCollectionOutput {
            path,
            folders,
            requests,
        })
    }
}
