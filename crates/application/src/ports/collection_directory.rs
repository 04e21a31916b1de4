//! Collection directory port.

use std::path::{Path, PathBuf};

use colldir_domain::{Collection, ExportOptions};

use crate::ConversionResult;

/// Converts a collection to and from its directory representation.
pub trait CollectionDirectory: Send + Sync {
    /// Writes `collection` as a new directory inside `destination`.
    ///
    /// The directory is named after the collection. Nothing is written if any
    /// name in the tree is unusable.
    ///
    /// # Returns
    /// The path of the created collection directory.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is unusable, the target already exists, or
    /// a write fails. A failure after the first write leaves a partial tree
    /// for the caller to remove.
    fn serialize(
        &self,
        collection: &Collection,
        destination: &Path,
        options: ExportOptions,
    ) -> ConversionResult<PathBuf>;

    /// Reads the collection directory at `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be listed or a payload or
    /// sidecar that exists cannot be parsed.
    fn deserialize(&self, source: &Path) -> ConversionResult<Collection>;
}
