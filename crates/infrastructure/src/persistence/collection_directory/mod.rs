//! File system based collection directory.
//!
//! Layout of an exported collection:
//!
//! ```text
//! My API/
//!   .order.json          {"childrenOrder": ["Users", "Health"]}
//!   .info.json           {"info": {...}}
//!   .auth.json           {"auth": {...}}          (if set)
//!   Users/
//!     .order.json        {"childrenOrder": ["List"], "description": "..."}
//!     List/
//!       request.json
//!       response.json                              (if set)
//!       event.prerequest.js
//!       event.test.js
//!       .event-order.json {"eventOrder": ["event.prerequest.js", "event.test.js"]}
//!   Health/
//!     request.json
//! ```

mod reader;
mod writer;

use std::path::{Path, PathBuf};

use colldir_application::ConversionResult;
use colldir_application::ports::{CollectionDirectory, FileSystem};
use colldir_domain::{Collection, ExportOptions};

use super::JsonMetadataStore;

/// File system based implementation of `CollectionDirectory`.
#[derive(Debug, Clone)]
pub struct FileSystemCollectionDirectory<F: FileSystem + Clone> {
    fs: F,
    metadata: JsonMetadataStore<F>,
}

impl<F: FileSystem + Clone> FileSystemCollectionDirectory<F> {
    /// Creates a converter on top of the given file system.
    #[must_use]
    pub fn new(fs: F) -> Self {
        Self {
            metadata: JsonMetadataStore::new(fs.clone()),
            fs,
        }
    }
}

impl<F: FileSystem + Clone> CollectionDirectory for FileSystemCollectionDirectory<F> {
    fn serialize(
        &self,
        collection: &Collection,
        destination: &Path,
        options: ExportOptions,
    ) -> ConversionResult<PathBuf> {
        self.write_collection(collection, destination, options)
    }

    fn deserialize(&self, source: &Path) -> ConversionResult<Collection> {
        self.read_collection(source)
    }
}
