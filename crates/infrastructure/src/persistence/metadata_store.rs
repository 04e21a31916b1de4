//! Sidecar JSON files.

use std::path::Path;

use colldir_application::ports::{FileSystem, FileSystemError, MetadataStore};
use colldir_application::{ConversionError, ConversionResult};
use colldir_domain::layout::{EVENT_ORDER_FILE, ORDER_FILE};
use colldir_domain::{ChildrenOrder, EventOrder, TopLevelField};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::serialization::{parse_document, render_document};

/// `MetadataStore` backed by hidden JSON files next to the data they describe.
#[derive(Debug, Clone)]
pub struct JsonMetadataStore<F: FileSystem> {
    fs: F,
}

impl<F: FileSystem> JsonMetadataStore<F> {
    /// Creates a store on top of the given file system.
    #[must_use]
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Reads a sidecar; `None` if the file does not exist.
    fn load_json<T: DeserializeOwned>(&self, path: &Path) -> ConversionResult<Option<T>> {
        let content = match self.fs.read_file_string(path) {
            Ok(content) => content,
            Err(FileSystemError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        parse_document(&content)
            .map(Some)
            .map_err(|e| ConversionError::InvalidMetadata {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }

    /// Replaces a sidecar with the serialized value.
    fn save_json<T: Serialize>(&self, path: &Path, value: &T) -> ConversionResult<()> {
        let json = render_document(value).map_err(|e| ConversionError::Serialization {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        self.fs.write_file(path, json.as_bytes())?;
        Ok(())
    }
}

impl<F: FileSystem> MetadataStore for JsonMetadataStore<F> {
    fn write_order(
        &self,
        dir: &Path,
        order: &[String],
        description: Option<&str>,
    ) -> ConversionResult<()> {
        let document = ChildrenOrder::new(order.to_vec(), description.map(ToString::to_string));
        self.save_json(&dir.join(ORDER_FILE), &document)
    }

    fn read_order(&self, dir: &Path) -> ConversionResult<Option<ChildrenOrder>> {
        self.load_json(&dir.join(ORDER_FILE))
    }

    fn write_event_order(&self, dir: &Path, file_names: &[String]) -> ConversionResult<()> {
        let document = EventOrder {
            event_order: file_names.to_vec(),
        };
        self.save_json(&dir.join(EVENT_ORDER_FILE), &document)
    }

    fn read_event_order(&self, dir: &Path) -> ConversionResult<Option<Vec<String>>> {
        let document: Option<EventOrder> = self.load_json(&dir.join(EVENT_ORDER_FILE))?;
        Ok(document.map(|d| d.event_order))
    }

    fn write_top_level(
        &self,
        dir: &Path,
        field: TopLevelField,
        value: &Value,
    ) -> ConversionResult<()> {
        let mut document = Map::new();
        document.insert(field.key().to_string(), value.clone());
        self.save_json(&dir.join(field.file_name()), &document)
    }

    fn read_top_level(&self, dir: &Path, field: TopLevelField) -> ConversionResult<Option<Value>> {
        let path = dir.join(field.file_name());
        let Some(mut document) = self.load_json::<Map<String, Value>>(&path)? else {
            return Ok(None);
        };
        document
            .remove(field.key())
            .map(Some)
            .ok_or_else(|| ConversionError::InvalidMetadata {
                path,
                message: format!("missing key {:?}", field.key()),
            })
    }
}
