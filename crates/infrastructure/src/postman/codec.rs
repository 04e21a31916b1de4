//! Reading and writing Postman collection files.

use std::path::Path;

use colldir_application::ports::{FileSystem, FileSystemError};
use colldir_application::{ConversionError, create_file};
use colldir_domain::Collection;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::mapper::{from_postman, to_postman};
use super::types::PostmanCollection;
use crate::serialization::{DocumentError, render_document};

/// Postman codec error types
#[derive(Debug, Error)]
pub enum PostmanError {
    /// JSON parsing failed
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// The document is not a Postman Collection v2.1
    #[error("invalid Postman collection: {0}")]
    InvalidFormat(String),

    /// The collection file could not be read
    #[error(transparent)]
    FileSystem(#[from] FileSystemError),

    /// The collection file could not be written
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// The collection could not be serialized
    #[error(transparent)]
    Serialization(#[from] DocumentError),
}

/// Parses Postman Collection v2.1 JSON into a collection tree.
///
/// # Errors
///
/// Returns [`PostmanError::InvalidJson`] if `content` is not JSON and
/// [`PostmanError::InvalidFormat`] if it is not a collection.
pub fn parse_collection(content: &str) -> Result<Collection, PostmanError> {
    let json: Value =
        serde_json::from_str(content).map_err(|e| PostmanError::InvalidJson(e.to_string()))?;

    if !is_collection(&json) {
        return Err(PostmanError::InvalidFormat(
            "expected an object with an \"info\" block".to_string(),
        ));
    }

    let collection: PostmanCollection =
        serde_json::from_value(json).map_err(|e| PostmanError::InvalidFormat(e.to_string()))?;
    from_postman(collection)
}

/// Renders a collection tree as Postman Collection v2.1 JSON.
///
/// # Errors
///
/// Returns [`PostmanError::Serialization`] if serialization fails.
pub fn render_collection(collection: &Collection) -> Result<String, PostmanError> {
    Ok(render_document(&to_postman(collection))?)
}

/// Reads a Postman collection file.
///
/// # Errors
///
/// Returns a filesystem error if the file cannot be read, or a parse error.
pub fn read_collection_file<F: FileSystem>(fs: &F, path: &Path) -> Result<Collection, PostmanError> {
    debug!(path = %path.display(), "reading collection file");
    let content = fs.read_file_string(path)?;
    parse_collection(&content)
}

/// Writes a collection as a Postman collection file, replacing any existing file.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_collection_file<F: FileSystem>(
    fs: &F,
    path: &Path,
    collection: &Collection,
) -> Result<(), PostmanError> {
    let json = render_collection(collection)?;
    create_file(fs, path, json.as_bytes())?;
    debug!(path = %path.display(), "wrote collection file");
    Ok(())
}

/// A collection has an `info` object carrying a v2 schema, or an `item` list.
fn is_collection(json: &Value) -> bool {
    let Some(info) = json.get("info").filter(|info| info.is_object()) else {
        return false;
    };
    let schema = info.get("schema").and_then(Value::as_str).unwrap_or("");
    schema.contains("v2.1") || schema.contains("v2.0") || json.get("item").is_some()
}
