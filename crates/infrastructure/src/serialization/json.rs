//! Rendering and parsing of the JSON documents colldir reads and writes.
//!
//! Payloads, sidecars and whole Postman collections all go through here, so
//! every file on disk has the same shape.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Error raised while rendering or parsing a JSON document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The value could not be rendered.
    #[error("cannot render JSON document: {0}")]
    Render(#[from] serde_json::Error),

    /// The text is not JSON of the expected shape.
    #[error("cannot parse JSON document: {0}")]
    Parse(serde_json::Error),

    /// The rendered bytes were not UTF-8.
    #[error("rendered JSON is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Renders `value` as a document ready to be written to disk.
///
/// Two-space indentation, one trailing newline. Object keys keep the order
/// they arrived in (`serde_json` is built with `preserve_order`), so a
/// request payload is written back exactly as Postman laid it out.
///
/// # Errors
///
/// Returns an error if `value` cannot be rendered.
pub fn render_document<T: Serialize>(value: &T) -> Result<String, DocumentError> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"  "));
    value.serialize(&mut serializer)?;

    let mut document = String::from_utf8(buffer)?;
    document.push('\n');
    Ok(document)
}

/// Parses a document, pretty-printed or minified.
///
/// # Errors
///
/// Returns an error if `text` is not JSON or does not match `T`.
pub fn parse_document<T: DeserializeOwned>(text: &str) -> Result<T, DocumentError> {
    serde_json::from_str(text).map_err(DocumentError::Parse)
}
