//! Metadata store port.

use std::path::Path;

use colldir_domain::{ChildrenOrder, TopLevelField};
use serde_json::Value;

use crate::ConversionResult;

/// Reads and writes the sidecar files of a collection directory.
///
/// Writes replace the whole sidecar. Reads of a missing sidecar return
/// `None` so callers can fall back to filesystem order.
pub trait MetadataStore: Send + Sync {
    /// Writes the children-order sidecar of `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sidecar cannot be written.
    fn write_order(
        &self,
        dir: &Path,
        order: &[String],
        description: Option<&str>,
    ) -> ConversionResult<()>;

    /// Reads the children-order sidecar of `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sidecar exists but cannot be read or parsed.
    fn read_order(&self, dir: &Path) -> ConversionResult<Option<ChildrenOrder>>;

    /// Writes the event-order sidecar of a request directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the sidecar cannot be written.
    fn write_event_order(&self, dir: &Path, file_names: &[String]) -> ConversionResult<()>;

    /// Reads the event-order sidecar of a request directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the sidecar exists but cannot be read or parsed.
    fn read_event_order(&self, dir: &Path) -> ConversionResult<Option<Vec<String>>>;

    /// Writes `{ "<field>": value }` to the field's sidecar in `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sidecar cannot be written.
    fn write_top_level(&self, dir: &Path, field: TopLevelField, value: &Value)
    -> ConversionResult<()>;

    /// Reads a field sidecar from `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sidecar exists but cannot be read, is not
    /// JSON, or does not hold the field's key.
    fn read_top_level(&self, dir: &Path, field: TopLevelField) -> ConversionResult<Option<Value>>;
}
