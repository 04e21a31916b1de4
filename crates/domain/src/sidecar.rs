//! Sidecar metadata documents.
//!
//! Sidecars record what a directory listing cannot: the order of children and
//! scripts, folder descriptions, and the collection's top-level fields.

use serde::{Deserialize, Serialize};

/// Contents of the children-order sidecar.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildrenOrder {
    /// Sanitized child names, in display order.
    pub children_order: Vec<String>,

    /// Folder description, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ChildrenOrder {
    /// Creates an order document.
    #[must_use]
    pub fn new(children_order: Vec<String>, description: Option<String>) -> Self {
        Self {
            children_order,
            description,
        }
    }
}

/// Contents of the event-order sidecar.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventOrder {
    /// Script file names, in execution order.
    pub event_order: Vec<String>,
}

/// A field stored in its own `.<field>.json` sidecar.
///
/// `Info`, `Variable` are only written at the collection root; `Auth` and
/// `Event` are written at the root and in folders that carry them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopLevelField {
    /// Collection `info` block.
    Info,
    /// Auth settings.
    Auth,
    /// Collection or folder events.
    Event,
    /// Collection variables.
    Variable,
}

impl TopLevelField {
    /// All fields, in the order they are written.
    pub const ALL: [Self; 4] = [Self::Info, Self::Auth, Self::Event, Self::Variable];

    /// JSON key the value is stored under.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Auth => "auth",
            Self::Event => "event",
            Self::Variable => "variable",
        }
    }

    /// Sidecar file name, e.g. `.auth.json`.
    #[must_use]
    pub fn file_name(self) -> String {
        format!(".{}.json", self.key())
    }

    /// Recognises a sidecar file name.
    #[must_use]
    pub fn from_file_name(name: &str) -> Option<Self> {
        let key = name.strip_prefix('.')?.strip_suffix(".json")?;
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}
