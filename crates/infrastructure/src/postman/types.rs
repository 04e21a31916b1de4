//! Postman Collection v2.1 Type Definitions
//!
//! Only the tree shape is typed. Request bodies, responses, auth blocks and
//! variables are carried as raw JSON so nothing is lost on the way through.

#![allow(missing_docs)]

use colldir_domain::CollectionInfo;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Schema URL written into collections that do not carry one.
pub const SCHEMA_V21: &str = "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// Root structure for Postman Collection v2.1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostmanCollection {
    pub info: CollectionInfo,
    #[serde(default)]
    pub item: Vec<PostmanItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<Value>,
}

/// An item can be either a folder (containing more items) or a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostmanItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<PostmanDescription>,
    /// If present, this item is a folder containing sub-items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Vec<Self>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<Value>,
    /// Folder-level auth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<Value>,
}

impl PostmanItem {
    /// Returns true if this item is a folder (has sub-items)
    #[must_use]
    pub const fn is_folder(&self) -> bool {
        self.item.is_some()
    }
}

/// Descriptions are either plain text or a `{content, type}` object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostmanDescription {
    Text(String),
    Rich {
        #[serde(default)]
        content: String,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
}

impl PostmanDescription {
    /// Returns the description text.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) | Self::Rich { content: text, .. } => text,
        }
    }
}

/// Event (pre-request or test script)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostmanEvent {
    pub listen: String,
    #[serde(default)]
    pub script: Option<PostmanScript>,
}

/// Script definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostmanScript {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub script_type: Option<String>,
    #[serde(default)]
    pub exec: PostmanExec,
}

/// Script source, either as lines or as a single string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostmanExec {
    Lines(Vec<String>),
    Source(String),
}

impl Default for PostmanExec {
    fn default() -> Self {
        Self::Lines(Vec::new())
    }
}

impl PostmanExec {
    /// Splits script source into one element per line.
    #[must_use]
    pub fn from_source(code: &str) -> Self {
        Self::Lines(code.split('\n').map(ToString::to_string).collect())
    }

    /// Joins the script back into a single source string.
    #[must_use]
    pub fn into_source(self) -> String {
        match self {
            Self::Lines(lines) => lines.join("\n"),
            Self::Source(source) => source,
        }
    }
}
