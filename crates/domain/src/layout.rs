//! On-disk naming conventions and entry classification.
//!
//! Classification is a pure function over a directory listing, so it can be
//! exercised without touching a real filesystem.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::collection::EventScript;
use crate::error::{DomainError, DomainResult};
use crate::naming::to_segment;
use crate::sidecar::TopLevelField;

/// Children-order sidecar present in every folder and root directory.
pub const ORDER_FILE: &str = ".order.json";
/// Event-order sidecar present in request directories with scripts.
pub const EVENT_ORDER_FILE: &str = ".event-order.json";
/// Request payload file; its presence makes a directory a request.
pub const REQUEST_FILE: &str = "request.json";
/// Optional response payload file.
pub const RESPONSE_FILE: &str = "response.json";
/// Extension used for event script files.
pub const SCRIPT_EXTENSION: &str = "js";

#[allow(clippy::expect_used)]
static EVENT_SCRIPT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^event\.(.+?)(?:\.(\d+))?\.js$").expect("event script pattern is valid")
});

/// A single entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// File or directory name (no path).
    pub name: String,
    /// Whether the entry is a directory.
    pub is_dir: bool,
}

impl DirectoryEntry {
    /// Creates a file entry.
    #[must_use]
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    /// Creates a directory entry.
    #[must_use]
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// What a directory entry means to the converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// A child folder or request directory.
    Child,
    /// `request.json`.
    RequestPayload,
    /// `response.json`.
    ResponsePayload,
    /// An `event.<listen>.js` script file.
    EventScript {
        /// Event kind recovered from the file name.
        listen: String,
    },
    /// The children-order sidecar.
    ChildrenOrder,
    /// The event-order sidecar.
    EventOrder,
    /// A `.<field>.json` top-level sidecar.
    TopLevel(TopLevelField),
    /// Anything else; ignored.
    Unknown,
}

/// Classifies one directory entry by its name.
#[must_use]
pub fn classify(entry: &DirectoryEntry) -> EntryKind {
    if entry.is_dir {
        return EntryKind::Child;
    }

    let name = entry.name.as_str();
    match name {
        REQUEST_FILE => EntryKind::RequestPayload,
        RESPONSE_FILE => EntryKind::ResponsePayload,
        ORDER_FILE => EntryKind::ChildrenOrder,
        EVENT_ORDER_FILE => EntryKind::EventOrder,
        _ => {
            if let Some(field) = TopLevelField::from_file_name(name) {
                return EntryKind::TopLevel(field);
            }
            EVENT_SCRIPT_PATTERN
                .captures(name)
                .and_then(|caps| caps.get(1))
                .map_or(EntryKind::Unknown, |listen| EntryKind::EventScript {
                    listen: listen.as_str().to_string(),
                })
        }
    }
}

/// Classifies a whole listing, keeping its order.
#[must_use]
pub fn classify_all(entries: &[DirectoryEntry]) -> Vec<(&DirectoryEntry, EntryKind)> {
    entries.iter().map(|e| (e, classify(e))).collect()
}

/// Sidecar file names a folder or root directory may hold next to its
/// children.
pub fn sidecar_file_names() -> impl Iterator<Item = String> {
    std::iter::once(ORDER_FILE.to_string())
        .chain(TopLevelField::ALL.into_iter().map(TopLevelField::file_name))
}

/// Computes the script file names for a request, in script order.
///
/// The first script of a given kind is `event.<listen>.js`; repeats are
/// numbered `event.<listen>.2.js`, `event.<listen>.3.js`, ...
///
/// A kind ending in `.<digits>` is refused: `event.v.3.js` would read back as
/// the third `v` script, and `test.2` would take the file of the second `test`.
/// Without such kinds every name is distinct and parses back to its kind.
///
/// # Errors
///
/// Returns an error if a listen kind cannot be used in a file name.
pub fn event_script_file_names(
    events: &[EventScript],
    substitute_separators: bool,
) -> DomainResult<Vec<String>> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(events.len());

    for event in events {
        let listen = to_segment(&event.listen, substitute_separators)?;
        if has_numeric_suffix(&listen) {
            return Err(DomainError::AmbiguousListen {
                listen: event.listen.clone(),
            });
        }
        let count = seen.entry(listen.clone()).or_insert(0);
        *count += 1;
        let name = if *count == 1 {
            format!("event.{listen}.{SCRIPT_EXTENSION}")
        } else {
            format!("event.{listen}.{count}.{SCRIPT_EXTENSION}")
        };
        names.push(name);
    }
    Ok(names)
}

fn has_numeric_suffix(listen: &str) -> bool {
    listen
        .rsplit_once('.')
        .is_some_and(|(_, tail)| !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()))
}
