//! Name sanitizing and sibling collision resolution.
//!
//! Every node name passes through [`to_segment`] before it becomes a path
//! segment or lands in an order sidecar, so sidecars always hold the
//! sanitized form.

use std::collections::HashSet;

use crate::error::{DomainError, DomainResult};

/// The path separator that may not appear in a segment.
pub const SEPARATOR: char = '/';

/// Literal token that replaces [`SEPARATOR`] when substitution is enabled.
pub const SEPARATOR_TOKEN: &str = "_slash_";

/// Suffix appended to a sibling whose name is already taken.
pub const COPY_SUFFIX: &str = "-copy";

/// Replaces every path separator with [`SEPARATOR_TOKEN`].
///
/// One-directional: the token is never turned back into a separator.
#[must_use]
pub fn sanitize(name: &str) -> String {
    name.replace(SEPARATOR, SEPARATOR_TOKEN)
}

/// Turns a node name into a usable path segment.
///
/// # Errors
///
/// Returns [`DomainError::SeparatorInName`] if `name` contains a separator
/// and `substitute_separators` is off, and [`DomainError::ReservedName`] for
/// names that cannot name a directory entry (empty, `.`, `..`).
pub fn to_segment(name: &str, substitute_separators: bool) -> DomainResult<String> {
    let segment = if name.contains(SEPARATOR) {
        if !substitute_separators {
            return Err(DomainError::SeparatorInName {
                name: name.to_string(),
            });
        }
        sanitize(name)
    } else {
        name.to_string()
    };

    if segment.is_empty() || segment == "." || segment == ".." {
        return Err(DomainError::ReservedName {
            name: name.to_string(),
        });
    }
    Ok(segment)
}

/// Tracks the names already used inside one parent.
#[derive(Debug, Default)]
pub struct SiblingNames {
    taken: HashSet<String>,
}

impl SiblingNames {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracker where `reserved` names are already taken.
    #[must_use]
    pub fn with_reserved<I>(reserved: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            taken: reserved.into_iter().collect(),
        }
    }

    /// Claims `name`, appending [`COPY_SUFFIX`] until it is unique.
    ///
    /// The returned name is itself recorded, so a later sibling literally
    /// named `Foo-copy` becomes `Foo-copy-copy`.
    pub fn claim(&mut self, name: String) -> String {
        let mut candidate = name;
        while self.taken.contains(&candidate) {
            candidate.push_str(COPY_SUFFIX);
        }
        self.taken.insert(candidate.clone());
        candidate
    }
}
