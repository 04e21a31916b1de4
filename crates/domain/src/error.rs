//! Domain error types

use thiserror::Error;

/// Domain-level errors raised while planning a conversion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A node name contains the path separator and substitution is disabled.
    #[error(
        "name {name:?} contains '/'; rename it or enable separator substitution (--substitute-slashes)"
    )]
    SeparatorInName {
        /// The offending name.
        name: String,
    },

    /// A node name can never be used as a path segment.
    #[error("name {name:?} cannot be used as a directory or file name")]
    ReservedName {
        /// The offending name.
        name: String,
    },

    /// A script kind ends in `.<digits>`, which reads back as a repeat number.
    #[error("script kind {listen:?} ends in a numeric suffix and cannot name a script file")]
    AmbiguousListen {
        /// The offending listen kind.
        listen: String,
    },
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
