//! Application error types

use std::path::PathBuf;

use colldir_domain::DomainError;
use thiserror::Error;

use crate::ports::FileSystemError;

/// Errors raised while converting between a collection and a directory.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// A path that must be created already exists.
    #[error("destination already exists: {0}")]
    AlreadyExists(PathBuf),

    /// A node name cannot be turned into a path segment.
    #[error("unsupported name: {0}")]
    UnsupportedName(#[from] DomainError),

    /// The path is not a directory at all.
    #[error("not a collection directory: {0}")]
    NotACollection(PathBuf),

    /// A required metadata file is missing.
    #[error("missing metadata file: {0}")]
    MissingMetadata(PathBuf),

    /// A metadata file exists but cannot be parsed.
    #[error("invalid metadata in {path}: {message}")]
    InvalidMetadata {
        /// The sidecar file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// A payload file exists but is not valid JSON.
    #[error("invalid payload in {path}: {message}")]
    InvalidPayload {
        /// The payload file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// A value could not be serialized for writing.
    #[error("serialization failed for {path}: {message}")]
    Serialization {
        /// The file being written.
        path: PathBuf,
        /// Serializer message.
        message: String,
    },

    /// File system error.
    #[error(transparent)]
    FileSystem(#[from] FileSystemError),
}

/// Result type alias for conversion operations.
pub type ConversionResult<T> = Result<T, ConversionError>;
