//! File system abstraction port.

use std::io;
use std::path::{Path, PathBuf};

use colldir_domain::DirectoryEntry;

/// Error type for file system operations.
///
/// Every variant carries the path the operation failed on.
#[derive(Debug, thiserror::Error)]
pub enum FileSystemError {
    /// File or directory not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Path already exists.
    #[error("Path already exists: {0}")]
    AlreadyExists(PathBuf),

    /// Path is not a directory.
    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Any other IO error.
    #[error("IO error at {path}: {source}")]
    Io {
        /// Path the operation failed on.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
}

impl FileSystemError {
    /// Maps an IO error to the matching variant, attaching `path`.
    #[must_use]
    pub fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            io::ErrorKind::AlreadyExists => Self::AlreadyExists(path.to_path_buf()),
            io::ErrorKind::NotADirectory => Self::NotADirectory(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }
}

/// Abstraction over file system operations.
///
/// Conversions only go through this trait, so tests can swap in an
/// in-memory implementation.
pub trait FileSystem: Send + Sync {
    /// Reads a file's contents as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError>;

    /// Writes bytes to a file, creating or truncating it.
    ///
    /// The parent directory must already exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError>;

    /// Creates a single directory.
    ///
    /// # Errors
    ///
    /// Returns [`FileSystemError::AlreadyExists`] if anything exists at `path`,
    /// or another error if the directory cannot be created.
    fn create_dir(&self, path: &Path) -> Result<(), FileSystemError>;

    /// Checks if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Checks if a path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Lists entries in a directory, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    fn read_dir(&self, path: &Path) -> Result<Vec<DirectoryEntry>, FileSystemError>;

    /// Removes a directory and all its contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be removed.
    fn remove_dir_all(&self, path: &Path) -> Result<(), FileSystemError>;
}
