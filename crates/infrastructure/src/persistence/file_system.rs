//! Real file system implementation.

use std::fs;
use std::path::Path;

use colldir_application::ports::{FileSystem, FileSystemError};
use colldir_domain::DirectoryEntry;

/// Real file system implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl StdFileSystem {
    /// Creates a new `StdFileSystem`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FileSystem for StdFileSystem {
    fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError> {
        fs::read_to_string(path).map_err(|e| FileSystemError::from_io(path, e))
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
        fs::write(path, contents).map_err(|e| FileSystemError::from_io(path, e))
    }

    fn create_dir(&self, path: &Path) -> Result<(), FileSystemError> {
        fs::create_dir(path).map_err(|e| FileSystemError::from_io(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok_and(|m| m.is_dir())
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirectoryEntry>, FileSystemError> {
        let mut entries = Vec::new();
        let dir = fs::read_dir(path).map_err(|e| FileSystemError::from_io(path, e))?;

        for entry in dir {
            let entry = entry.map_err(|e| FileSystemError::from_io(path, e))?;
            let entry_path = entry.path();
            entries.push(DirectoryEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: fs::metadata(&entry_path).is_ok_and(|m| m.is_dir()),
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name)); // Deterministic ordering
        Ok(entries)
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), FileSystemError> {
        fs::remove_dir_all(path).map_err(|e| FileSystemError::from_io(path, e))
    }
}
