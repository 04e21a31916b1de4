//! Fail-fast filesystem primitives shared by the converter and its callers.

use std::path::Path;

use colldir_domain::layout::ORDER_FILE;

use crate::ports::{FileSystem, FileSystemError, MetadataStore};
use crate::{ConversionError, ConversionResult};

/// Checks that `path` is a directory with a readable children-order sidecar.
///
/// # Errors
///
/// Returns [`ConversionError::NotACollection`] if `path` is not a directory,
/// [`ConversionError::MissingMetadata`] if the sidecar is absent, or the
/// store's error if the sidecar cannot be parsed.
pub fn assert_is_collection_directory<F, M>(fs: &F, metadata: &M, path: &Path) -> ConversionResult<()>
where
    F: FileSystem,
    M: MetadataStore,
{
    if !fs.is_dir(path) {
        return Err(ConversionError::NotACollection(path.to_path_buf()));
    }
    match metadata.read_order(path)? {
        Some(_) => Ok(()),
        None => Err(ConversionError::MissingMetadata(path.join(ORDER_FILE))),
    }
}

/// Checks that nothing exists at `path`.
///
/// # Errors
///
/// Returns [`ConversionError::AlreadyExists`] if it does.
pub fn assert_path_absent<F: FileSystem>(fs: &F, path: &Path) -> ConversionResult<()> {
    if fs.exists(path) {
        return Err(ConversionError::AlreadyExists(path.to_path_buf()));
    }
    Ok(())
}

/// Creates a single directory, failing if anything is already there.
///
/// # Errors
///
/// Returns [`ConversionError::AlreadyExists`] on a conflict, or the
/// filesystem error otherwise.
pub fn create_directory<F: FileSystem>(fs: &F, path: &Path) -> ConversionResult<()> {
    fs.create_dir(path).map_err(|e| match e {
        FileSystemError::AlreadyExists(p) => ConversionError::AlreadyExists(p),
        other => ConversionError::FileSystem(other),
    })
}

/// Writes `content` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns the filesystem error if the file cannot be written.
pub fn create_file<F: FileSystem>(fs: &F, path: &Path, content: &[u8]) -> ConversionResult<()> {
    fs.write_file(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeMetadataStore, MemoryFs};
    use colldir_domain::ChildrenOrder;

    #[test]
    fn test_collection_directory_accepted() {
        let fs = MemoryFs::with_dirs(&["/export/API"]);
        let metadata = FakeMetadataStore::default();
        metadata.put_order("/export/API", ChildrenOrder::default());

        assert!(assert_is_collection_directory(&fs, &metadata, Path::new("/export/API")).is_ok());
    }

    #[test]
    fn test_directory_without_order_is_rejected() {
        let fs = MemoryFs::with_dirs(&["/export/API"]);
        let metadata = FakeMetadataStore::default();

        let err = assert_is_collection_directory(&fs, &metadata, Path::new("/export/API"))
            .expect_err("missing sidecar must fail");
        assert!(matches!(err, ConversionError::MissingMetadata(p) if p.ends_with(".order.json")));
    }

    #[test]
    fn test_missing_directory_is_rejected() {
        let fs = MemoryFs::default();
        let metadata = FakeMetadataStore::default();

        let err = assert_is_collection_directory(&fs, &metadata, Path::new("/nope"))
            .expect_err("missing directory must fail");
        assert!(matches!(err, ConversionError::NotACollection(_)));
    }

    #[test]
    fn test_assert_path_absent() {
        let fs = MemoryFs::with_dirs(&["/taken"]);
        assert!(assert_path_absent(&fs, Path::new("/free")).is_ok());
        assert!(matches!(
            assert_path_absent(&fs, Path::new("/taken")),
            Err(ConversionError::AlreadyExists(_))
        ));
    }

    #[test]
    fn test_create_directory_twice_conflicts() {
        let fs = MemoryFs::default();
        create_directory(&fs, Path::new("/new")).expect("first create should succeed");
        assert!(matches!(
            create_directory(&fs, Path::new("/new")),
            Err(ConversionError::AlreadyExists(p)) if p == Path::new("/new")
        ));
    }

    #[test]
    fn test_create_file_overwrites() {
        let fs = MemoryFs::default();
        create_file(&fs, Path::new("/out.json"), b"one").expect("write should succeed");
        create_file(&fs, Path::new("/out.json"), b"two").expect("rewrite should succeed");
        assert_eq!(
            fs.read_file_string(Path::new("/out.json")).expect("file should exist"),
            "two"
        );
    }
}
