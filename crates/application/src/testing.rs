//! In-memory fakes for port-level tests.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use colldir_domain::{ChildrenOrder, Collection, DirectoryEntry, ExportOptions, TopLevelField};
use serde_json::Value;

use crate::ConversionResult;
use crate::ports::{CollectionDirectory, FileSystem, FileSystemError, MetadataStore};

#[derive(Debug, Clone)]
enum Node {
    Dir,
    File(String),
}

/// Flat path-to-node map; `/` always exists.
#[derive(Debug, Default)]
pub struct MemoryFs {
    nodes: Mutex<BTreeMap<PathBuf, Node>>,
}

impl MemoryFs {
    pub fn with_dirs(dirs: &[&str]) -> Self {
        let fs = Self::default();
        for dir in dirs {
            fs.lock().insert(PathBuf::from(dir), Node::Dir);
        }
        fs
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<PathBuf, Node>> {
        self.nodes.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            None => true,
            Some(parent) if parent == Path::new("/") => true,
            Some(parent) => matches!(self.lock().get(parent), Some(Node::Dir)),
        }
    }
}

impl FileSystem for MemoryFs {
    fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError> {
        match self.lock().get(path) {
            Some(Node::File(content)) => Ok(content.clone()),
            _ => Err(FileSystemError::NotFound(path.to_path_buf())),
        }
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
        if !self.parent_exists(path) {
            return Err(FileSystemError::NotFound(path.to_path_buf()));
        }
        let text = String::from_utf8_lossy(contents).into_owned();
        self.lock().insert(path.to_path_buf(), Node::File(text));
        Ok(())
    }

    fn create_dir(&self, path: &Path) -> Result<(), FileSystemError> {
        if self.exists(path) {
            return Err(FileSystemError::AlreadyExists(path.to_path_buf()));
        }
        if !self.parent_exists(path) {
            return Err(FileSystemError::NotFound(path.to_path_buf()));
        }
        self.lock().insert(path.to_path_buf(), Node::Dir);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path == Path::new("/") || self.lock().contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path == Path::new("/") || matches!(self.lock().get(path), Some(Node::Dir))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirectoryEntry>, FileSystemError> {
        if !self.is_dir(path) {
            return Err(FileSystemError::NotFound(path.to_path_buf()));
        }
        Ok(self
            .lock()
            .iter()
            .filter(|(p, _)| p.parent() == Some(path))
            .filter_map(|(p, node)| {
                let name = p.file_name()?.to_string_lossy().into_owned();
                Some(DirectoryEntry {
                    name,
                    is_dir: matches!(node, Node::Dir),
                })
            })
            .collect())
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), FileSystemError> {
        if !self.is_dir(path) {
            return Err(FileSystemError::NotFound(path.to_path_buf()));
        }
        self.lock().retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}

/// Metadata store that only tracks children-order documents.
#[derive(Debug, Default)]
pub struct FakeMetadataStore {
    orders: Mutex<HashMap<PathBuf, ChildrenOrder>>,
}

impl FakeMetadataStore {
    pub fn put_order(&self, dir: &str, order: ChildrenOrder) {
        self.orders
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(PathBuf::from(dir), order);
    }
}

impl MetadataStore for FakeMetadataStore {
    fn write_order(&self, dir: &Path, order: &[String], description: Option<&str>) -> ConversionResult<()> {
        self.orders
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(
                dir.to_path_buf(),
                ChildrenOrder::new(order.to_vec(), description.map(ToString::to_string)),
            );
        Ok(())
    }

    fn read_order(&self, dir: &Path) -> ConversionResult<Option<ChildrenOrder>> {
        Ok(self
            .orders
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(dir)
            .cloned())
    }

    fn write_event_order(&self, _dir: &Path, _file_names: &[String]) -> ConversionResult<()> {
        Ok(())
    }

    fn read_event_order(&self, _dir: &Path) -> ConversionResult<Option<Vec<String>>> {
        Ok(None)
    }

    fn write_top_level(&self, _dir: &Path, _field: TopLevelField, _value: &Value) -> ConversionResult<()> {
        Ok(())
    }

    fn read_top_level(&self, _dir: &Path, _field: TopLevelField) -> ConversionResult<Option<Value>> {
        Ok(None)
    }
}

/// Records serialize calls and hands back a canned collection.
#[derive(Debug)]
pub struct FakeDirectory {
    pub loaded: Collection,
    pub written: Mutex<Vec<PathBuf>>,
}

impl FakeDirectory {
    pub fn new(loaded: Collection) -> Self {
        Self {
            loaded,
            written: Mutex::new(Vec::new()),
        }
    }

    pub fn written(&self) -> Vec<PathBuf> {
        self.written
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl CollectionDirectory for FakeDirectory {
    fn serialize(
        &self,
        collection: &Collection,
        destination: &Path,
        _options: ExportOptions,
    ) -> ConversionResult<PathBuf> {
        let path = destination.join(collection.name());
        self.written
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(path.clone());
        Ok(path)
    }

    fn deserialize(&self, _source: &Path) -> ConversionResult<Collection> {
        Ok(self.loaded.clone())
    }
}
