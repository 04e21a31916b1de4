//! Tree deserializer: directories to collection.

use std::path::Path;

use colldir_application::ports::{FileSystem, MetadataStore};
use colldir_application::{ConversionError, ConversionResult};
use colldir_domain::layout::{REQUEST_FILE, RESPONSE_FILE};
use colldir_domain::{
    ChildrenOrder, Collection, CollectionInfo, CollectionNode, DirectoryEntry, EntryKind,
    EventScript, Folder, RequestItem, TopLevelField, classify, classify_all, sort_by_recorded_order,
};
use serde_json::Value;
use tracing::{debug, warn};

use super::FileSystemCollectionDirectory;
use crate::serialization::parse_document;

/// A script file found in a request directory.
struct ScriptFile {
    file_name: String,
    listen: String,
}

fn script_file_name(script: &ScriptFile) -> &str {
    &script.file_name
}

fn dir_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

impl<F: FileSystem + Clone> FileSystemCollectionDirectory<F> {
    /// Reads the collection rooted at `source`.
    pub(super) fn read_collection(&self, source: &Path) -> ConversionResult<Collection> {
        let listing = self.fs.read_dir(source)?;

        let info = match self.metadata.read_top_level(source, TopLevelField::Info)? {
            Some(value) => serde_json::from_value::<CollectionInfo>(value).map_err(|e| {
                ConversionError::InvalidMetadata {
                    path: source.join(TopLevelField::Info.file_name()),
                    message: e.to_string(),
                }
            })?,
            None => CollectionInfo::named(dir_name(source)),
        };

        let order = self.metadata.read_order(source)?;
        let items = self.read_children(source, &listing, order.as_ref())?;

        Ok(Collection {
            info,
            items,
            auth: self.metadata.read_top_level(source, TopLevelField::Auth)?,
            event: self.metadata.read_top_level(source, TopLevelField::Event)?,
            variable: self
                .metadata
                .read_top_level(source, TopLevelField::Variable)?,
        })
    }

    /// Reads every child directory of `dir`, in recorded order.
    fn read_children(
        &self,
        dir: &Path,
        listing: &[DirectoryEntry],
        order: Option<&ChildrenOrder>,
    ) -> ConversionResult<Vec<CollectionNode>> {
        let names: Vec<String> = listing
            .iter()
            .filter(|entry| classify(entry) == EntryKind::Child)
            .map(|entry| entry.name.clone())
            .collect();

        if order.is_none() && !names.is_empty() {
            warn!(path = %dir.display(), "no order recorded, using directory listing order");
        }
        let names = sort_by_recorded_order(
            names,
            order.map(|o| o.children_order.as_slice()),
            String::as_str,
        );

        names
            .into_iter()
            .map(|name| self.read_node(&dir.join(&name), name))
            .collect()
    }

    /// A directory holding `request.json` is a request; anything else is a folder.
    fn read_node(&self, dir: &Path, name: String) -> ConversionResult<CollectionNode> {
        let listing = self.fs.read_dir(dir)?;
        let entries = classify_all(&listing);

        let node = if entries
            .iter()
            .any(|(_, kind)| *kind == EntryKind::RequestPayload)
        {
            CollectionNode::Request(self.read_request(dir, name, &entries)?)
        } else {
            CollectionNode::Folder(self.read_folder(dir, name, &listing)?)
        };
        Ok(node)
    }

    fn read_folder(
        &self,
        dir: &Path,
        name: String,
        listing: &[DirectoryEntry],
    ) -> ConversionResult<Folder> {
        debug!(path = %dir.display(), "reading folder");
        let order = self.metadata.read_order(dir)?;
        let children = self.read_children(dir, listing, order.as_ref())?;

        Ok(Folder {
            name,
            description: order.and_then(|o| o.description),
            auth: self.metadata.read_top_level(dir, TopLevelField::Auth)?,
            event: self.metadata.read_top_level(dir, TopLevelField::Event)?,
            children,
        })
    }

    fn read_request(
        &self,
        dir: &Path,
        name: String,
        entries: &[(&DirectoryEntry, EntryKind)],
    ) -> ConversionResult<RequestItem> {
        debug!(path = %dir.display(), "reading request");
        let request = self.read_payload(&dir.join(REQUEST_FILE))?;
        let response = if entries
            .iter()
            .any(|(_, kind)| *kind == EntryKind::ResponsePayload)
        {
            Some(self.read_payload(&dir.join(RESPONSE_FILE))?)
        } else {
            None
        };

        let scripts: Vec<ScriptFile> = entries
            .iter()
            .filter_map(|(entry, kind)| match kind {
                EntryKind::EventScript { listen } => Some(ScriptFile {
                    file_name: entry.name.clone(),
                    listen: listen.clone(),
                }),
                _ => None,
            })
            .collect();

        let events = if scripts.is_empty() {
            Vec::new()
        } else {
            let order = self.metadata.read_event_order(dir)?;
            if order.is_none() {
                warn!(path = %dir.display(), "no event order recorded, using directory listing order");
            }
            sort_by_recorded_order(scripts, order.as_deref(), script_file_name)
                .into_iter()
                .map(|script| -> ConversionResult<EventScript> {
                    let code = self.fs.read_file_string(&dir.join(&script.file_name))?;
                    Ok(EventScript::new(script.listen, code))
                })
                .collect::<ConversionResult<Vec<_>>>()?
        };

        Ok(RequestItem {
            name,
            request,
            response,
            events,
        })
    }

    fn read_payload(&self, path: &Path) -> ConversionResult<Value> {
        let content = self.fs.read_file_string(path)?;
        parse_document(&content).map_err(|e| ConversionError::InvalidPayload {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
