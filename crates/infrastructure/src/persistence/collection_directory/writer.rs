//! Tree serializer: collection to directories.

use std::path::{Path, PathBuf};

use colldir_application::ports::{FileSystem, MetadataStore};
use colldir_application::{ConversionError, ConversionResult, create_directory};
use colldir_domain::layout::{REQUEST_FILE, RESPONSE_FILE};
use colldir_domain::{
    Collection, CollectionNode, DomainError, ExportOptions, ExportPlan, Folder, NodePath,
    RequestItem, TopLevelField,
};
use serde_json::Value;
use tracing::{debug, warn};

use super::FileSystemCollectionDirectory;
use crate::serialization::render_document;

impl<F: FileSystem + Clone> FileSystemCollectionDirectory<F> {
    /// Writes the whole collection under `destination`.
    pub(super) fn write_collection(
        &self,
        collection: &Collection,
        destination: &Path,
        options: ExportOptions,
    ) -> ConversionResult<PathBuf> {
        // Every name is resolved up front so a bad one fails before any write.
        let plan = ExportPlan::build(collection, options)?;

        let root = destination.join(plan.root_name());
        create_directory(&self.fs, &root)?;
        debug!(path = %root.display(), "created collection directory");

        let info = serde_json::to_value(&collection.info).map_err(|e| {
            ConversionError::Serialization {
                path: root.join(TopLevelField::Info.file_name()),
                message: e.to_string(),
            }
        })?;
        self.metadata
            .write_top_level(&root, TopLevelField::Info, &info)?;
        self.write_optional_fields(
            &root,
            &[
                (TopLevelField::Auth, collection.auth.as_ref()),
                (TopLevelField::Event, collection.event.as_ref()),
                (TopLevelField::Variable, collection.variable.as_ref()),
            ],
        )?;

        self.write_children(&root, &collection.items, &NodePath::root(), None, &plan)?;
        Ok(root)
    }

    fn write_optional_fields(
        &self,
        dir: &Path,
        fields: &[(TopLevelField, Option<&Value>)],
    ) -> ConversionResult<()> {
        for (field, value) in fields {
            if let Some(value) = value {
                self.metadata.write_top_level(dir, *field, value)?;
            }
        }
        Ok(())
    }

    /// Writes each child in source order, then the order sidecar.
    fn write_children(
        &self,
        dir: &Path,
        children: &[CollectionNode],
        parent: &NodePath,
        description: Option<&str>,
        plan: &ExportPlan,
    ) -> ConversionResult<()> {
        let mut order = Vec::with_capacity(children.len());

        for (index, child) in children.iter().enumerate() {
            let path = parent.child(index);
            let name = plan
                .name_of(&path)
                .ok_or_else(|| DomainError::ReservedName {
                    name: child.name().to_string(),
                })?;
            let child_dir = dir.join(name);

            match child {
                CollectionNode::Folder(folder) => {
                    self.write_folder(&child_dir, folder, &path, plan)?;
                }
                CollectionNode::Request(request) => {
                    self.write_request(&child_dir, request, plan.script_files_of(&path))?;
                }
            }
            order.push(name.to_string());
        }

        self.metadata.write_order(dir, &order, description)
    }

    fn write_folder(
        &self,
        dir: &Path,
        folder: &Folder,
        path: &NodePath,
        plan: &ExportPlan,
    ) -> ConversionResult<()> {
        create_directory(&self.fs, dir)?;
        debug!(path = %dir.display(), children = folder.children.len(), "writing folder");

        self.write_optional_fields(
            dir,
            &[
                (TopLevelField::Auth, folder.auth.as_ref()),
                (TopLevelField::Event, folder.event.as_ref()),
            ],
        )?;
        self.write_children(
            dir,
            &folder.children,
            path,
            folder.description.as_deref(),
            plan,
        )
    }

    /// Writes a request directory; on failure the directory is removed again.
    fn write_request(
        &self,
        dir: &Path,
        request: &RequestItem,
        script_files: &[String],
    ) -> ConversionResult<()> {
        create_directory(&self.fs, dir)?;
        debug!(path = %dir.display(), scripts = request.events.len(), "writing request");

        if let Err(e) = self.write_request_files(dir, request, script_files) {
            if let Err(cleanup) = self.fs.remove_dir_all(dir) {
                warn!(path = %dir.display(), error = %cleanup, "could not remove partial request");
            }
            return Err(e);
        }
        Ok(())
    }

    fn write_request_files(
        &self,
        dir: &Path,
        request: &RequestItem,
        script_files: &[String],
    ) -> ConversionResult<()> {
        self.write_payload(&dir.join(REQUEST_FILE), &request.request)?;
        if let Some(response) = &request.response {
            self.write_payload(&dir.join(RESPONSE_FILE), response)?;
        }

        if request.events.is_empty() {
            return Ok(());
        }
        for (event, file_name) in request.events.iter().zip(script_files) {
            self.fs
                .write_file(&dir.join(file_name), event.code.as_bytes())?;
        }
        self.metadata.write_event_order(dir, script_files)
    }

    fn write_payload(&self, path: &Path, value: &Value) -> ConversionResult<()> {
        let json = render_document(value).map_err(|e| ConversionError::Serialization {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        self.fs.write_file(path, json.as_bytes())?;
        Ok(())
    }
}
