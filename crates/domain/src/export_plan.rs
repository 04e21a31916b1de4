//! Export-name planning.
//!
//! Resolves the on-disk name of every node before anything is written. The
//! caller's tree is never touched: renamed siblings exist only in the plan,
//! keyed by the node's index path.

use std::collections::HashMap;

use crate::collection::{Collection, CollectionNode};
use crate::error::DomainResult;
use crate::layout::{event_script_file_names, sidecar_file_names};
use crate::naming::{SiblingNames, to_segment};

/// Options controlling how names are turned into path segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Replace `/` in names with the sentinel token instead of failing.
    pub substitute_separators: bool,
}

/// Index path of a node from the collection root (`[]` is the root itself).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// The root path.
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Path of the `index`-th child of this node.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Depth below the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

/// Resolved names for one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPlan {
    root_name: String,
    names: HashMap<NodePath, String>,
    script_files: HashMap<NodePath, Vec<String>>,
}

impl ExportPlan {
    /// Resolves every name in `collection`.
    ///
    /// # Errors
    ///
    /// Returns the first unusable name found, before anything is written.
    pub fn build(collection: &Collection, options: ExportOptions) -> DomainResult<Self> {
        let mut plan = Self {
            root_name: to_segment(collection.name(), options.substitute_separators)?,
            names: HashMap::new(),
            script_files: HashMap::new(),
        };
        plan.plan_children(&collection.items, &NodePath::root(), options)?;
        Ok(plan)
    }

    fn plan_children(
        &mut self,
        children: &[CollectionNode],
        parent: &NodePath,
        options: ExportOptions,
    ) -> DomainResult<()> {
        // A child may not shadow a sidecar written next to it.
        let mut siblings = SiblingNames::with_reserved(sidecar_file_names());
        for (index, child) in children.iter().enumerate() {
            let path = parent.child(index);
            let segment = to_segment(child.name(), options.substitute_separators)?;
            let name = siblings.claim(segment);

            match child {
                CollectionNode::Folder(folder) => {
                    self.plan_children(&folder.children, &path, options)?;
                }
                CollectionNode::Request(request) => {
                    let files =
                        event_script_file_names(&request.events, options.substitute_separators)?;
                    self.script_files.insert(path.clone(), files);
                }
            }
            self.names.insert(path, name);
        }
        Ok(())
    }

    /// Directory name of the collection root.
    #[must_use]
    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    /// Directory name of the node at `path`.
    #[must_use]
    pub fn name_of(&self, path: &NodePath) -> Option<&str> {
        self.names.get(path).map(String::as_str)
    }

    /// Script file names of the request at `path`, in script order.
    #[must_use]
    pub fn script_files_of(&self, path: &NodePath) -> &[String] {
        self.script_files.get(path).map(Vec::as_slice).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{EventScript, Folder, RequestItem};
    use crate::error::DomainError;
    use serde_json::json;

    fn request(name: &str) -> RequestItem {
        RequestItem::new(name, json!({ "method": "GET" }))
    }

    #[test]
    fn test_duplicate_siblings_get_copy_suffix() {
        let collection = Collection::new("API")
            .with_item(request("Foo"))
            .with_item(request("Foo"));

        let plan = ExportPlan::build(&collection, ExportOptions::default())
            .expect("plan should build");

        assert_eq!(plan.root_name(), "API");
        assert_eq!(plan.name_of(&NodePath::root().child(0)), Some("Foo"));
        assert_eq!(plan.name_of(&NodePath::root().child(1)), Some("Foo-copy"));
        // The source tree is untouched.
        assert_eq!(collection.items[1].name(), "Foo");
    }

    #[test]
    fn test_same_name_in_different_parents_is_not_a_collision() {
        let collection = Collection::new("API")
            .with_item(Folder::new("A").with_child(request("List")))
            .with_item(Folder::new("B").with_child(request("List")));

        let plan = ExportPlan::build(&collection, ExportOptions::default())
            .expect("plan should build");

        assert_eq!(plan.name_of(&NodePath::root().child(0).child(0)), Some("List"));
        assert_eq!(plan.name_of(&NodePath::root().child(1).child(0)), Some("List"));
    }

    #[test]
    fn test_nested_separator_fails_whole_plan() {
        let collection = Collection::new("API")
            .with_item(Folder::new("ok").with_child(request("a/b")));

        let err = ExportPlan::build(&collection, ExportOptions::default())
            .expect_err("separator should be rejected");
        assert_eq!(
            err,
            DomainError::SeparatorInName {
                name: "a/b".to_string()
            }
        );
    }

    #[test]
    fn test_root_name_is_sanitized() {
        let collection = Collection::new("v1/v2");
        let options = ExportOptions {
            substitute_separators: true,
        };
        let plan = ExportPlan::build(&collection, options).expect("plan should build");
        assert_eq!(plan.root_name(), "v1_slash_v2");
    }

    #[test]
    fn test_script_files_are_planned() {
        let collection = Collection::new("API").with_item(
            request("Login")
                .with_event(EventScript::new("prerequest", "X"))
                .with_event(EventScript::new("test", "Y")),
        );
        let plan = ExportPlan::build(&collection, ExportOptions::default())
            .expect("plan should build");
        let path = NodePath::root().child(0);

        assert_eq!(
            plan.script_files_of(&path),
            ["event.prerequest.js", "event.test.js"]
        );
        assert!(plan.script_files_of(&NodePath::root()).is_empty());
        assert_eq!(path.depth(), 1);
    }

    #[test]
    fn test_children_named_like_sidecars_are_renamed() {
        let collection = Collection::new("API")
            .with_item(request(".order.json"))
            .with_item(request(".auth.json"))
            .with_item(Folder::new("nested").with_child(request(".variable.json")))
            .with_item(request(".event-order.json"));

        let plan = ExportPlan::build(&collection, ExportOptions::default())
            .expect("plan should build");

        let root = NodePath::root();
        assert_eq!(plan.name_of(&root.child(0)), Some(".order.json-copy"));
        assert_eq!(plan.name_of(&root.child(1)), Some(".auth.json-copy"));
        assert_eq!(
            plan.name_of(&root.child(2).child(0)),
            Some(".variable.json-copy")
        );
        // Only request directories hold the event-order sidecar.
        assert_eq!(plan.name_of(&root.child(3)), Some(".event-order.json"));
    }
}
