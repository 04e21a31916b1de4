//! Collection item types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A script bound to a request lifecycle event (e.g. `prerequest`, `test`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventScript {
    /// Event kind the script listens to.
    pub listen: String,
    /// Raw script source.
    pub code: String,
}

impl EventScript {
    /// Creates a new event script.
    #[must_use]
    pub fn new(listen: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            listen: listen.into(),
            code: code.into(),
        }
    }
}

/// A folder containing requests and other folders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Folder name
    pub name: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Folder-level auth, kept verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<Value>,
    /// Folder-level events, kept verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<Value>,
    /// Items in this folder, in display order
    #[serde(default)]
    pub children: Vec<CollectionNode>,
}

impl Folder {
    /// Creates a new empty folder.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            auth: None,
            event: None,
            children: Vec::new(),
        }
    }

    /// Sets the folder description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a child node.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<CollectionNode>) -> Self {
        self.children.push(child.into());
        self
    }
}

/// A leaf request with its payloads and scripts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestItem {
    /// Request name
    pub name: String,
    /// Request payload (method, url, headers, body...), kept verbatim
    pub request: Value,
    /// Saved responses, kept verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    /// Event scripts in execution order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventScript>,
}

impl RequestItem {
    /// Creates a request with the given payload and no response or scripts.
    #[must_use]
    pub fn new(name: impl Into<String>, request: Value) -> Self {
        Self {
            name: name.into(),
            request,
            response: None,
            events: Vec::new(),
        }
    }

    /// Sets the response payload.
    #[must_use]
    pub fn with_response(mut self, response: Value) -> Self {
        self.response = Some(response);
        self
    }

    /// Appends an event script.
    #[must_use]
    pub fn with_event(mut self, event: EventScript) -> Self {
        self.events.push(event);
        self
    }
}

/// An item in a collection (either a folder or a request).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CollectionNode {
    /// A folder containing other items
    Folder(Folder),
    /// A request
    Request(RequestItem),
}

impl CollectionNode {
    /// Returns the name of this item.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Folder(f) => &f.name,
            Self::Request(r) => &r.name,
        }
    }

    /// Returns the child items, empty for requests.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Folder(f) => &f.children,
            Self::Request(_) => &[],
        }
    }
}

impl From<Folder> for CollectionNode {
    fn from(folder: Folder) -> Self {
        Self::Folder(folder)
    }
}

impl From<RequestItem> for CollectionNode {
    fn from(request: RequestItem) -> Self {
        Self::Request(request)
    }
}

/// The `info` block of a collection.
///
/// Only `name` is interpreted; every other field is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionInfo {
    /// Collection name, also used as the export directory name
    pub name: String,
    /// Remaining info fields (`_postman_id`, `schema`, `description`...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CollectionInfo {
    /// Creates an info block holding only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }
}

/// The root of a collection tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection metadata
    pub info: CollectionInfo,
    /// Top-level items, in display order
    #[serde(default)]
    pub items: Vec<CollectionNode>,
    /// Collection-level auth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<Value>,
    /// Collection-level events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<Value>,
    /// Collection variables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<Value>,
}

impl Collection {
    /// Creates a new empty collection.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            info: CollectionInfo::named(name),
            items: Vec::new(),
            auth: None,
            event: None,
            variable: None,
        }
    }

    /// Returns the collection name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Appends a top-level item.
    #[must_use]
    pub fn with_item(mut self, item: impl Into<CollectionNode>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Counts folders and requests anywhere in the tree.
    #[must_use]
    pub fn count_nodes(&self) -> (usize, usize) {
        fn walk(nodes: &[CollectionNode], folders: &mut usize, requests: &mut usize) {
            for node in nodes {
                match node {
                    CollectionNode::Folder(f) => {
                        *folders += 1;
                        walk(&f.children, folders, requests);
                    }
                    CollectionNode::Request(_) => *requests += 1,
                }
            }
        }

        let (mut folders, mut requests) = (0, 0);
        walk(&self.items, &mut folders, &mut requests);
        (folders, requests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_name_and_children() {
        let folder = Folder::new("Users").with_child(RequestItem::new("List", json!({})));
        let node = CollectionNode::from(folder);

        assert_eq!(node.name(), "Users");
        assert_eq!(node.children().len(), 1);
        assert!(node.children()[0].children().is_empty());
    }

    #[test]
    fn test_count_nodes() {
        let collection = Collection::new("API")
            .with_item(
                Folder::new("A")
                    .with_child(RequestItem::new("r1", json!({})))
                    .with_child(Folder::new("B").with_child(RequestItem::new("r2", json!({})))),
            )
            .with_item(RequestItem::new("r3", json!({})));

        assert_eq!(collection.count_nodes(), (2, 3));
    }

    #[test]
    fn test_info_keeps_extra_fields() {
        let info: CollectionInfo = serde_json::from_value(json!({
            "name": "API",
            "_postman_id": "abc",
            "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
        }))
        .expect("info should parse");

        assert_eq!(info.name, "API");
        assert_eq!(info.extra["_postman_id"], "abc");

        let back = serde_json::to_value(&info).expect("info should serialize");
        assert_eq!(back["schema"], info.extra["schema"]);
    }
}
