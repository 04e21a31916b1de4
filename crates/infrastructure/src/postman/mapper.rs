//! Mapping between Postman items and the collection tree.

use colldir_domain::{Collection, CollectionNode, EventScript, Folder, RequestItem};
use serde_json::{Value, json};

use super::codec::PostmanError;
use super::types::{
    PostmanCollection, PostmanDescription, PostmanEvent, PostmanExec, PostmanItem, SCHEMA_V21,
};

const SCRIPT_TYPE: &str = "text/javascript";

/// Converts a parsed Postman collection into a collection tree.
///
/// # Errors
///
/// Returns [`PostmanError::InvalidFormat`] if a request's `event` list is not
/// a list of Postman events.
pub fn from_postman(collection: PostmanCollection) -> Result<Collection, PostmanError> {
    let items = collection
        .item
        .into_iter()
        .map(map_item)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Collection {
        info: collection.info,
        items,
        auth: collection.auth,
        event: collection.event,
        variable: collection.variable,
    })
}

fn map_item(item: PostmanItem) -> Result<CollectionNode, PostmanError> {
    let PostmanItem {
        name,
        description,
        item: children,
        request,
        response,
        event,
        auth,
    } = item;

    if let Some(children) = children {
        let children = children
            .into_iter()
            .map(map_item)
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(CollectionNode::Folder(Folder {
            name,
            description: description.map(PostmanDescription::into_text),
            auth,
            event,
            children,
        }));
    }

    let events = match event {
        Some(value) => map_events(&name, value)?,
        None => Vec::new(),
    };
    Ok(CollectionNode::Request(RequestItem {
        name,
        request: request.unwrap_or(Value::Null),
        response,
        events,
    }))
}

fn map_events(item_name: &str, value: Value) -> Result<Vec<EventScript>, PostmanError> {
    let events: Vec<PostmanEvent> = serde_json::from_value(value)
        .map_err(|e| PostmanError::InvalidFormat(format!("events of {item_name:?}: {e}")))?;

    Ok(events
        .into_iter()
        .map(|event| {
            let code = event
                .script
                .map(|script| script.exec.into_source())
                .unwrap_or_default();
            EventScript::new(event.listen, code)
        })
        .collect())
}

/// Converts a collection tree into a Postman collection.
///
/// Script code is split into one `exec` element per line.
#[must_use]
pub fn to_postman(collection: &Collection) -> PostmanCollection {
    let mut info = collection.info.clone();
    info.extra
        .entry("schema")
        .or_insert_with(|| Value::String(SCHEMA_V21.to_string()));

    PostmanCollection {
        info,
        item: collection.items.iter().map(unmap_node).collect(),
        auth: collection.auth.clone(),
        event: collection.event.clone(),
        variable: collection.variable.clone(),
    }
}

fn unmap_node(node: &CollectionNode) -> PostmanItem {
    match node {
        CollectionNode::Folder(folder) => PostmanItem {
            name: folder.name.clone(),
            description: folder.description.clone().map(PostmanDescription::Text),
            item: Some(folder.children.iter().map(unmap_node).collect()),
            request: None,
            response: None,
            event: folder.event.clone(),
            auth: folder.auth.clone(),
        },
        CollectionNode::Request(request) => PostmanItem {
            name: request.name.clone(),
            description: None,
            item: None,
            request: (!request.request.is_null()).then(|| request.request.clone()),
            response: request.response.clone(),
            event: (!request.events.is_empty()).then(|| unmap_events(&request.events)),
            auth: None,
        },
    }
}

fn unmap_events(events: &[EventScript]) -> Value {
    events
        .iter()
        .map(|event| {
            json!({
                "listen": event.listen,
                "script": { "type": SCRIPT_TYPE, "exec": PostmanExec::from_source(&event.code) },
            })
        })
        .collect()
}
