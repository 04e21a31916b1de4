//! In-memory collection tree.

mod item;

pub use item::{Collection, CollectionInfo, CollectionNode, EventScript, Folder, RequestItem};
