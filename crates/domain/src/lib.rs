//! Colldir Domain - Core types
//!
//! This crate defines the collection tree and the pure rules that map it
//! onto a directory layout. All types here are pure Rust with no I/O.

pub mod collection;
pub mod error;
pub mod export_plan;
pub mod layout;
pub mod naming;
pub mod ordering;
pub mod sidecar;

pub use collection::{Collection, CollectionInfo, CollectionNode, EventScript, Folder, RequestItem};
pub use error::{DomainError, DomainResult};
pub use export_plan::{ExportOptions, ExportPlan, NodePath};
pub use layout::{DirectoryEntry, EntryKind, classify, classify_all};
pub use naming::{COPY_SUFFIX, SEPARATOR_TOKEN, sanitize};
pub use ordering::sort_by_recorded_order;
pub use sidecar::{ChildrenOrder, EventOrder, TopLevelField};
