//! Application use cases (conversion orchestration).

mod export_collection;
mod import_collection;

pub use export_collection::*;
pub use import_collection::*;
