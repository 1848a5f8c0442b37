//! Storage adapters behind the repository traits.

pub mod catalog_json;
pub mod json_file;
pub mod memory;
pub mod scores_json;

pub use catalog_json::JsonFileCatalog;
pub use memory::{InMemoryCatalog, InMemoryLedger};
pub use scores_json::JsonFileLedger;
