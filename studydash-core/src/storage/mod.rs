//! Storage Layer
//!
//! String-keyed persistence for the dashboard.
//! Implementations can be in-memory, a JSON file, browser local storage, etc.

mod json_file;
pub mod keys;
mod memory;
mod traits;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::{JsonStoreExt, KeyValueStore, SharedStore};
