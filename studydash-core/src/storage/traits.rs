//! Storage Layer - Core Traits
//!
//! Defines the abstract key-value interface every front end plugs into.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::DomainResult;

/// Persisted string-to-string mapping
///
/// All operations are synchronous; writes are durable once they return.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`
    fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> DomainResult<()>;

    /// Delete `key`; missing keys are not an error
    fn remove(&self, key: &str) -> DomainResult<()>;
}

/// Store handle shared by every list of the dashboard
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Extension for stores that hold JSON documents
pub trait JsonStoreExt {
    /// Read and decode the value under `key`
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> DomainResult<Option<T>>;

    /// Encode and write `value` under `key`
    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> DomainResult<()>;
}

impl<S: KeyValueStore + ?Sized> JsonStoreExt for S {
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> DomainResult<Option<T>> {
        match self.get(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(None),
        }
    }

    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> DomainResult<()> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}
