//! JSON File Store
//!
//! Keeps the whole key-value map in one JSON object on disk. Every write
//! rewrites the file through a temporary sibling and a rename, so a crash
//! leaves either the old or the new map, never half of one.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::traits::KeyValueStore;
use crate::domain::{DomainError, DomainResult};

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open (or lazily create) the store file at `path`.
    ///
    /// A file that exists but is not a JSON object of strings is an error:
    /// discarding it would wipe every list on the next write.
    pub fn open(path: impl Into<PathBuf>) -> DomainResult<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            BTreeMap::new()
        };
        log::debug!("Opened store {} with {} keys", path.display(), entries.len());
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> DomainResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn with_entries<R>(
        &self,
        f: impl FnOnce(&mut BTreeMap<String, String>) -> R,
    ) -> DomainResult<R> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|_| DomainError::Storage("file store lock poisoned".to_string()))?;
        Ok(f(&mut guard))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        self.with_entries(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        self.with_entries(|entries| {
            let previous = entries.insert(key.to_string(), value.to_string());
            match self.flush(entries) {
                Ok(()) => Ok(()),
                Err(e) => {
                    // Keep memory and disk in agreement.
                    match previous {
                        Some(old) => entries.insert(key.to_string(), old),
                        None => entries.remove(key),
                    };
                    Err(e)
                }
            }
        })?
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        self.with_entries(|entries| match entries.remove(key) {
            Some(old) => self.flush(entries).map_err(|e| {
                entries.insert(key.to_string(), old);
                e
            }),
            None => Ok(()),
        })?
    }
}
