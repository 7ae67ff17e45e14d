//! Reorderable List Manager
//!
//! Owns one ordered sequence plus its completed counter. Every mutation
//! persists before it renders, and a failed write is rolled back so the
//! in-memory sequence never drifts from the stored one.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::drop_target::DropTarget;
use super::surface::RenderSurface;
use crate::domain::{DomainError, DomainResult};
use crate::storage::{JsonStoreExt, SharedStore};

/// Store keys for one list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListKeys {
    /// Key holding the JSON array of items
    pub items: &'static str,
    /// Key holding the completed counter, if the list tracks one
    pub completed: Option<&'static str>,
}

pub struct ReorderableList<T> {
    items: Vec<T>,
    completed: u32,
    keys: ListKeys,
    store: SharedStore,
    surface: Option<Box<dyn RenderSurface<T>>>,
}

impl<T> ReorderableList<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Load the list from the store.
    ///
    /// Missing, `null` or malformed data yields an empty list; a counter that
    /// is not a non-negative integer reads as zero.
    pub fn load(store: SharedStore, keys: ListKeys) -> Self {
        let items = match store.get_json::<Option<Vec<T>>>(keys.items) {
            Ok(Some(Some(items))) => items,
            Ok(_) => Vec::new(),
            Err(e) => {
                log::warn!("Discarding unreadable '{}' list: {}", keys.items, e);
                Vec::new()
            }
        };
        let completed = keys
            .completed
            .map(|key| load_counter(&store, key))
            .unwrap_or(0);
        log::debug!("Loaded '{}' with {} items", keys.items, items.len());
        Self {
            items,
            completed,
            keys,
            store,
            surface: None,
        }
    }

    /// Attach the surface rows are rendered to
    pub fn with_surface(mut self, surface: Box<dyn RenderSurface<T>>) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn set_surface(&mut self, surface: Box<dyn RenderSurface<T>>) {
        self.surface = Some(surface);
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed_count(&self) -> u32 {
        self.completed
    }

    pub fn keys(&self) -> ListKeys {
        self.keys
    }

    /// Add `item` at the end. Text is accepted as-is.
    pub fn append(&mut self, item: T) -> DomainResult<()> {
        self.mutate(|items, _| {
            items.push(item);
            Ok(())
        })
    }

    /// Remove the item at `index` without counting it as completed
    pub fn remove(&mut self, index: usize) -> DomainResult<T> {
        self.mutate(|items, _| {
            check_index(index, items.len())?;
            Ok(items.remove(index))
        })
    }

    /// Remove the item at `index` and bump the completed counter by one
    pub fn complete(&mut self, index: usize) -> DomainResult<T> {
        self.mutate(|items, completed| {
            check_index(index, items.len())?;
            *completed = completed.saturating_add(1);
            Ok(items.remove(index))
        })
    }

    /// Move the item at `from` to just before whatever row sat at `target`
    /// before the move. `End`, or a target past the last row, appends.
    pub fn reorder(&mut self, from: usize, target: DropTarget) -> DomainResult<()> {
        self.mutate(|items, _| {
            check_index(from, items.len())?;
            let len = items.len();
            let item = items.remove(from);
            let dest = match target {
                DropTarget::Before(to) if to < len => {
                    if to > from {
                        to - 1
                    } else {
                        to
                    }
                }
                _ => items.len(),
            };
            items.insert(dest, item);
            Ok(())
        })
    }

    /// Full-replace render of the current sequence
    pub fn render(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.render(&self.items);
        }
    }

    /// Apply `op`, persist, then render. On any error the previous state is
    /// restored in memory and in the store, and nothing is rendered.
    fn mutate<R>(
        &mut self,
        op: impl FnOnce(&mut Vec<T>, &mut u32) -> DomainResult<R>,
    ) -> DomainResult<R> {
        let snapshot = (self.items.clone(), self.completed);
        let value = match op(&mut self.items, &mut self.completed) {
            Ok(value) => value,
            Err(e) => {
                (self.items, self.completed) = snapshot;
                return Err(e);
            }
        };
        if let Err(e) = self.persist() {
            (self.items, self.completed) = snapshot;
            // The items key may already hold the new sequence
            if let Err(restore) = self.persist() {
                log::warn!("Could not restore '{}' after a failed write: {}", self.keys.items, restore);
            }
            return Err(e);
        }
        self.render();
        Ok(value)
    }

    fn persist(&self) -> DomainResult<()> {
        self.store.set_json(self.keys.items, &self.items)?;
        if let Some(key) = self.keys.completed {
            self.store.set(key, &self.completed.to_string())?;
        }
        Ok(())
    }
}

fn check_index(index: usize, len: usize) -> DomainResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(DomainError::IndexOutOfRange { index, len })
    }
}

fn load_counter(store: &SharedStore, key: &str) -> u32 {
    match store.get(key) {
        Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Counter '{}' holds '{}', treating as 0", key, raw);
            0
        }),
        Ok(None) => 0,
        Err(e) => {
            log::warn!("Could not read counter '{}': {}", key, e);
            0
        }
    }
}
