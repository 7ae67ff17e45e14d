//! Local Storage Store
//!
//! `KeyValueStore` over `window.localStorage`. The handle is looked up on
//! every call, so the store itself holds no JS objects and is `Send + Sync`.

use studydash_core::{DomainError, DomainResult, KeyValueStore};
use wasm_bindgen::JsValue;

pub struct LocalStore;

fn js_err(context: &str, e: JsValue) -> DomainError {
    DomainError::Storage(format!("{}: {:?}", context, e))
}

fn local_storage() -> DomainResult<web_sys::Storage> {
    let win = web_sys::window().ok_or_else(|| DomainError::Storage("no window".to_string()))?;
    win.local_storage()
        .map_err(|e| js_err("localStorage unavailable", e))?
        .ok_or_else(|| DomainError::Storage("localStorage disabled".to_string()))
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        local_storage()?
            .get_item(key)
            .map_err(|e| js_err("getItem failed", e))
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| js_err("setItem failed", e))
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        local_storage()?
            .remove_item(key)
            .map_err(|e| js_err("removeItem failed", e))
    }
}
