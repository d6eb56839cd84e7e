/// Key-value storage backends for extension settings

use crate::browser;
use async_trait::async_trait;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage bridge failed: {0}")]
    Bridge(String),

    #[error("Failed to decode storage: {0}")]
    Decode(String),
}

/// Asynchronous string key-value store
///
/// `get` returns only the keys that are present. `set` applies all entries
/// at once or none of them.
#[async_trait(?Send)]
pub trait KeyValueStore {
    async fn get(&self, keys: &[&str]) -> Result<HashMap<String, String>, StorageError>;

    async fn set(&self, entries: &[(&str, &str)]) -> Result<(), StorageError>;
}

/// `chrome.storage.sync`, shared across the user's signed-in browsers
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeSyncStore;

#[async_trait(?Send)]
impl KeyValueStore for ChromeSyncStore {
    async fn get(&self, keys: &[&str]) -> Result<HashMap<String, String>, StorageError> {
        let keys_js = serde_wasm_bindgen::to_value(keys)
            .map_err(|e| StorageError::Decode(format!("{:?}", e)))?;

        let result_js = browser::get_sync_storage(keys_js)
            .await
            .map_err(|e| StorageError::Bridge(format!("{:?}", e)))?;

        if result_js.is_null() || result_js.is_undefined() {
            return Ok(HashMap::new());
        }

        let values: HashMap<String, serde_json::Value> = serde_wasm_bindgen::from_value(result_js)
            .map_err(|e| StorageError::Decode(format!("{:?}", e)))?;

        // Values written by other versions may not be strings; treat them as absent
        Ok(values
            .into_iter()
            .filter_map(|(key, value)| match value {
                serde_json::Value::String(s) => Some((key, s)),
                _ => None,
            })
            .collect())
    }

    async fn set(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        let items: HashMap<&str, &str> = entries.iter().copied().collect();
        // chrome.storage expects a plain object, not a JS Map
        let items_js = items
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| StorageError::Decode(format!("{:?}", e)))?;

        browser::set_sync_storage(items_js)
            .await
            .map_err(|e| StorageError::Bridge(format!("{:?}", e)))
    }
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

#[async_trait(?Send)]
impl KeyValueStore for MemoryStore {
    async fn get(&self, keys: &[&str]) -> Result<HashMap<String, String>, StorageError> {
        let entries = self.entries.borrow();
        Ok(keys
            .iter()
            .filter_map(|key| entries.get(*key).map(|value| (key.to_string(), value.clone())))
            .collect())
    }

    async fn set(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        let mut stored = self.entries.borrow_mut();
        for (key, value) in entries {
            stored.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }
}
