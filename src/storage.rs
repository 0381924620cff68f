//! Storage Backends
//!
//! The game store reads and writes one string value through [`GameStorage`].
//! The browser implementation wraps `window.localStorage`; tests use an
//! in-memory map.

use wasm_bindgen::JsValue;

use crate::error::{StoreError, StoreResult};

/// Synchronous string key-value storage
pub trait GameStorage {
    /// Read the value under `key`, `None` if absent
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrite the value under `key`
    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// Browser `localStorage`.
///
/// Holds no JS handle; the storage object is looked up on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> StoreResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(js_reason(&e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl GameStorage for LocalStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(|e| StoreError::Read {
            key: key.to_string(),
            reason: js_reason(&e),
        })
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        Self::storage()?.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: js_reason(&e),
        })
    }
}

fn js_reason(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// In-memory storage with switchable failures
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    pub items: std::collections::HashMap<String, String>,
    pub fail_reads: bool,
    pub fail_writes: bool,
    /// Number of successful writes
    pub writes: usize,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut storage = Self::default();
        storage.items.insert(key.to_string(), value.to_string());
        storage
    }
}

#[cfg(test)]
impl GameStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        if self.fail_reads {
            return Err(StoreError::Read {
                key: key.to_string(),
                reason: "read refused".to_string(),
            });
        }
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        if self.fail_writes {
            return Err(StoreError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            });
        }
        self.items.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
