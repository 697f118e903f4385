use crate::token_store::{TokenStore, error::Result as StoreErrorResult, storage_key::StorageKey};

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Session state held in process memory only.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    values: RwLock<HashMap<StorageKey, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: StorageKey) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }

    fn put(&self, key: StorageKey, value: &str) -> StoreErrorResult<()> {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> StoreErrorResult<()> {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&key);
        Ok(())
    }
}
