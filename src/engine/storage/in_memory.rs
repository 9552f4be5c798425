use std::collections::HashMap;
use std::sync::Mutex;
use anyhow::{anyhow, Result};
use crate::engine::storage::area::PreferenceStore;

/// In-memory preference store (no persistence).
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    map: Mutex<HashMap<String, String>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.map.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.map
            .lock()
            .map_err(|_| anyhow!("preference map poisoned"))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.map
            .lock()
            .map_err(|_| anyhow!("preference map poisoned"))?
            .remove(key);
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        let Ok(map) = self.map.lock() else {
            return vec![];
        };
        let mut v: Vec<String> = map.keys().cloned().collect();
        v.sort_unstable();
        v
    }
}
