//! In-memory key store for tests and hosts without a config directory

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::key_store::PersistentKeyStore;

/// Key store backed by a shared in-memory map
///
/// Clones share the same map, so a test can keep a handle and observe
/// writes made through the coordinator.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryKeyStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistentKeyStore for InMemoryKeyStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.values
            .lock()
            .map_err(|e| format!("Failed to lock key store: {}", e))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
