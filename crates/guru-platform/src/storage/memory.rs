use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use guru_common::PlatformError;

use super::KeyValueStore;

/// In-process slots. Clones share the same map, so a caller can keep a handle
/// to inspect what another owner wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one slot.
    pub fn with_slot(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.lock().insert(key.to_string(), value.to_string());
        store
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a valid map.
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PlatformError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PlatformError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PlatformError> {
        self.lock().remove(key);
        Ok(())
    }
}
