//! In-memory secret store for testing.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::Error;

use super::SecretStore;

/// In-memory secret store for testing purposes.
///
/// Behaves like the OS keychain without touching it: values persist for the
/// life of the store, and deleting an absent entry succeeds.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("entry lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SecretStore for MemoryStore {
    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut entries = self.entries.lock().expect("entry lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let entries = self.entries.lock().expect("entry lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn delete(&self, key: &str) -> Result<(), Error> {
        let mut entries = self.entries.lock().expect("entry lock poisoned");
        entries.remove(key);
        Ok(())
    }
}
