use crate::store::StateStore;
use anyhow::Result;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory state store used by tests and as a fallback when the disk
/// store cannot be opened. Nothing outlives the process.
pub struct MemoryStore {
    inner: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.inner.read().unwrap().get(key).cloned()
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        self.inner
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.inner.write().unwrap().remove(key);
        Ok(())
    }
}
