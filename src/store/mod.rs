pub mod disk;
pub mod memory;

use anyhow::Result;
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

/// The small key-value persistence seam behind the history log and theme
/// preference. Reads never fail: an unreadable key is an absent key.
pub trait StateStore: Send + Sync {
    fn get(&self, key: &str) -> Option<Vec<u8>>;
    fn put(&self, key: &str, value: &[u8]) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Reads and decodes a JSON value. Undecodable bytes are treated as absent.
pub fn get_json<T: DeserializeOwned>(store: &dyn StateStore, key: &str) -> Option<T> {
    let bytes = store.get(key)?;
    match serde_json::from_slice(&bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("Ignoring undecodable value for key {key}: {e}");
            None
        }
    }
}

/// Encodes and writes a JSON value.
pub fn put_json<T: Serialize>(store: &dyn StateStore, key: &str, value: &T) -> Result<()> {
    store.put(key, &serde_json::to_vec(value)?)
}
