use crate::store::StateStore;
use anyhow::Result;
use fjall::{Config, Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;
use tracing::debug;

/// On-disk state store: a single-partition fjall keyspace, synced after
/// every write so each mutation survives the process.
pub struct DiskStore {
    keyspace: Keyspace,
    state: PartitionHandle,
}

impl DiskStore {
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)?;

        let keyspace = Config::new(path).open()?;
        let state = keyspace.open_partition("state", PartitionCreateOptions::default())?;
        Ok(Self { keyspace, state })
    }
}

impl StateStore for DiskStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        match self.state.get(key) {
            Ok(value) => value.map(|v| v.to_vec()),
            Err(e) => {
                debug!("DiskStore get error for key {key}: {e}");
                None
            }
        }
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        self.state.insert(key, value)?;
        self.keyspace.persist(PersistMode::SyncAll)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.state.remove(key)?;
        self.keyspace.persist(PersistMode::SyncAll)?;
        Ok(())
    }
}
