//! Durable key-value storage behind the task store.
//!
//! The persistence contract is deliberately tiny: get or set one named
//! string value, synchronously, replacing any prior value. `LocalStorage`
//! keeps each key as a file in the platform data directory; `MemoryStorage`
//! backs tests and throwaway sessions.

use super::data_storage::DataStorage;
use anyhow::Result;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// A durable, synchronous string-per-key store.
pub trait Storage {
    /// Returns the stored value for `key`, or `None` if never set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Durably stores `value` under `key`, replacing any prior value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed storage: one file per key inside the application data
/// directory. Shared only with other invocations of this same process;
/// two processes writing concurrently can overwrite each other.
pub struct LocalStorage {
    dir: PathBuf,
}

impl LocalStorage {
    pub fn new() -> Result<Self> {
        Ok(Self { dir: DataStorage::new().dir()? })
    }

    pub fn with_dir(dir: PathBuf) -> Result<Self> {
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-memory storage with the same contract. Nothing survives the
/// process; useful for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
