//! Key-value store persisted as a single JSON object on disk
//!
//! The whole file is read once at open. Every `set`/`remove` rewrites it
//! atomically; the in-memory map only changes after the write lands.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;
use tracing::debug;

use crate::error::{TallyError, TallyResult};

use super::file_io::{read_json, write_json_atomic};
use super::KeyValueStore;

/// File-backed key-value store
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`
    ///
    /// A missing file yields an empty store. A file that exists but is not a
    /// JSON object of strings is a `StorageRead` error.
    pub fn open(path: impl Into<PathBuf>) -> TallyResult<Self> {
        let path = path.into();
        let entries: BTreeMap<String, String> = read_json(&path)?;
        debug!(path = %path.display(), keys = entries.len(), "opened key-value store");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, snapshot: BTreeMap<String, String>) -> TallyResult<()> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_json_atomic(&path, &snapshot))
            .await
            .map_err(|e| TallyError::StorageWrite(format!("Write task failed: {}", e)))?
    }
}

impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> TallyResult<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> TallyResult<()> {
        let mut entries = self.entries.lock().await;

        let mut snapshot = entries.clone();
        snapshot.insert(key.to_string(), value);
        self.persist(snapshot.clone()).await?;

        *entries = snapshot;
        Ok(())
    }

    async fn remove(&self, key: &str) -> TallyResult<()> {
        let mut entries = self.entries.lock().await;
        if !entries.contains_key(key) {
            return Ok(());
        }

        let mut snapshot = entries.clone();
        snapshot.remove(key);
        self.persist(snapshot.clone()).await?;

        *entries = snapshot;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(temp_dir.path().join("store.json")).unwrap();
        assert_eq!(store.get("theme").await.unwrap(), None);
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.set("theme", "dark".to_string()).await.unwrap();
        store.set("language", "English".to_string()).await.unwrap();
        store.remove("language").await.unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").await.unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("language").await.unwrap(), None);
        assert!(!temp_dir.path().join("store.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_remove_missing_key_does_not_create_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.remove("storedPassword").await.unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_open_corrupt_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let result = JsonFileStore::open(&path);
        assert!(matches!(result, Err(TallyError::StorageRead(_))));
    }
}
