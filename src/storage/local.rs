use crate::error::Result;
use crate::storage::traits::SyncStore;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Synchronous store persisted as a flat JSON object of strings.
///
/// The whole object is loaded on open and rewritten on every mutation, with
/// the lock held, on the calling thread.
pub struct LocalStorage {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl LocalStorage {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match std::fs::read(&path) {
            Ok(contents) => serde_json::from_slice(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_vec_pretty(entries)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl SyncStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write();
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStorage::open(dir.path().join("localStorage.json")).unwrap();

        assert_eq!(store.get("deviceId").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_set_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("localStorage.json");

        let store = LocalStorage::open(&path).unwrap();
        store.set("deviceId", "abc").unwrap();
        assert_eq!(store.get("deviceId").unwrap(), Some("abc".to_string()));

        let reopened = LocalStorage::open(&path).unwrap();
        assert_eq!(reopened.get("deviceId").unwrap(), Some("abc".to_string()));
    }

    #[test]
    fn test_remove() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("localStorage.json");

        let store = LocalStorage::open(&path).unwrap();
        store.set("deviceId", "abc").unwrap();
        store.set("other", "kept").unwrap();
        store.remove("deviceId").unwrap();
        // Removing twice is fine
        store.remove("deviceId").unwrap();

        let reopened = LocalStorage::open(&path).unwrap();
        assert_eq!(reopened.get("deviceId").unwrap(), None);
        assert_eq!(reopened.get("other").unwrap(), Some("kept".to_string()));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("localStorage.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(LocalStorage::open(&path).is_err());
    }
}
