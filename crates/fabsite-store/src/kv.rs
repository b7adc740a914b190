//! Key-value storage with automatic serialization.
//!
//! [`Storage`] mirrors the browser's local storage: string keys mapped to
//! string values, written whole. [`Cache`] layers JSON encoding on top of
//! any storage backend.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::StoreError;
use serde::{de::DeserializeOwned, Serialize};

/// A string-keyed, string-valued store.
///
/// Methods take `&self`: handles are shared between the stores of one page
/// and all access happens on a single thread.
pub trait Storage: fmt::Debug {
    /// Get the raw value for a key.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the raw value for a key.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;

    /// All keys currently present, in sorted order.
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}

/// In-memory storage, used by tests and as the fallback backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-filled with raw entries.
    pub fn with_items<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            items: RefCell::new(
                items
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.items.borrow().keys().cloned().collect())
    }
}

/// Storage persisted to a single JSON file.
///
/// The whole key map is rewritten on every mutation, so two processes
/// sharing one file race with last-write-wins semantics.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: RefCell<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Open a file-backed storage.
    ///
    /// A missing file starts empty. A file that cannot be parsed also starts
    /// empty; it is overwritten on the next write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let items = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "storage file is corrupt, starting empty");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(StoreError::OpenError(format!("{}: {}", path.display(), e)));
            }
        };

        Ok(Self {
            path,
            items: RefCell::new(items),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the next snapshot is written to before it replaces the
    /// backing file.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&*self.items.borrow())?;
        let tmp = self.temp_path();
        std::fs::write(&tmp, content)?;
        if let Err(e) = std::fs::rename(&tmp, &self.path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        let removed = self.items.borrow_mut().remove(key).is_some();
        if removed {
            self.flush()?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.items.borrow().keys().cloned().collect())
    }
}

/// Type-safe cache over a shared [`Storage`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone)]
pub struct Cache {
    storage: Rc<dyn Storage>,
}

impl Cache {
    /// Wrap a shared storage handle.
    pub fn new(storage: Rc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Cache over a fresh in-memory storage.
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::new()))
    }

    /// The underlying storage handle.
    pub fn storage(&self) -> &Rc<dyn Storage> {
        &self.storage
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist and an error if the stored
    /// text is not valid JSON for `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.storage.get_item(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.storage.set_item(key, &raw)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.storage.remove_item(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.storage.get_item(key)?.is_some())
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        self.storage.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_roundtrip() {
        let cache = Cache::in_memory();
        cache.set("favorites", &vec!["a", "b"]).unwrap();

        let got: Option<Vec<String>> = cache.get("favorites").unwrap();
        assert_eq!(got, Some(vec!["a".to_string(), "b".to_string()]));
        assert!(cache.exists("favorites").unwrap());
    }

    #[test]
    fn test_missing_key() {
        let cache = Cache::in_memory();
        let got: Option<Vec<String>> = cache.get("cart").unwrap();
        assert!(got.is_none());
        assert!(!cache.exists("cart").unwrap());
    }

    #[test]
    fn test_malformed_value_is_error() {
        let storage = MemoryStorage::with_items([("cart", "{not json")]);
        let cache = Cache::new(Rc::new(storage));
        let got: Result<Option<Vec<String>>, _> = cache.get("cart");
        assert!(matches!(got, Err(StoreError::SerializeError(_))));
    }

    #[test]
    fn test_delete() {
        let cache = Cache::in_memory();
        cache.set("catalogView", "list").unwrap();
        cache.delete("catalogView").unwrap();
        assert!(!cache.exists("catalogView").unwrap());
        // Deleting twice is fine
        cache.delete("catalogView").unwrap();
    }

    #[test]
    fn test_file_storage_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("storage.json");

        {
            let storage = FileStorage::open(&path).unwrap();
            storage.set_item("catalogView", "\"list\"").unwrap();
        }

        let storage = FileStorage::open(&path).unwrap();
        assert_eq!(
            storage.get_item("catalogView").unwrap().as_deref(),
            Some("\"list\"")
        );
        assert_eq!(storage.keys().unwrap(), vec!["catalogView".to_string()]);
    }

    #[test]
    fn test_file_storage_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "[[[").unwrap();

        let storage = FileStorage::open(&path).unwrap();
        assert!(storage.keys().unwrap().is_empty());

        storage.set_item("cart", "[]").unwrap();
        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get_item("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_storage_replaces_file_whole() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let storage = FileStorage::open(&path).unwrap();
        storage.set_item("cart", "[]").unwrap();
        storage.set_item("favorites", "[\"pvd-200\"]").unwrap();
        storage.remove_item("cart").unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("storage.json")]);

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.keys().unwrap(), vec!["favorites".to_string()]);
    }
}
