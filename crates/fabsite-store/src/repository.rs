//! Whole-collection repositories over the cache.

use std::marker::PhantomData;

use crate::{Cache, StoreError};
use serde::{de::DeserializeOwned, Serialize};

/// Storage key for the catalog view mode.
pub const VIEW_KEY: &str = "catalogView";
/// Storage key for the cart collection.
pub const CART_KEY: &str = "cart";
/// Storage key for the favorites collection.
pub const FAVORITES_KEY: &str = "favorites";

/// A single collection persisted whole under a fixed key.
///
/// `load` never fails: a missing, stale or malformed value yields
/// `T::default()`. `save` replaces the stored value entirely.
///
/// There is no coordination between processes sharing a storage; the last
/// `save` wins.
///
/// # Example
///
/// ```rust
/// use fabsite_store::{Cache, Repository};
///
/// let repo: Repository<Vec<String>> = Repository::new(Cache::in_memory(), "favorites");
/// assert!(repo.load().is_empty());
///
/// repo.save(&vec!["p-1".to_string()]).unwrap();
/// assert_eq!(repo.load(), vec!["p-1".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct Repository<T> {
    cache: Cache,
    key: String,
    _phantom: PhantomData<T>,
}

impl<T> Repository<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    /// Create a repository for `key`.
    pub fn new(cache: Cache, key: impl Into<String>) -> Self {
        Self {
            cache,
            key: key.into(),
            _phantom: PhantomData,
        }
    }

    /// The storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the collection, falling back to the default value.
    pub fn load(&self) -> T {
        match self.cache.get::<T>(&self.key) {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "discarding unreadable stored value");
                T::default()
            }
        }
    }

    /// Persist the whole collection.
    pub fn save(&self, value: &T) -> Result<(), StoreError> {
        self.cache.set(&self.key, value)
    }

    /// Remove the stored value.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.cache.delete(&self.key)
    }
}
