//! Local-storage style persistence for fabsite pages.
//!
//! Provides a small, ergonomic API for keeping page state (cart, favorites,
//! view mode) in a string key-value store with automatic JSON
//! serialization.
//!
//! # Example
//!
//! ```rust
//! use fabsite_store::{Cache, Repository, FAVORITES_KEY};
//!
//! let cache = Cache::in_memory();
//!
//! // Store a value
//! cache.set("catalogView", "list").unwrap();
//!
//! // Retrieve a value
//! let view: Option<String> = cache.get("catalogView").unwrap();
//! assert_eq!(view.as_deref(), Some("list"));
//!
//! // Whole-collection repository with fail-open loading
//! let favorites: Repository<Vec<String>> = Repository::new(cache, FAVORITES_KEY);
//! assert!(favorites.load().is_empty());
//! ```

mod error;
mod kv;
mod repository;

pub use error::StoreError;
pub use kv::{Cache, FileStorage, MemoryStorage, Storage};
pub use repository::{Repository, CART_KEY, FAVORITES_KEY, VIEW_KEY};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, MemoryStorage, Repository, Storage, StoreError};
}
