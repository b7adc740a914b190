//! Persisted cart and favorites stores.
//!
//! Each store reads its collection once when opened and writes the whole
//! collection after every mutation. If the write fails the in-memory change
//! stays and the error is returned.

use crate::cart::{Cart, Favorites};
use crate::error::CatalogError;
use crate::ids::ProductId;
use fabsite_store::{Cache, Repository, CART_KEY, FAVORITES_KEY};

/// Cart backed by the `cart` key.
#[derive(Debug, Clone)]
pub struct CartStore {
    cart: Cart,
    repo: Repository<Cart>,
}

impl CartStore {
    /// Load the stored cart; unreadable data yields an empty cart.
    pub fn open(cache: Cache) -> Self {
        let repo: Repository<Cart> = Repository::new(cache, CART_KEY);
        Self {
            cart: repo.load().normalized(),
            repo,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit and persist. Returns the entry's new quantity.
    pub fn add_to_cart(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        price_display: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Result<i64, CatalogError> {
        let quantity = self.cart.add(id, name, price_display, image_url);
        self.persist()?;
        Ok(quantity)
    }

    /// Set an entry's quantity and persist. Returns whether it was present.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<bool, CatalogError> {
        let updated = self.cart.update_quantity(id, quantity)?;
        if updated {
            self.persist()?;
        }
        Ok(updated)
    }

    /// Remove an entry and persist. Returns whether it was present.
    pub fn remove(&mut self, id: &ProductId) -> Result<bool, CatalogError> {
        let removed = self.cart.remove(id);
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Empty the cart and persist.
    pub fn clear(&mut self) -> Result<(), CatalogError> {
        self.cart.clear();
        self.persist()
    }

    fn persist(&self) -> Result<(), CatalogError> {
        self.repo.save(&self.cart).map_err(|e| {
            tracing::warn!(key = CART_KEY, error = %e, "cart not persisted");
            CatalogError::persist(CART_KEY, e)
        })
    }
}

/// Favorites backed by the `favorites` key.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    favorites: Favorites,
    repo: Repository<Favorites>,
}

impl FavoritesStore {
    /// Load stored favorites; unreadable data yields an empty set.
    pub fn open(cache: Cache) -> Self {
        let repo: Repository<Favorites> = Repository::new(cache, FAVORITES_KEY);
        Self {
            favorites: repo.load().normalized(),
            repo,
        }
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Flip membership and persist. Returns the new membership state.
    pub fn toggle_favorite(&mut self, id: ProductId) -> Result<bool, CatalogError> {
        let member = self.favorites.toggle(id);
        self.repo.save(&self.favorites).map_err(|e| {
            tracing::warn!(key = FAVORITES_KEY, error = %e, "favorites not persisted");
            CatalogError::persist(FAVORITES_KEY, e)
        })?;
        Ok(member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fabsite_store::{MemoryStorage, Storage, StoreError};
    use std::rc::Rc;

    /// Storage that accepts reads and refuses writes.
    #[derive(Debug, Default)]
    struct ReadOnlyStorage;

    impl Storage for ReadOnlyStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::StoreError("quota exceeded".into()))
        }

        fn remove_item(&self, _key: &str) -> Result<(), StoreError> {
            Ok(())
        }

        fn keys(&self) -> Result<Vec<String>, StoreError> {
            Ok(vec![])
        }
    }

    #[test]
    fn test_add_to_cart_persists_whole_cart() {
        let cache = Cache::in_memory();
        let mut store = CartStore::open(cache.clone());
        store
            .add_to_cart(ProductId::new("p1"), "Asher", "90 000 ₽", "/a.jpg")
            .unwrap();
        let qty = store
            .add_to_cart(ProductId::new("p1"), "Asher", "90 000 ₽", "/a.jpg")
            .unwrap();
        assert_eq!(qty, 2);

        let reopened = CartStore::open(cache);
        assert_eq!(reopened.cart().len(), 1);
        assert_eq!(reopened.cart().total_quantity(), 2);
    }

    #[test]
    fn test_numeric_ids_in_stored_collections_load() {
        let storage = MemoryStorage::with_items([
            (
                CART_KEY,
                r#"[{"id":"pvd-200","name":"PVD","price":"1","image":"","quantity":3},
                    {"id":1697000000000,"name":"Etcher","price":"2","image":"","quantity":1}]"#,
            ),
            (FAVORITES_KEY, r#"["pvd-200", 1697000000000]"#),
        ]);
        let cache = Cache::new(Rc::new(storage));

        let cart = CartStore::open(cache.clone());
        assert_eq!(cart.cart().len(), 2);
        assert_eq!(cart.cart().total_quantity(), 4);
        assert!(cart.cart().get(&ProductId::new("1697000000000")).is_some());

        let favorites = FavoritesStore::open(cache);
        assert_eq!(favorites.favorites().len(), 2);
        assert!(favorites.favorites().contains(&ProductId::new("1697000000000")));
    }

    #[test]
    fn test_update_quantity_persists() {
        let cache = Cache::in_memory();
        let mut store = CartStore::open(cache.clone());
        store.add_to_cart(ProductId::new("p1"), "A", "1", "").unwrap();

        assert!(store.update_quantity(&ProductId::new("p1"), 4).unwrap());
        assert!(!store.update_quantity(&ProductId::new("p9"), 4).unwrap());
        assert!(matches!(
            store.update_quantity(&ProductId::new("p1"), 0),
            Err(CatalogError::InvalidQuantity(0))
        ));
        assert_eq!(CartStore::open(cache).cart().total_quantity(), 4);
    }

    #[test]
    fn test_corrupt_cart_opens_empty() {
        let storage = MemoryStorage::with_items([(CART_KEY, "[{broken")]);
        let store = CartStore::open(Cache::new(Rc::new(storage)));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let cache = Cache::in_memory();
        let mut store = CartStore::open(cache.clone());
        store.add_to_cart(ProductId::new("p1"), "A", "1", "").unwrap();
        store.add_to_cart(ProductId::new("p2"), "B", "2", "").unwrap();

        assert!(store.remove(&ProductId::new("p1")).unwrap());
        assert_eq!(CartStore::open(cache.clone()).cart().len(), 1);

        store.clear().unwrap();
        assert!(CartStore::open(cache).cart().is_empty());
    }

    #[test]
    fn test_toggle_favorite_persists() {
        let cache = Cache::in_memory();
        let mut store = FavoritesStore::open(cache.clone());
        assert!(store.toggle_favorite(ProductId::new("p1")).unwrap());
        assert!(FavoritesStore::open(cache.clone())
            .favorites()
            .contains(&ProductId::new("p1")));

        assert!(!store.toggle_favorite(ProductId::new("p1")).unwrap());
        assert!(FavoritesStore::open(cache).favorites().is_empty());
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let cache = Cache::new(Rc::new(ReadOnlyStorage));
        let mut store = CartStore::open(cache.clone());
        let result = store.add_to_cart(ProductId::new("p1"), "A", "1", "");
        assert!(matches!(result, Err(CatalogError::Persist { .. })));
        assert_eq!(store.cart().total_quantity(), 1);

        let mut favs = FavoritesStore::open(cache);
        assert!(favs.toggle_favorite(ProductId::new("p1")).is_err());
        assert!(favs.favorites().contains(&ProductId::new("p1")));
    }
}
