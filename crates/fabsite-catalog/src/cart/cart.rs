//! Cart and cart entry types.

use crate::error::CatalogError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// One product in the cart.
///
/// Serialized as `{id, name, price, image, quantity}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartEntry {
    /// Product ID.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Price text as shown on the card.
    pub price: String,
    /// Image URL.
    pub image: String,
    /// Quantity, at least 1.
    pub quantity: i64,
}

/// The shopping cart: entries keyed by product id, in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// An existing entry gets its quantity incremented; otherwise a new entry
    /// with quantity 1 is appended. Returns the entry's new quantity.
    pub fn add(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        price: impl Into<String>,
        image: impl Into<String>,
    ) -> i64 {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.id == id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return existing.quantity;
        }

        self.entries.push(CartEntry {
            id,
            name: name.into(),
            price: price.into(),
            image: image.into(),
            quantity: 1,
        });
        1
    }

    /// Set an entry's quantity.
    ///
    /// Returns `Ok(false)` if the product isn't in the cart.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<bool, CatalogError> {
        if quantity < 1 {
            return Err(CatalogError::InvalidQuantity(quantity));
        }

        match self.entries.iter_mut().find(|e| &e.id == id) {
            Some(entry) => {
                entry.quantity = quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove an entry.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|e| &e.id != id);
        self.entries.len() < len_before
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get an entry by product ID.
    pub fn get(&self, id: &ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Sum of quantities, shown on the cart counter.
    pub fn total_quantity(&self) -> i64 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop entries that can't have come from `add`: non-positive
    /// quantities, and repeated ids (merged into the first occurrence).
    pub(crate) fn normalized(self) -> Self {
        let mut out = Cart::new();
        for entry in self.entries.into_iter().filter(|e| e.quantity >= 1) {
            match out.entries.iter_mut().find(|e| e.id == entry.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(entry.quantity)
                }
                None => out.entries.push(entry),
            }
        }
        out
    }
}
