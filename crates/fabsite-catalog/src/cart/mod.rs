//! Shopping cart module.
//!
//! Contains the cart and favorites collections and their persisted stores.

#[allow(clippy::module_inception)]
mod cart;
mod favorites;
mod store;

pub use cart::{Cart, CartEntry};
pub use favorites::Favorites;
pub use store::{CartStore, FavoritesStore};
