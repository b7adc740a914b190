//! Catalog page controller.

use crate::cart::{Cart, CartStore, Favorites, FavoritesStore};
use crate::catalog::Product;
use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::search::{apply, sort, FilterState, SortKey};
use crate::view::{ViewMode, ViewPreference};
use fabsite_store::Cache;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A user action on the catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum CatalogAction {
    /// A category checkbox changed.
    ToggleCategory { category: String, checked: bool },
    /// A brand checkbox changed.
    ToggleBrand { brand: String, checked: bool },
    SetPriceRange { min: i64, max: i64 },
    /// Return to the filters the page was configured with.
    ResetFilters,
    /// Commit staged filter edits.
    ApplyFilters,
    SetSort(SortKey),
    SetView(ViewMode),
    AddToCart(ProductId),
    ToggleFavorite(ProductId),
}

/// What a dispatched action did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CatalogOutcome {
    /// The visible list was recomputed.
    Refreshed { visible: usize },
    /// A filter edit is waiting for `ApplyFilters`.
    Staged,
    ViewChanged { mode: ViewMode },
    AddedToCart {
        id: ProductId,
        quantity: i64,
        cart_count: i64,
    },
    FavoriteToggled { id: ProductId, favorite: bool },
    /// The action referred to something that is not on the page.
    Ignored,
}

/// Controller settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Apply filter edits immediately instead of waiting for `ApplyFilters`.
    pub auto_apply: bool,
    pub sort: SortKey,
    pub filters: FilterState,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            auto_apply: true,
            sort: SortKey::default(),
            filters: FilterState::default(),
        }
    }
}

/// Owns the catalog page state and runs the filter, sort pipeline.
#[derive(Debug, Clone)]
pub struct CatalogController {
    products: Vec<Product>,
    initial: FilterState,
    applied: FilterState,
    pending: FilterState,
    auto_apply: bool,
    sort: SortKey,
    view: ViewPreference,
    cart: CartStore,
    favorites: FavoritesStore,
}

impl CatalogController {
    /// Build the controller and read persisted view, cart and favorites.
    pub fn new(products: Vec<Product>, cache: Cache, settings: CatalogSettings) -> Self {
        Self {
            products,
            initial: settings.filters.clone(),
            applied: settings.filters.clone(),
            pending: settings.filters,
            auto_apply: settings.auto_apply,
            sort: settings.sort,
            view: ViewPreference::load(cache.clone()),
            cart: CartStore::open(cache.clone()),
            favorites: FavoritesStore::open(cache),
        }
    }

    pub fn dispatch(&mut self, action: CatalogAction) -> Result<CatalogOutcome, CatalogError> {
        match action {
            CatalogAction::ToggleCategory { category, checked } => {
                self.pending.set_category(&category, checked);
                Ok(self.filters_edited())
            }
            CatalogAction::ToggleBrand { brand, checked } => {
                self.pending.set_brand(&brand, checked);
                Ok(self.filters_edited())
            }
            CatalogAction::SetPriceRange { min, max } => {
                self.pending.set_price_range(min, max);
                Ok(self.filters_edited())
            }
            CatalogAction::ResetFilters => {
                self.pending = self.initial.clone();
                self.applied = self.initial.clone();
                Ok(self.refreshed())
            }
            CatalogAction::ApplyFilters => {
                self.applied = self.pending.clone();
                Ok(self.refreshed())
            }
            CatalogAction::SetSort(key) => {
                self.sort = key;
                Ok(self.refreshed())
            }
            CatalogAction::SetView(mode) => {
                self.view.set(mode)?;
                Ok(CatalogOutcome::ViewChanged { mode })
            }
            CatalogAction::AddToCart(id) => self.add_to_cart(id),
            CatalogAction::ToggleFavorite(id) => self.toggle_favorite(id),
        }
    }

    fn filters_edited(&mut self) -> CatalogOutcome {
        if self.auto_apply {
            self.applied = self.pending.clone();
            self.refreshed()
        } else {
            CatalogOutcome::Staged
        }
    }

    fn refreshed(&self) -> CatalogOutcome {
        CatalogOutcome::Refreshed {
            visible: self.visible_count(),
        }
    }

    fn add_to_cart(&mut self, id: ProductId) -> Result<CatalogOutcome, CatalogError> {
        let Some(product) = self.product(&id) else {
            debug!(id = %id, "add to cart ignored, no such product");
            return Ok(CatalogOutcome::Ignored);
        };
        let (name, price, image) = (
            product.name.clone(),
            product.display_price(),
            product.image_url.clone(),
        );
        let quantity = self.cart.add_to_cart(id.clone(), name, price, image)?;
        Ok(CatalogOutcome::AddedToCart {
            id,
            quantity,
            cart_count: self.cart.cart().total_quantity(),
        })
    }

    fn toggle_favorite(&mut self, id: ProductId) -> Result<CatalogOutcome, CatalogError> {
        if self.product(&id).is_none() {
            debug!(id = %id, "favorite toggle ignored, no such product");
            return Ok(CatalogOutcome::Ignored);
        }
        let favorite = self.favorites.toggle_favorite(id.clone())?;
        Ok(CatalogOutcome::FavoriteToggled { id, favorite })
    }

    /// Visible products in display order.
    pub fn visible(&self) -> Vec<Product> {
        sort(&apply(&self.products, &self.applied), self.sort)
    }

    pub fn visible_count(&self) -> usize {
        self.products
            .iter()
            .filter(|p| self.applied.matches(p))
            .count()
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Filters currently in effect.
    pub fn filters(&self) -> &FilterState {
        &self.applied
    }

    /// Filters as edited, possibly not yet applied.
    pub fn pending_filters(&self) -> &FilterState {
        &self.pending
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view.mode()
    }

    pub fn cart(&self) -> &Cart {
        self.cart.cart()
    }

    pub fn favorites(&self) -> &Favorites {
        self.favorites.favorites()
    }

    pub fn is_favorite(&self, id: &ProductId) -> bool {
        self.favorites.favorites().contains(id)
    }
}
