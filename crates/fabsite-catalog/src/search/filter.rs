//! Facet and price filtering.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Lower bound of the price slider.
pub const DEFAULT_MIN_PRICE: i64 = 0;
/// Upper bound of the price slider.
pub const DEFAULT_MAX_PRICE: i64 = 10_000_000;

/// Active facet selections and price range.
///
/// Invariant: `min_price <= max_price`. Setters swap a crossed range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Selected categories. Empty means "any".
    pub categories: BTreeSet<String>,
    /// Selected brands. Empty means "any".
    pub brands: BTreeSet<String>,
    min_price: i64,
    max_price: i64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            categories: BTreeSet::new(),
            brands: BTreeSet::new(),
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
        }
    }
}

impl FilterState {
    /// Create a state with default bounds and no facets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style category selection.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    /// Builder-style brand selection.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brands.insert(brand.into());
        self
    }

    /// Builder-style price range.
    pub fn with_price_range(mut self, min: i64, max: i64) -> Self {
        self.set_price_range(min, max);
        self
    }

    pub fn min_price(&self) -> i64 {
        self.min_price
    }

    pub fn max_price(&self) -> i64 {
        self.max_price
    }

    /// Set the price range, swapping the bounds if they cross.
    pub fn set_price_range(&mut self, min: i64, max: i64) {
        if min > max {
            self.min_price = max;
            self.max_price = min;
        } else {
            self.min_price = min;
            self.max_price = max;
        }
    }

    /// Set the category checkbox state. Returns whether anything changed.
    pub fn set_category(&mut self, category: &str, checked: bool) -> bool {
        set_member(&mut self.categories, category, checked)
    }

    /// Set the brand checkbox state. Returns whether anything changed.
    pub fn set_brand(&mut self, brand: &str, checked: bool) -> bool {
        set_member(&mut self.brands, brand, checked)
    }

    /// Restore defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether no facet or price restriction is active.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Check a single product against all three predicates.
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok =
            self.categories.is_empty() || self.categories.contains(&product.category);
        let brand_ok = self.brands.is_empty() || self.brands.contains(&product.brand);
        let price_ok = product
            .price_cents
            .is_some_and(|p| p >= self.min_price && p <= self.max_price);

        category_ok && brand_ok && price_ok
    }
}

fn set_member(set: &mut BTreeSet<String>, value: &str, checked: bool) -> bool {
    if checked {
        set.insert(value.to_string())
    } else {
        set.remove(value)
    }
}

/// Reduce `products` to the ones visible under `state`, keeping order.
pub fn apply(products: &[Product], state: &FilterState) -> Vec<Product> {
    products
        .iter()
        .filter(|p| state.matches(p))
        .cloned()
        .collect()
}
