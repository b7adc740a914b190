//! Catalog sort keys and the stable sort engine.

use crate::catalog::{Badge, Product};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Sort options for the catalog select control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by name A-Z.
    Name,
    /// Cards badged "new" first.
    Newest,
    /// Cards badged "hit" first.
    #[default]
    Popular,
}

impl SortKey {
    /// Value used by the select control.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Name => "name",
            SortKey::Newest => "newest",
            SortKey::Popular => "popular",
        }
    }

    /// Parse a select value. Unknown values fall back to [`SortKey::Popular`].
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            "name" => SortKey::Name,
            "newest" => SortKey::Newest,
            _ => SortKey::Popular,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::Name => "Name: A-Z",
            SortKey::Newest => "Newest",
            SortKey::Popular => "Popular",
        }
    }

    /// All keys in select-control order.
    pub fn all() -> [SortKey; 5] {
        [
            SortKey::Popular,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::Name,
            SortKey::Newest,
        ]
    }

    /// Compare two products under this key.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::PriceAsc => price_of(a).cmp(&price_of(b)),
            SortKey::PriceDesc => price_of(b).cmp(&price_of(a)),
            SortKey::Name => compare_names(&a.name, &b.name),
            SortKey::Newest => badge_first(a, b, &Badge::New),
            SortKey::Popular => badge_first(a, b, &Badge::Hit),
        }
    }
}

/// Sort a copy of `products` by `key`. Equal elements keep their order.
pub fn sort(products: &[Product], key: SortKey) -> Vec<Product> {
    let mut sorted = products.to_vec();
    // slice::sort_by is stable
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}

fn price_of(p: &Product) -> i64 {
    p.price_cents.unwrap_or(0)
}

fn badge_first(a: &Product, b: &Product, badge: &Badge) -> Ordering {
    b.has_badge(badge).cmp(&a.has_badge(badge))
}

/// Collation key: compatibility decomposition, marks stripped, lowercased.
fn collation_key(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Locale-aware name comparison. Case and diacritics only break ties.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}
