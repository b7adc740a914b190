//! Product and badge types.

use crate::catalog::Attributes;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A boolean tag shown on a product card, used as a coarse ranking signal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Badge {
    /// "Новинка" badge, drives the `newest` sort.
    New,
    /// "Хит" badge, drives the `popular` sort.
    Hit,
    /// Discount badge.
    Sale,
    /// Any other tag.
    Other(String),
}

impl Badge {
    pub fn as_str(&self) -> &str {
        match self {
            Badge::New => "new",
            Badge::Hit => "hit",
            Badge::Sale => "sale",
            Badge::Other(tag) => tag,
        }
    }

    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "new" => Badge::New,
            "hit" => Badge::Hit,
            "sale" => Badge::Sale,
            other => Badge::Other(other.to_string()),
        }
    }
}

impl From<String> for Badge {
    fn from(s: String) -> Self {
        Badge::parse(&s)
    }
}

impl From<Badge> for String {
    fn from(b: Badge) -> Self {
        b.as_str().to_string()
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product card in the catalog.
///
/// Built once from markup by [`Product::from_attributes`] and never mutated
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Price in the currency's minor unit, as in [`Money::amount_cents`].
    /// Rubles have no minor unit, so this holds whole rubles. `None` when
    /// the markup value is malformed; such products never pass a price filter.
    pub price_cents: Option<i64>,
    /// Price text as printed on the card (e.g., "1 250 000 ₽").
    pub price_display: String,
    /// Category facet value.
    pub category: String,
    /// Brand facet value.
    pub brand: String,
    /// Badges shown on the card.
    pub badges: BTreeSet<Badge>,
    /// Image URL.
    pub image_url: String,
    /// Short description.
    pub description: String,
}

impl Product {
    /// Create a product with a price and no facets.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price_cents: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price_cents: Some(price_cents),
            price_display: String::new(),
            category: String::new(),
            brand: String::new(),
            badges: BTreeSet::new(),
            image_url: String::new(),
            description: String::new(),
        }
    }

    /// Parse a product from card attributes.
    ///
    /// Reads `data-id`, `data-name`, `data-price`, `data-price-display`,
    /// `data-category`, `data-brand`, `data-badges`, `data-image` and
    /// `data-description`. A missing id is replaced by a generated one.
    pub fn from_attributes(attrs: &Attributes) -> Self {
        let id = attrs
            .non_empty("data-id")
            .map(ProductId::new)
            .unwrap_or_else(ProductId::generate);

        Self {
            id,
            name: attrs.text("data-name"),
            price_cents: attrs.int("data-price"),
            price_display: attrs.text("data-price-display"),
            category: attrs.text("data-category"),
            brand: attrs.text("data-brand"),
            badges: attrs
                .list("data-badges")
                .iter()
                .map(|b| Badge::parse(b))
                .collect(),
            image_url: attrs.text("data-image"),
            description: attrs.text("data-description"),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badges.insert(badge);
        self
    }

    /// Check whether the card carries a badge.
    pub fn has_badge(&self, badge: &Badge) -> bool {
        self.badges.contains(badge)
    }

    /// Price as money, if the markup price was well-formed.
    pub fn price(&self) -> Option<Money> {
        self.price_cents.map(|c| Money::new(c, Currency::default()))
    }

    /// Price text for the cart: the card's own text, else a formatted price.
    pub fn display_price(&self) -> String {
        if !self.price_display.is_empty() {
            return self.price_display.clone();
        }
        self.price().map(|m| m.display()).unwrap_or_default()
    }
}
