//! Catalog and news page logic for the fab equipment site.
//!
//! This crate turns markup attributes into typed records and runs the page
//! pipelines over them:
//!
//! - **Catalog**: Products parsed from `data-*` attributes
//! - **Search**: Facet and price filtering, sorting, page slicing
//! - **Cart**: Cart and favorites persisted through `fabsite-store`
//! - **News**: Category, search, sort and paging over news cards
//! - **Forms**: Order and newsletter validation and submission
//! - **Controller**: Action dispatch for the catalog and news pages
//!
//! # Example
//!
//! ```rust
//! use fabsite_catalog::prelude::*;
//! use fabsite_store::Cache;
//!
//! let attrs = Attributes::new()
//!     .with("data-id", "pvd-200")
//!     .with("data-name", "PVD-200")
//!     .with("data-price", "4500000")
//!     .with("data-category", "deposition");
//! let product = Product::from_attributes(&attrs);
//!
//! let mut page = CatalogController::new(vec![product], Cache::in_memory(), CatalogSettings::default());
//! page.dispatch(CatalogAction::AddToCart(ProductId::new("pvd-200")))?;
//! assert_eq!(page.cart().total_quantity(), 1);
//! # Ok::<(), CatalogError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod controller;
pub mod debounce;
pub mod forms;
pub mod news;
pub mod search;
pub mod view;

pub use error::CatalogError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Attributes, Badge, Product};

    // Search
    pub use crate::search::{apply, sort, FilterState, Page, Pagination, Paginator, SortKey};

    // View
    pub use crate::view::{ViewMode, ViewPreference};

    // Cart
    pub use crate::cart::{Cart, CartEntry, CartStore, Favorites, FavoritesStore};

    // News
    pub use crate::news::{NewsItem, NewsListing, NewsQuery, NewsSort, SharePlatform};

    // Forms
    pub use crate::forms::{
        submit, ConfirmationSubmitter, NewsletterSignup, OrderRequest, Submission, Submitter,
        ValidationErrors,
    };

    // Controllers
    pub use crate::controller::{
        CatalogAction, CatalogController, CatalogOutcome, CatalogSettings, NewsAction,
        NewsController, NewsOutcome, NewsSettings,
    };
    pub use crate::debounce::Debouncer;
}
