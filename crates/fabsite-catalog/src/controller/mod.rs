//! Page controllers.
//!
//! Each controller owns one page's state, turns user actions into state
//! changes and exposes the resulting view.

mod catalog;
mod news;

pub use catalog::{CatalogAction, CatalogController, CatalogOutcome, CatalogSettings};
pub use news::{NewsAction, NewsController, NewsOutcome, NewsSettings};
