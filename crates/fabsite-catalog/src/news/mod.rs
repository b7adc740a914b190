//! News listing module.
//!
//! News cards, the category/search/sort/page pipeline over them, and share
//! links for the detail dialog.

mod item;
mod listing;
mod share;

pub use item::NewsItem;
pub use listing::{
    filter_news, list_news, regular_count, sort_news, NewsListing, NewsQuery, NewsSort,
    ALL_CATEGORIES,
};
pub use share::SharePlatform;
