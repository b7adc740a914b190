//! Search module.
//!
//! The catalog pipeline: filter, then sort, then slice.

mod filter;
mod pagination;
mod sort;

pub use filter::{apply, FilterState, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE};
pub use pagination::{paginate, Page, Pagination, Paginator, NEWS_ITEMS_PER_PAGE};
pub use sort::{compare_names, sort, SortKey};
