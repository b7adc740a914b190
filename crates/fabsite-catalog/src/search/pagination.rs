//! Page slicing with a pinned featured item.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Items per page on the news listing.
pub const NEWS_ITEMS_PER_PAGE: usize = 5;

/// Pagination info for one page of a list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of items.
    pub total: usize,
    /// Total number of pages (at least 1).
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let total_pages = total_pages(per_page, total);

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Offset of the first item on this page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1) * self.per_page
    }

    /// Index window of this page, clipped to the list length.
    pub fn range(&self) -> Range<usize> {
        let start = self.offset().min(self.total);
        let end = (self.page * self.per_page).min(self.total);
        start..end
    }

    /// Get page numbers for display (e.g., [3, 4, 5, 6, 7]).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = self.page.saturating_sub(half).max(1);
        let end = (start + max_visible - 1).min(self.total_pages);
        let start = (end + 1).saturating_sub(max_visible).max(1);

        (start..=end).collect()
    }

    /// Check if on first page.
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    /// Check if on last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }
}

fn total_pages(per_page: usize, total: usize) -> usize {
    if total == 0 || per_page == 0 {
        1
    } else {
        total.div_ceil(per_page)
    }
}

/// Current-page state for one listing.
///
/// Navigation outside `1..=total_pages` is ignored rather than clamped or
/// wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginator {
    per_page: usize,
    current_page: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(NEWS_ITEMS_PER_PAGE)
    }
}

impl Paginator {
    /// Start on page 1. A zero page size is treated as 1.
    pub fn new(per_page: usize) -> Self {
        Self {
            per_page: per_page.max(1),
            current_page: 1,
        }
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Move to `page`. Returns `false` (and changes nothing) when `page` is
    /// outside the list of `total` items.
    pub fn go_to(&mut self, page: usize, total: usize) -> bool {
        if page < 1 || page > total_pages(self.per_page, total) {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next(&mut self, total: usize) -> bool {
        self.go_to(self.current_page + 1, total)
    }

    pub fn prev(&mut self, total: usize) -> bool {
        match self.current_page.checked_sub(1) {
            Some(page) => self.go_to(page, total),
            None => false,
        }
    }

    /// Back to page 1, used when the underlying list changes.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Pagination info for a list of `total` items.
    pub fn pagination(&self, total: usize) -> Pagination {
        Pagination::new(self.current_page, self.per_page, total)
    }

    /// The current page's window of `items`.
    pub fn slice<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let range = self.pagination(items.len()).range();
        items.get(range).map(<[T]>::to_vec).unwrap_or_default()
    }
}

/// One rendered page: the pinned item plus the current window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Pinned item, shown on every page.
    pub featured: Option<T>,
    /// Items of the current window.
    pub items: Vec<T>,
    /// Pagination over the non-featured items.
    pub pagination: Pagination,
}

impl<T> Page<T> {
    /// Items in display order: featured first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.featured.iter().chain(self.items.iter())
    }

    /// Number of items shown, featured included.
    pub fn len(&self) -> usize {
        self.items.len() + usize::from(self.featured.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Slice `regular` to the paginator's window and pin `featured` first.
/// The featured item takes no part in the page arithmetic.
pub fn paginate<T: Clone>(featured: Option<&T>, regular: &[T], paginator: &Paginator) -> Page<T> {
    Page {
        featured: featured.cloned(),
        items: paginator.slice(regular),
        pagination: paginator.pagination(regular.len()),
    }
}
