//! News filtering, search, sorting and paging.

use crate::news::NewsItem;
use crate::search::{paginate, Page, Paginator};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Sort options for the news select control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NewsSort {
    /// Markup order.
    #[default]
    Default,
    /// Date, most recent first.
    Newest,
    /// Date, oldest first.
    Oldest,
    /// View count, highest first.
    Popular,
}

impl NewsSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewsSort::Default => "default",
            NewsSort::Newest => "newest",
            NewsSort::Oldest => "oldest",
            NewsSort::Popular => "popular",
        }
    }

    /// Parse a select value. Unknown values keep markup order.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "newest" => NewsSort::Newest,
            "oldest" => NewsSort::Oldest,
            "popular" => NewsSort::Popular,
            _ => NewsSort::Default,
        }
    }

    /// Items without a date sort as the oldest.
    pub fn compare(&self, a: &NewsItem, b: &NewsItem) -> Ordering {
        match self {
            NewsSort::Default => Ordering::Equal,
            NewsSort::Newest => b.date.cmp(&a.date),
            NewsSort::Oldest => a.date.cmp(&b.date),
            NewsSort::Popular => b.views.cmp(&a.views),
        }
    }
}

/// Category and search-term selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsQuery {
    category: Option<String>,
    term: String,
}

impl NewsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a category; [`ALL_CATEGORIES`] or blank clears the filter.
    pub fn with_category(mut self, category: &str) -> Self {
        self.set_category(category);
        self
    }

    pub fn with_term(mut self, term: &str) -> Self {
        self.set_term(term);
        self
    }

    pub fn set_category(&mut self, category: &str) {
        let category = category.trim();
        self.category = if category.is_empty() || category == ALL_CATEGORIES {
            None
        } else {
            Some(category.to_string())
        };
    }

    /// Store the search term trimmed and lowercased.
    pub fn set_term(&mut self, term: &str) {
        self.term = term.trim().to_lowercase();
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn matches(&self, item: &NewsItem) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |c| item.category == c);
        category_ok && item.matches_term(&self.term)
    }
}

/// Items passing `query`, in markup order.
pub fn filter_news(items: &[NewsItem], query: &NewsQuery) -> Vec<NewsItem> {
    items.iter().filter(|i| query.matches(i)).cloned().collect()
}

/// Stable sort of a copy of `items`.
pub fn sort_news(items: &[NewsItem], sort: NewsSort) -> Vec<NewsItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| sort.compare(a, b));
    sorted
}

/// A rendered news page with its match count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsListing {
    /// Number of items matching the query, featured included.
    pub found: usize,
    pub page: Page<NewsItem>,
}

/// Run the full pipeline: filter, pull out the featured item, sort the
/// rest, slice the current page.
pub fn list_news(
    items: &[NewsItem],
    query: &NewsQuery,
    sort: NewsSort,
    paginator: &Paginator,
) -> NewsListing {
    let visible = filter_news(items, query);
    let found = visible.len();

    let featured_idx = visible.iter().position(|i| i.featured);
    let featured = featured_idx.and_then(|idx| visible.get(idx));
    let regular: Vec<NewsItem> = visible
        .iter()
        .enumerate()
        .filter(|(idx, _)| Some(*idx) != featured_idx)
        .map(|(_, item)| item.clone())
        .collect();

    let regular = sort_news(&regular, sort);

    NewsListing {
        found,
        page: paginate(featured, &regular, paginator),
    }
}

/// Number of non-featured items under `query`, the paging total.
pub fn regular_count(items: &[NewsItem], query: &NewsQuery) -> usize {
    let visible = filter_news(items, query);
    let has_featured = visible.iter().any(|i| i.featured);
    visible.len() - usize::from(has_featured)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn items() -> Vec<NewsItem> {
        vec![
            NewsItem::new("lead", "Plant expansion", "company")
                .with_date(day(20))
                .with_views(900)
                .featured(),
            NewsItem::new("n1", "Etching seminar", "events")
                .with_date(day(3))
                .with_views(50),
            NewsItem::new("n2", "New CVD reactor", "production")
                .with_date(day(10))
                .with_views(300)
                .with_tag("cvd"),
            NewsItem::new("n3", "Quality audit passed", "company")
                .with_date(day(7))
                .with_views(120),
        ]
    }

    fn ids(page: &Page<NewsItem>) -> Vec<&str> {
        page.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_default_listing_keeps_markup_order() {
        let listing = list_news(&items(), &NewsQuery::new(), NewsSort::Default, &Paginator::new(5));
        assert_eq!(listing.found, 4);
        assert_eq!(ids(&listing.page), vec!["lead", "n1", "n2", "n3"]);
    }

    #[test]
    fn test_featured_stays_first_under_any_sort() {
        for sort in [NewsSort::Newest, NewsSort::Oldest, NewsSort::Popular] {
            let listing = list_news(&items(), &NewsQuery::new(), sort, &Paginator::new(5));
            assert_eq!(ids(&listing.page)[0], "lead");
        }
        let listing = list_news(&items(), &NewsQuery::new(), NewsSort::Newest, &Paginator::new(5));
        assert_eq!(ids(&listing.page), vec!["lead", "n2", "n3", "n1"]);
        let listing = list_news(&items(), &NewsQuery::new(), NewsSort::Popular, &Paginator::new(5));
        assert_eq!(ids(&listing.page), vec!["lead", "n2", "n3", "n1"]);
        let listing = list_news(&items(), &NewsQuery::new(), NewsSort::Oldest, &Paginator::new(5));
        assert_eq!(ids(&listing.page), vec!["lead", "n1", "n3", "n2"]);
    }

    #[test]
    fn test_category_filter() {
        let query = NewsQuery::new().with_category("company");
        let listing = list_news(&items(), &query, NewsSort::Default, &Paginator::new(5));
        assert_eq!(ids(&listing.page), vec!["lead", "n3"]);

        let query = NewsQuery::new().with_category("all");
        assert_eq!(query.category(), None);
    }

    #[test]
    fn test_search_hides_featured_when_not_matching() {
        let query = NewsQuery::new().with_term("  CVD ");
        let listing = list_news(&items(), &query, NewsSort::Default, &Paginator::new(5));
        assert_eq!(listing.found, 1);
        assert_eq!(ids(&listing.page), vec!["n2"]);
        assert!(listing.page.featured.is_none());
    }

    #[test]
    fn test_missing_date_sorts_oldest() {
        let list = vec![
            NewsItem::new("a", "a", "x"),
            NewsItem::new("b", "b", "x").with_date(day(1)),
        ];
        let newest = sort_news(&list, NewsSort::Newest);
        assert_eq!(newest[0].id.as_str(), "b");
        let oldest = sort_news(&list, NewsSort::Oldest);
        assert_eq!(oldest[0].id.as_str(), "a");
    }

    #[test]
    fn test_paging_excludes_featured_from_arithmetic() {
        let mut list = vec![NewsItem::new("lead", "lead", "x").featured()];
        for i in 0..7 {
            list.push(NewsItem::new(format!("n{i}"), "t", "x"));
        }
        assert_eq!(regular_count(&list, &NewsQuery::new()), 7);

        let mut pager = Paginator::new(5);
        assert!(pager.go_to(2, regular_count(&list, &NewsQuery::new())));
        let listing = list_news(&list, &NewsQuery::new(), NewsSort::Default, &pager);
        assert_eq!(ids(&listing.page), vec!["lead", "n5", "n6"]);
        assert_eq!(listing.page.pagination.total_pages, 2);
    }
}
