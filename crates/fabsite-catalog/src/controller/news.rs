//! News page controller.

use crate::debounce::{Debouncer, DEFAULT_DEBOUNCE};
use crate::news::{list_news, regular_count, NewsItem, NewsListing, NewsQuery, NewsSort};
use crate::search::{Paginator, NEWS_ITEMS_PER_PAGE};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

/// A user action on the news page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsAction {
    /// A category tab was clicked.
    SelectCategory(String),
    /// A keystroke in the search box, taken effect after the debounce delay.
    SearchInput { term: String, at: Instant },
    /// Apply a pending search term now.
    FlushSearch,
    SetSort(NewsSort),
    GoToPage(usize),
    NextPage,
    PrevPage,
}

/// What a dispatched action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewsOutcome {
    /// The listing changed.
    Refreshed,
    /// A search term is waiting for its deadline.
    SearchPending,
    /// Nothing to do, e.g. a page outside the list.
    Unchanged,
}

/// Controller settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsSettings {
    pub items_per_page: usize,
    #[serde(with = "millis")]
    pub debounce: Duration,
}

impl Default for NewsSettings {
    fn default() -> Self {
        Self {
            items_per_page: NEWS_ITEMS_PER_PAGE,
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

/// Owns the news page state: query, sort, current page, pending search.
#[derive(Debug, Clone)]
pub struct NewsController {
    items: Vec<NewsItem>,
    query: NewsQuery,
    sort: NewsSort,
    paginator: Paginator,
    search: Debouncer<String>,
}

impl NewsController {
    pub fn new(items: Vec<NewsItem>, settings: NewsSettings) -> Self {
        Self {
            items,
            query: NewsQuery::new(),
            sort: NewsSort::default(),
            paginator: Paginator::new(settings.items_per_page),
            search: Debouncer::new(settings.debounce),
        }
    }

    pub fn dispatch(&mut self, action: NewsAction) -> NewsOutcome {
        match action {
            NewsAction::SelectCategory(category) => {
                self.query.set_category(&category);
                self.list_changed()
            }
            NewsAction::SearchInput { term, at } => {
                self.search.schedule(at, term);
                NewsOutcome::SearchPending
            }
            NewsAction::FlushSearch => match self.search.flush() {
                Some(term) => self.apply_term(&term),
                None => NewsOutcome::Unchanged,
            },
            NewsAction::SetSort(sort) => {
                self.sort = sort;
                self.list_changed()
            }
            NewsAction::GoToPage(page) => self.navigated(|p, total| p.go_to(page, total)),
            NewsAction::NextPage => self.navigated(Paginator::next),
            NewsAction::PrevPage => self.navigated(Paginator::prev),
        }
    }

    /// Apply a due search term. Call on every timer tick or event.
    pub fn tick(&mut self, now: Instant) -> NewsOutcome {
        match self.search.poll(now) {
            Some(term) => self.apply_term(&term),
            None => NewsOutcome::Unchanged,
        }
    }

    fn apply_term(&mut self, term: &str) -> NewsOutcome {
        self.query.set_term(term);
        self.list_changed()
    }

    fn list_changed(&mut self) -> NewsOutcome {
        self.paginator.reset();
        NewsOutcome::Refreshed
    }

    fn navigated(&mut self, step: impl FnOnce(&mut Paginator, usize) -> bool) -> NewsOutcome {
        let total = regular_count(&self.items, &self.query);
        if step(&mut self.paginator, total) {
            NewsOutcome::Refreshed
        } else {
            debug!(page = self.paginator.current_page(), total, "page navigation ignored");
            NewsOutcome::Unchanged
        }
    }

    /// The current page with its match count.
    pub fn listing(&self) -> NewsListing {
        list_news(&self.items, &self.query, self.sort, &self.paginator)
    }

    pub fn query(&self) -> &NewsQuery {
        &self.query
    }

    pub fn sort(&self) -> NewsSort {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    pub fn search_pending(&self) -> bool {
        self.search.is_pending()
    }

    /// Distinct categories in markup order, for the tab bar.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for item in &self.items {
            if !item.category.is_empty() && !seen.contains(&item.category.as_str()) {
                seen.push(item.category.as_str());
            }
        }
        seen
    }
}
