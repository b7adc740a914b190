//! News item type.

use crate::catalog::Attributes;
use crate::ids::NewsId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A news card on the news listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsItem {
    pub id: NewsId,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub tags: Vec<String>,
    /// Publication date; `None` when the markup date is malformed.
    pub date: Option<NaiveDate>,
    pub views: i64,
    /// The pinned lead item.
    pub featured: bool,
}

impl NewsItem {
    /// Create an item with a title and category.
    pub fn new(id: impl Into<NewsId>, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            excerpt: String::new(),
            category: category.into(),
            tags: Vec::new(),
            date: None,
            views: 0,
            featured: false,
        }
    }

    /// Parse from card attributes: `data-id`, `data-title`, `data-excerpt`,
    /// `data-category`, `data-tags`, `data-date` (`YYYY-MM-DD`),
    /// `data-views`, `data-featured`.
    pub fn from_attributes(attrs: &Attributes) -> Self {
        let id = attrs
            .non_empty("data-id")
            .map(NewsId::new)
            .unwrap_or_else(NewsId::generate);

        Self {
            id,
            title: attrs.text("data-title"),
            excerpt: attrs.text("data-excerpt"),
            category: attrs.text("data-category"),
            tags: attrs.list("data-tags"),
            date: attrs
                .get("data-date")
                .and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok()),
            views: attrs.int("data-views").unwrap_or(0),
            featured: attrs.flag("data-featured"),
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_views(mut self, views: i64) -> Self {
        self.views = views;
        self
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Case-insensitive match of an already lowercased term against title,
    /// excerpt and tags.
    pub fn matches_term(&self, term: &str) -> bool {
        term.is_empty()
            || self.title.to_lowercase().contains(term)
            || self.excerpt.to_lowercase().contains(term)
            || self.tags.iter().any(|t| t.to_lowercase().contains(term))
    }
}
