//! Catalog display mode.

use crate::error::CatalogError;
use fabsite_store::{Cache, Storage, VIEW_KEY};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Grid or list layout of the product container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Some(ViewMode::Grid),
            "list" => Some(ViewMode::List),
            _ => None,
        }
    }

    /// CSS class toggled on the product container.
    pub fn container_class(&self) -> Option<&'static str> {
        match self {
            ViewMode::Grid => None,
            ViewMode::List => Some("list-view"),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The persisted view preference.
///
/// The mode is stored as a bare `grid` or `list` string rather than JSON.
/// A JSON-quoted value is read too.
#[derive(Debug, Clone)]
pub struct ViewPreference {
    mode: ViewMode,
    cache: Cache,
}

impl ViewPreference {
    /// Load the stored mode. Missing or unknown values mean grid.
    pub fn load(cache: Cache) -> Self {
        let mode = match cache.storage().get_item(VIEW_KEY) {
            Ok(Some(raw)) => parse_stored(&raw).unwrap_or_else(|| {
                warn!(key = VIEW_KEY, value = %raw, "Unknown view mode, using grid");
                ViewMode::default()
            }),
            Ok(None) => ViewMode::default(),
            Err(e) => {
                warn!(key = VIEW_KEY, error = %e, "Failed to read view mode, using grid");
                ViewMode::default()
            }
        };
        Self { mode, cache }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Switch mode and persist it. Returns whether the mode changed.
    pub fn set(&mut self, mode: ViewMode) -> Result<bool, CatalogError> {
        let changed = self.mode != mode;
        self.mode = mode;
        self.cache
            .storage()
            .set_item(VIEW_KEY, mode.as_str())
            .map_err(|e| CatalogError::persist(VIEW_KEY, e))?;
        Ok(changed)
    }
}

fn parse_stored(raw: &str) -> Option<ViewMode> {
    let raw = raw.trim();
    let unquoted = raw
        .strip_prefix('"')
        .and_then(|r| r.strip_suffix('"'))
        .unwrap_or(raw);
    ViewMode::parse(unquoted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fabsite_store::MemoryStorage;
    use std::rc::Rc;

    #[test]
    fn test_default_is_grid() {
        let pref = ViewPreference::load(Cache::in_memory());
        assert_eq!(pref.mode(), ViewMode::Grid);
    }

    #[test]
    fn test_restores_stored_mode() {
        for stored in ["list", r#""list""#, " LIST "] {
            let storage = MemoryStorage::with_items([(VIEW_KEY, stored)]);
            let pref = ViewPreference::load(Cache::new(Rc::new(storage)));
            assert_eq!(pref.mode(), ViewMode::List, "stored {:?}", stored);
        }
    }

    #[test]
    fn test_unknown_stored_mode_is_grid() {
        let storage = MemoryStorage::with_items([(VIEW_KEY, "tiles")]);
        let pref = ViewPreference::load(Cache::new(Rc::new(storage)));
        assert_eq!(pref.mode(), ViewMode::Grid);
    }

    #[test]
    fn test_set_persists() {
        let cache = Cache::in_memory();
        let mut pref = ViewPreference::load(cache.clone());
        assert!(pref.set(ViewMode::List).unwrap());
        assert!(!pref.set(ViewMode::List).unwrap());
        assert_eq!(
            cache.storage().get_item(VIEW_KEY).unwrap().as_deref(),
            Some("list")
        );

        let reloaded = ViewPreference::load(cache);
        assert_eq!(reloaded.mode(), ViewMode::List);
        assert_eq!(reloaded.mode().container_class(), Some("list-view"));
    }
}
