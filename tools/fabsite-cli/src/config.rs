//! CLI configuration.

use anyhow::{Context, Result};
use fabsite_catalog::controller::{CatalogSettings, NewsSettings};
use fabsite_catalog::debounce::DEFAULT_DEBOUNCE;
use fabsite_catalog::search::{
    FilterState, SortKey, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE, NEWS_ITEMS_PER_PAGE,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Config file names, searched from the working directory upward.
pub const CONFIG_NAMES: [&str; 3] = ["fabsite.toml", ".fabsite.toml", "fabsite.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Data file locations.
    #[serde(default)]
    pub data: DataConfig,

    /// Persisted state location.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Catalog page behavior.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// News page behavior.
    #[serde(default)]
    pub news: NewsConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    pub fn catalog_settings(&self) -> CatalogSettings {
        CatalogSettings {
            auto_apply: self.catalog.auto_apply,
            sort: self.catalog.default_sort,
            filters: FilterState::new()
                .with_price_range(self.catalog.min_price, self.catalog.max_price),
        }
    }

    pub fn news_settings(&self) -> NewsSettings {
        NewsSettings {
            items_per_page: self.news.items_per_page,
            debounce: Duration::from_millis(self.news.debounce_ms),
        }
    }
}

/// Data file locations. Relative paths resolve against the config file's
/// directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON array of product attribute maps.
    #[serde(default = "default_products_path")]
    pub products: String,

    /// JSON array of news attribute maps.
    #[serde(default = "default_news_path")]
    pub news: String,
}

fn default_products_path() -> String {
    "data/products.json".to_string()
}

fn default_news_path() -> String {
    "data/news.json".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            products: default_products_path(),
            news: default_news_path(),
        }
    }
}

/// Where cart, favorites and view mode are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_path")]
    pub path: String,
}

fn default_storage_path() -> String {
    ".fabsite/storage.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

/// Catalog page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Apply filter edits immediately.
    #[serde(default = "default_true")]
    pub auto_apply: bool,

    #[serde(default)]
    pub default_sort: SortKey,

    #[serde(default = "default_min_price")]
    pub min_price: i64,

    #[serde(default = "default_max_price")]
    pub max_price: i64,
}

fn default_true() -> bool {
    true
}

fn default_min_price() -> i64 {
    DEFAULT_MIN_PRICE
}

fn default_max_price() -> i64 {
    DEFAULT_MAX_PRICE
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            auto_apply: true,
            default_sort: SortKey::default(),
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
        }
    }
}

/// News page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsConfig {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,

    /// Search input delay in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_items_per_page() -> usize {
    NEWS_ITEMS_PER_PAGE
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE.as_millis() as u64
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Generate a default fabsite.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Fabsite configuration

[data]
products = "data/products.json"
news = "data/news.json"

[storage]
path = ".fabsite/storage.json"

[catalog]
auto_apply = true
default_sort = "popular"
min_price = {min}
max_price = {max}

[news]
items_per_page = {per_page}
debounce_ms = {debounce}
"#,
        min = DEFAULT_MIN_PRICE,
        max = DEFAULT_MAX_PRICE,
        per_page = NEWS_ITEMS_PER_PAGE,
        debounce = default_debounce_ms(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let parsed: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(parsed, CliConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let parsed: CliConfig = toml::from_str(
            r#"
[catalog]
auto_apply = false
default_sort = "price-desc"
"#,
        )
        .unwrap();
        assert!(!parsed.catalog.auto_apply);
        assert_eq!(parsed.catalog.default_sort, SortKey::PriceDesc);
        assert_eq!(parsed.catalog.max_price, DEFAULT_MAX_PRICE);
        assert_eq!(parsed.news.items_per_page, 5);
        assert_eq!(parsed.data.products, "data/products.json");
    }

    #[test]
    fn test_settings() {
        let mut config = CliConfig::default();
        config.catalog.min_price = 500;
        config.catalog.max_price = 100;
        let settings = config.catalog_settings();
        assert_eq!(settings.filters.min_price(), 100);
        assert_eq!(settings.filters.max_price(), 500);
        assert_eq!(config.news_settings().debounce, Duration::from_millis(300));
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fabsite.json");
        let path = path.to_str().unwrap();
        let mut config = CliConfig::default();
        config.news.items_per_page = 8;
        config.save(path).unwrap();
        assert_eq!(CliConfig::load(path).unwrap(), config);
    }
}
