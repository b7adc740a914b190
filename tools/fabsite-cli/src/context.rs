//! CLI execution context.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context as _, Result};
use fabsite_catalog::catalog::{Attributes, Product};
use fabsite_catalog::controller::{CatalogController, NewsController};
use fabsite_catalog::news::NewsItem;
use fabsite_store::{Cache, FileStorage};
use tracing::debug;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Directory relative data and storage paths resolve against.
    pub base_dir: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, base_dir) = if let Some(path) = config_path {
            let base = Path::new(path)
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.clone());
            (CliConfig::load(path)?, base)
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd) {
                Some((path, config)) => {
                    debug!(path = %path.display(), "Using config");
                    let base = path.parent().map(Path::to_path_buf).unwrap_or_else(|| cwd.clone());
                    (config, base)
                }
                None => (CliConfig::default(), cwd.clone()),
            }
        };

        Ok(Self {
            config,
            output,
            cwd,
            base_dir,
        })
    }

    /// Resolve a configured path against the config directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.base_dir.join(path)
        }
    }

    /// Open the file-backed store for cart, favorites and view mode.
    pub fn open_cache(&self) -> Result<Cache> {
        let path = self.resolve_path(&self.config.storage.path);
        let storage = FileStorage::open(&path)
            .with_context(|| format!("Failed to open storage: {}", path.display()))?;
        Ok(Cache::new(Rc::new(storage)))
    }

    pub fn load_products(&self) -> Result<Vec<Product>> {
        let attrs = read_attribute_file(&self.resolve_path(&self.config.data.products))?;
        Ok(attrs.iter().map(Product::from_attributes).collect())
    }

    pub fn load_news(&self) -> Result<Vec<NewsItem>> {
        let attrs = read_attribute_file(&self.resolve_path(&self.config.data.news))?;
        Ok(attrs.iter().map(NewsItem::from_attributes).collect())
    }

    /// Catalog controller over the configured products and storage.
    pub fn catalog(&self) -> Result<CatalogController> {
        let products = self.load_products()?;
        debug!(count = products.len(), "Loaded products");
        Ok(CatalogController::new(
            products,
            self.open_cache()?,
            self.config.catalog_settings(),
        ))
    }

    pub fn news(&self) -> Result<NewsController> {
        let items = self.load_news()?;
        debug!(count = items.len(), "Loaded news items");
        Ok(NewsController::new(items, self.config.news_settings()))
    }
}

/// Find config file in directory tree.
pub fn find_config(start: &Path) -> Option<(PathBuf, CliConfig)> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                    return Some((config_path, config));
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Read a JSON array of `data-*` attribute maps.
fn read_attribute_file(path: &Path) -> Result<Vec<Attributes>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse data file: {}", path.display()))
}
