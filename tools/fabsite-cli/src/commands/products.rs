//! Product listing and view mode commands.

use anyhow::{anyhow, Result};
use fabsite_catalog::catalog::Product;
use fabsite_catalog::controller::{CatalogAction, CatalogController, CatalogOutcome};
use fabsite_catalog::search::SortKey;
use fabsite_catalog::view::{ViewMode, ViewPreference};
use serde::Serialize;
use tracing::debug;

use super::{ProductsArgs, ViewArgs};
use crate::context::Context;
use crate::output::{badge_label, favorite_marker, truncate};

#[derive(Serialize)]
struct ProductRow<'a> {
    #[serde(flatten)]
    product: &'a Product,
    favorite: bool,
}

#[derive(Serialize)]
struct Listing<'a> {
    visible: usize,
    sort: SortKey,
    view: ViewMode,
    products: Vec<ProductRow<'a>>,
}

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let mut catalog = ctx.catalog()?;

    let actions = build_actions(&args, catalog.filters().min_price(), catalog.filters().max_price())?;
    for action in actions {
        if let CatalogOutcome::Refreshed { visible } = catalog.dispatch(action)? {
            debug!(visible, "Catalog refreshed");
        }
    }

    let view = match args.view.as_deref() {
        Some(mode) => parse_view(mode)?,
        None => catalog.view_mode(),
    };
    let visible = catalog.visible();

    if ctx.output.is_json() {
        let rows = visible
            .iter()
            .map(|product| ProductRow {
                product,
                favorite: catalog.is_favorite(&product.id),
            })
            .collect();
        ctx.output.json(&Listing {
            visible: visible.len(),
            sort: catalog.sort_key(),
            view,
            products: rows,
        });
        return Ok(());
    }

    ctx.output.header(&format!(
        "Products ({} found, sorted by {})",
        visible.len(),
        catalog.sort_key().display_name()
    ));
    match view {
        ViewMode::Grid => print_grid(&visible, &catalog, ctx),
        ViewMode::List => print_list(&visible, &catalog, ctx),
    }
    if visible.is_empty() {
        ctx.output.info("No products match the selected filters");
    }

    Ok(())
}

/// Turn command-line flags into the page actions a visitor would take.
fn build_actions(args: &ProductsArgs, min: i64, max: i64) -> Result<Vec<CatalogAction>> {
    let mut actions = Vec::new();
    for category in &args.categories {
        actions.push(CatalogAction::ToggleCategory {
            category: category.clone(),
            checked: true,
        });
    }
    for brand in &args.brands {
        actions.push(CatalogAction::ToggleBrand {
            brand: brand.clone(),
            checked: true,
        });
    }
    if args.min_price.is_some() || args.max_price.is_some() {
        actions.push(CatalogAction::SetPriceRange {
            min: args.min_price.unwrap_or(min),
            max: args.max_price.unwrap_or(max),
        });
    }
    actions.push(CatalogAction::ApplyFilters);
    if let Some(sort) = &args.sort {
        let key = SortKey::parse(sort);
        if key.as_str() != sort.trim() {
            return Err(anyhow!(
                "Unknown sort '{}'. Expected one of: {}",
                sort,
                SortKey::all().map(|k| k.as_str()).join(", ")
            ));
        }
        actions.push(CatalogAction::SetSort(key));
    }
    Ok(actions)
}

fn print_grid(products: &[Product], catalog: &CatalogController, ctx: &Context) {
    let widths = [1, 14, 32, 16, 14, 16];
    ctx.output
        .table_row(&["", "ID", "NAME", "CATEGORY", "BRAND", "PRICE"], &widths);
    for product in products {
        let marker = favorite_marker(catalog.is_favorite(&product.id));
        let name = truncate(&product.name, 32);
        let price = product.display_price();
        ctx.output.table_row(
            &[
                &marker,
                product.id.as_str(),
                &name,
                &product.category,
                &product.brand,
                &price,
            ],
            &widths,
        );
    }
}

fn print_list(products: &[Product], catalog: &CatalogController, ctx: &Context) {
    let width = ctx.output.term_width().clamp(40, 120);
    for product in products {
        let badges: Vec<String> = product.badges.iter().map(|b| badge_label(b.as_str())).collect();
        ctx.output.list_item(&format!(
            "{} {} [{}] {}",
            favorite_marker(catalog.is_favorite(&product.id)),
            product.name,
            product.id,
            badges.join(" ")
        ));
        ctx.output.kv("price", &product.display_price());
        ctx.output.kv("category", &product.category);
        ctx.output.kv("brand", &product.brand);
        if !product.description.is_empty() {
            ctx.output
                .kv("description", &truncate(&product.description, width - 20));
        }
    }
}

fn parse_view(mode: &str) -> Result<ViewMode> {
    ViewMode::parse(mode).ok_or_else(|| anyhow!("Unknown view mode '{}'. Expected grid or list", mode))
}

/// Run the view command.
pub fn set_view(args: ViewArgs, ctx: &Context) -> Result<()> {
    let mode = parse_view(&args.mode)?;
    let mut preference = ViewPreference::load(ctx.open_cache()?);
    preference.set(mode)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "view": mode }));
    } else {
        ctx.output.success(&format!("Catalog view set to {}", mode));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ProductsArgs {
        ProductsArgs {
            categories: vec!["A".into()],
            brands: Vec::new(),
            min_price: None,
            max_price: Some(10_000),
            sort: Some("price-desc".into()),
            view: None,
        }
    }

    #[test]
    fn test_build_actions() {
        let actions = build_actions(&args(), 0, 10_000_000).unwrap();
        assert_eq!(
            actions,
            vec![
                CatalogAction::ToggleCategory {
                    category: "A".into(),
                    checked: true
                },
                CatalogAction::SetPriceRange { min: 0, max: 10_000 },
                CatalogAction::ApplyFilters,
                CatalogAction::SetSort(SortKey::PriceDesc),
            ]
        );
    }

    #[test]
    fn test_unknown_sort_is_rejected() {
        let mut a = args();
        a.sort = Some("rating".into());
        assert!(build_actions(&a, 0, 1).is_err());
    }

    #[test]
    fn test_parse_view() {
        assert_eq!(parse_view("LIST").unwrap(), ViewMode::List);
        assert!(parse_view("cards").is_err());
    }
}
