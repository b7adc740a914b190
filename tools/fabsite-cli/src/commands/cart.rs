//! Cart and favorites commands.

use anyhow::{bail, Result};
use fabsite_catalog::cart::CartStore;
use fabsite_catalog::controller::{CatalogAction, CatalogOutcome};
use fabsite_catalog::ProductId;

use super::{CartArgs, CartCommand, FavoriteArgs};
use crate::context::Context;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CartCommand::Add { id } => add(&id, ctx),
        CartCommand::Show => show(ctx),
        CartCommand::SetQty { id, quantity } => set_qty(&id, quantity, ctx),
        CartCommand::Remove { id } => remove(&id, ctx),
        CartCommand::Clear => clear(ctx),
    }
}

fn add(id: &str, ctx: &Context) -> Result<()> {
    let mut catalog = ctx.catalog()?;
    match catalog.dispatch(CatalogAction::AddToCart(ProductId::new(id)))? {
        CatalogOutcome::AddedToCart {
            id,
            quantity,
            cart_count,
        } => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "id": id,
                    "quantity": quantity,
                    "cart_count": cart_count,
                }));
            } else {
                let name = catalog
                    .product(&id)
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| id.to_string());
                ctx.output.success(&format!(
                    "Added {} to cart (quantity {}, {} items in cart)",
                    name, quantity, cart_count
                ));
            }
            Ok(())
        }
        _ => bail!("Unknown product: {}", id),
    }
}

fn show(ctx: &Context) -> Result<()> {
    let store = CartStore::open(ctx.open_cache()?);
    let cart = store.cart();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "entries": cart.entries(),
            "total_quantity": cart.total_quantity(),
        }));
        return Ok(());
    }

    if cart.is_empty() {
        ctx.output.info("Cart is empty");
        return Ok(());
    }

    ctx.output
        .header(&format!("Cart ({} items)", cart.total_quantity()));
    let widths = [14, 32, 16, 4];
    ctx.output.table_row(&["ID", "NAME", "PRICE", "QTY"], &widths);
    for entry in cart.entries() {
        let quantity = entry.quantity.to_string();
        ctx.output.table_row(
            &[entry.id.as_str(), &entry.name, &entry.price, &quantity],
            &widths,
        );
    }

    Ok(())
}

fn set_qty(id: &str, quantity: i64, ctx: &Context) -> Result<()> {
    let mut store = CartStore::open(ctx.open_cache()?);
    if !store.update_quantity(&ProductId::new(id), quantity)? {
        bail!("Product not in cart: {}", id);
    }
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "id": id,
            "quantity": quantity,
            "cart_count": store.cart().total_quantity(),
        }));
    } else {
        ctx.output
            .success(&format!("Set {} quantity to {}", id, quantity));
    }
    Ok(())
}

fn remove(id: &str, ctx: &Context) -> Result<()> {
    let mut store = CartStore::open(ctx.open_cache()?);
    if !store.remove(&ProductId::new(id))? {
        bail!("Product not in cart: {}", id);
    }
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "removed": id }));
    } else {
        ctx.output.success(&format!("Removed {} from cart", id));
    }
    Ok(())
}

fn clear(ctx: &Context) -> Result<()> {
    let mut store = CartStore::open(ctx.open_cache()?);
    store.clear()?;
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "cleared": true }));
    } else {
        ctx.output.success("Cart cleared");
    }
    Ok(())
}

/// Run the favorite command.
pub fn favorite(args: FavoriteArgs, ctx: &Context) -> Result<()> {
    let mut catalog = ctx.catalog()?;
    match catalog.dispatch(CatalogAction::ToggleFavorite(ProductId::new(&args.id)))? {
        CatalogOutcome::FavoriteToggled { id, favorite } => {
            if ctx.output.is_json() {
                ctx.output
                    .json(&serde_json::json!({ "id": id, "favorite": favorite }));
            } else if favorite {
                ctx.output.success(&format!("Added {} to favorites", id));
            } else {
                ctx.output.success(&format!("Removed {} from favorites", id));
            }
            Ok(())
        }
        _ => bail!("Unknown product: {}", args.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Output;

    fn context(dir: &std::path::Path) -> Context {
        let config_path = dir.join("fabsite.toml");
        std::fs::write(&config_path, "").unwrap();
        Context::load(config_path.to_str(), Output::new(true)).unwrap()
    }

    #[test]
    fn test_set_qty_updates_stored_cart() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        let mut store = CartStore::open(ctx.open_cache().unwrap());
        store
            .add_to_cart(ProductId::new("pvd-200"), "PVD-200", "4 500 000 ₽", "")
            .unwrap();

        set_qty("pvd-200", 3, &ctx).unwrap();
        assert!(set_qty("cvd-100", 3, &ctx).is_err());
        assert!(set_qty("pvd-200", 0, &ctx).is_err());

        let reopened = CartStore::open(ctx.open_cache().unwrap());
        assert_eq!(reopened.cart().total_quantity(), 3);
    }
}
