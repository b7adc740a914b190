//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod forms;
pub mod news;
pub mod products;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Category to include (repeatable).
    #[arg(short, long = "category")]
    pub categories: Vec<String>,

    /// Brand to include (repeatable).
    #[arg(short, long = "brand")]
    pub brands: Vec<String>,

    /// Lowest price.
    #[arg(long)]
    pub min_price: Option<i64>,

    /// Highest price.
    #[arg(long)]
    pub max_price: Option<i64>,

    /// Sort order: price-asc, price-desc, name, newest, popular.
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Display mode for this listing: grid or list.
    #[arg(long)]
    pub view: Option<String>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Add one unit of a product.
    Add {
        /// Product ID.
        id: String,
    },
    /// Show cart contents.
    Show,
    /// Set the quantity of a product already in the cart.
    SetQty {
        /// Product ID.
        id: String,
        /// New quantity, at least 1.
        quantity: i64,
    },
    /// Remove a product from the cart.
    Remove {
        /// Product ID.
        id: String,
    },
    /// Empty the cart.
    Clear,
}

/// Arguments for the favorite command.
#[derive(Args)]
pub struct FavoriteArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the view command.
#[derive(Args)]
pub struct ViewArgs {
    /// Display mode: grid or list.
    pub mode: String,
}

/// Arguments for the news command.
#[derive(Args)]
pub struct NewsArgs {
    /// Category, or "all".
    #[arg(short, long)]
    pub category: Option<String>,

    /// Search term matched against title, excerpt and tags.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort order: default, newest, oldest, popular.
    #[arg(long)]
    pub sort: Option<String>,

    /// Page number.
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Print share links for: vk, telegram, twitter, linkedin.
    #[arg(long, requires = "url")]
    pub share: Option<String>,

    /// Page URL used as the base of share links.
    #[arg(long)]
    pub url: Option<String>,
}

/// Arguments for the subscribe command.
#[derive(Args)]
pub struct SubscribeArgs {
    /// Email address.
    pub email: String,

    /// Where the signup came from.
    #[arg(long, default_value = "cli")]
    pub source: String,
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Contact name.
    #[arg(long)]
    pub name: String,

    /// Contact email.
    #[arg(long)]
    pub email: String,

    /// Contact phone.
    #[arg(long)]
    pub phone: String,

    /// Product or service requested.
    #[arg(long)]
    pub product: String,

    /// Company name.
    #[arg(long)]
    pub company: Option<String>,

    /// Free-form message.
    #[arg(short, long)]
    pub message: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
