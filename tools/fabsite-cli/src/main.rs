//! Fabsite CLI - browse the equipment catalog and news from data files.
//!
//! Commands:
//! - `fabsite products` - Filter, sort and list products
//! - `fabsite cart` - Add, show, remove and clear cart entries
//! - `fabsite favorite` - Toggle a favorite product
//! - `fabsite view` - Set the catalog display mode
//! - `fabsite news` - Browse news by category, search term and page
//! - `fabsite subscribe` - Subscribe to the newsletter
//! - `fabsite order` - Submit an equipment order request
//! - `fabsite config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    CartArgs, ConfigArgs, FavoriteArgs, NewsArgs, OrderArgs, ProductsArgs, SubscribeArgs, ViewArgs,
};

/// Fabsite CLI - browse the equipment catalog and news
#[derive(Parser)]
#[command(name = "fabsite")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter, sort and list products
    Products(ProductsArgs),

    /// Manage the shopping cart
    Cart(CartArgs),

    /// Toggle a product in favorites
    Favorite(FavoriteArgs),

    /// Set the catalog display mode
    View(ViewArgs),

    /// Browse news
    News(NewsArgs),

    /// Subscribe to the newsletter
    Subscribe(SubscribeArgs),

    /// Submit an equipment order request
    Order(OrderArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Favorite(args) => commands::cart::favorite(args, &ctx),
        Commands::View(args) => commands::products::set_view(args, &ctx),
        Commands::News(args) => commands::news::run(args, &ctx),
        Commands::Subscribe(args) => commands::forms::subscribe(args, &ctx),
        Commands::Order(args) => commands::forms::order(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
