//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    ctx.output.info("[data]");
    ctx.output.kv("products", &ctx.config.data.products);
    ctx.output.kv("news", &ctx.config.data.news);

    ctx.output.info("[storage]");
    ctx.output.kv("path", &ctx.config.storage.path);

    ctx.output.info("[catalog]");
    ctx.output.kv("auto_apply", &ctx.config.catalog.auto_apply.to_string());
    ctx.output.kv("default_sort", ctx.config.catalog.default_sort.as_str());
    ctx.output.kv("min_price", &ctx.config.catalog.min_price.to_string());
    ctx.output.kv("max_price", &ctx.config.catalog.max_price.to_string());

    ctx.output.info("[news]");
    ctx.output
        .kv("items_per_page", &ctx.config.news.items_per_page.to_string());
    ctx.output.kv("debounce_ms", &ctx.config.news.debounce_ms.to_string());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let name = if ctx.output.is_json() {
        "fabsite.json"
    } else {
        "fabsite.toml"
    };
    let config_path = ctx.cwd.join(name);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if ctx.output.is_json() {
        CliConfig::default().save(&config_path.to_string_lossy())?;
        ctx.output
            .json(&serde_json::json!({ "created": config_path.display().to_string() }));
    } else {
        fs::write(&config_path, generate_default_config())?;
        ctx.output.success(&format!("Created: {}", config_path.display()));
    }

    Ok(())
}
