//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CATALOG_URL_ENV, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }
    if std::env::var_os(CATALOG_URL_ENV).is_some() {
        ctx.output.kv("override", CATALOG_URL_ENV);
    }

    let config = &ctx.config;

    ctx.output.info("[catalog]");
    ctx.output.kv("base_url", &config.catalog.base_url);
    ctx.output.kv("timeout_secs", &config.catalog.timeout_secs.to_string());

    ctx.output.info("[checkout]");
    ctx.output.kv("delay_ms", &config.checkout.delay_ms.to_string());
    ctx.output.kv("shipping_flat", &format!("{:.2}", config.checkout.shipping_flat));
    ctx.output.kv("tax_rate_percent", &config.checkout.tax_rate_percent.to_string());

    ctx.output.info("[logging]");
    ctx.output.kv("level", config.logging.level.as_directive());
    ctx.output.kv(
        "format",
        &format!("{:?}", config.logging.format).to_lowercase(),
    );

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = ctx.config.validate();

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
