//! List catalog categories.

use anyhow::{Context as _, Result};
use serde_json::json;

use crate::context::Context;

/// Run the categories command.
pub async fn run(ctx: &Context) -> Result<()> {
    let client = ctx.catalog_client()?;

    let spinner = ctx.output.spinner("Loading categories...");
    let result = client.categories().await;
    spinner.finish_and_clear();

    let categories = result.context("Failed to load categories")?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "categories": categories }));
        return Ok(());
    }

    ctx.output.header(&format!("Categories ({})", categories.len()));
    for category in &categories {
        ctx.output.list_item(&format!(
            "{}  {}",
            category.display_name(),
            console::style(format!("--category \"{}\"", category)).dim()
        ));
    }

    Ok(())
}
