//! Top-rated products for the landing view.

use anyhow::Result;
use serde_json::json;
use storefront_catalog::load_catalog;
use storefront_commerce::search::featured;

use super::FeaturedArgs;
use crate::context::Context;
use crate::output::{rating_stars, truncate};

/// Run the featured command.
pub async fn run(args: FeaturedArgs, ctx: &Context) -> Result<()> {
    let client = ctx.catalog_client()?;

    let spinner = ctx.output.spinner("Loading featured products...");
    let snapshot = load_catalog(&client).await;
    spinner.finish_and_clear();

    if let Some(err) = &snapshot.error {
        ctx.output.warn(&format!("Unable to load products: {}", err));
    }

    let picks = featured(&snapshot.products, args.limit);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "products": picks,
            "categories": snapshot.categories,
        }));
        return Ok(());
    }

    ctx.output.header("Featured Products");
    for (rank, product) in picks.iter().enumerate() {
        ctx.output.list_item(&format!(
            "{:>2}. {} {} {}",
            rank + 1,
            truncate(&product.title, 40),
            product.price,
            rating_stars(product.rating)
        ));
    }

    if !snapshot.categories.is_empty() {
        ctx.output.header("Shop by Category");
        for category in &snapshot.categories {
            ctx.output.list_item(&category.display_name());
        }
    }

    Ok(())
}
