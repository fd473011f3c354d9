//! Show one product.

use anyhow::{Context as _, Result};
use serde_json::json;
use storefront_catalog::find_product;
use storefront_commerce::ProductId;

use super::ProductArgs;
use crate::context::Context;
use crate::output::rating_stars;

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let client = ctx.catalog_client()?;
    let id = ProductId::new(args.id);

    let spinner = ctx.output.spinner("Loading product...");
    let result = find_product(&client, id).await;
    spinner.finish_and_clear();

    let product = result.with_context(|| format!("Failed to load product {}", id))?;

    let Some(product) = product else {
        if ctx.output.is_json() {
            ctx.output.json(&json!({ "id": id, "found": false }));
        } else {
            ctx.output.warn(&format!("Product not found: {}", id));
            ctx.output.info("The product may have been removed. Try `storefront products`.");
        }
        return Ok(());
    };

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "found": true, "product": product }));
        return Ok(());
    }

    ctx.output.header(&product.title);
    ctx.output.kv("ID", &product.id.to_string());
    ctx.output.kv("Price", &product.price.to_string());
    ctx.output.kv("Category", &product.category.display_name());
    ctx.output.kv("Rating", &rating_stars(product.rating));
    if !product.image.is_empty() {
        ctx.output.kv("Image", &product.image);
    }
    if !product.description.is_empty() {
        println!();
        println!("  {}", product.description);
    }

    Ok(())
}
