//! List and filter catalog products.

use anyhow::Result;
use serde_json::json;
use storefront_catalog::{load_catalog, CatalogSnapshot, FetchError};
use storefront_commerce::catalog::{Category, Product};
use storefront_commerce::money::Money;
use storefront_commerce::search::{FilterState, PriceRange};

use super::ProductsArgs;
use crate::context::Context;
use crate::output::{rating_stars, truncate};

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let client = ctx.catalog_client()?;

    let spinner = ctx.output.spinner("Loading products...");
    let snapshot = match args.category.as_slice() {
        // A single category is served by its own endpoint.
        [category] => match client.products_in_category(&Category::new(category.as_str())).await {
            Ok(products) => CatalogSnapshot {
                products,
                categories: vec![Category::new(category.as_str())],
                error: None,
            },
            Err(err) => CatalogSnapshot {
                error: Some(err),
                ..CatalogSnapshot::default()
            },
        },
        _ => load_catalog(&client).await,
    };
    spinner.finish_and_clear();

    if let Some(err) = &snapshot.error {
        ctx.output.warn(&format!("Unable to load products: {}", err));
    }

    let filters = build_filters(&args, &snapshot.products);
    let results = filters.apply(&snapshot.products);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "filters": filters.to_query_pairs(),
            "price_range": [filters.price_range.min.to_decimal(), filters.price_range.max.to_decimal()],
            "count": results.len(),
            "products": results,
            "error": snapshot.error.as_ref().map(FetchError::to_string),
        }));
        return Ok(());
    }

    ctx.output.header(&format!("Products ({})", results.len()));
    ctx.output.kv("Sort", filters.sort.display_name());
    ctx.output.kv(
        "Price",
        &format!("{} - {}", filters.price_range.min, filters.price_range.max),
    );
    if filters.active_filter_count() > 0 {
        ctx.output.kv("Active filters", &filters.active_filter_count().to_string());
    }
    print_table(&results, ctx);

    if results.is_empty() && snapshot.error.is_none() {
        ctx.output.info("No products match your filters.");
    }

    Ok(())
}

/// Start from the catalog-wide defaults and layer the command line on top.
fn build_filters(args: &ProductsArgs, products: &[Product]) -> FilterState {
    let mut filters = FilterState::for_products(products).with_sort(args.sort);
    if let Some(search) = &args.search {
        filters = filters.with_search(search.as_str());
    }
    for category in &args.category {
        filters = filters.with_category(category.as_str());
    }

    let fitted = filters.price_range;
    let currency = fitted.min.currency;
    let min = args
        .min_price
        .map(|p| Money::from_decimal(p.max(0.0), currency))
        .unwrap_or(fitted.min);
    let max = args
        .max_price
        .map(|p| Money::from_decimal(p.max(0.0), currency))
        .unwrap_or(fitted.max);
    filters.with_price_range(PriceRange::new(min, max))
}

fn print_table(products: &[Product], ctx: &Context) {
    let widths = [5, 40, 18, 10, 20];
    ctx.output.table_row(&["ID", "TITLE", "CATEGORY", "PRICE", "RATING"], &widths);
    for product in products {
        ctx.output.table_row(
            &[
                product.id.to_string().as_str(),
                truncate(&product.title, widths[1]).as_str(),
                product.category.display_name().as_str(),
                product.price.to_string().as_str(),
                rating_stars(product.rating).as_str(),
            ],
            &widths,
        );
    }
}
