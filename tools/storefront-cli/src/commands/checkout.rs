//! Place a simulated order.

use anyhow::{bail, Context as _, Result};
use chrono::{Local, TimeZone};
use dialoguer::Confirm;
use futures::future::try_join_all;
use serde_json::json;
use storefront_commerce::cart::{CartPricing, CartStore};
use storefront_commerce::checkout::{Address, Checkout, CheckoutDetails, OrderConfirmation};
use storefront_commerce::ProductId;

use super::CheckoutArgs;
use crate::context::Context;
use crate::output::truncate;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let requested = args
        .items
        .iter()
        .map(|item| parse_item(item.as_str()))
        .collect::<Result<Vec<_>>>()?;

    let client = ctx.catalog_client()?;
    let spinner = ctx.output.spinner("Loading cart items...");
    let fetched = try_join_all(requested.iter().map(|(id, _)| client.product(*id))).await;
    spinner.finish_and_clear();
    let products = fetched.context("Failed to load cart items")?;

    let mut store = CartStore::new();
    let output = ctx.output.clone();
    store.subscribe(move |cart| {
        output.debug(&format!(
            "cart: {} item(s), subtotal {}",
            cart.item_count(),
            cart.subtotal()
        ))
    });
    for (product, (_, quantity)) in products.into_iter().zip(&requested) {
        store.add_item(product, *quantity);
    }

    let mut checkout = Checkout::new(ctx.config.checkout_config());
    let details = CheckoutDetails {
        email: args.email,
        shipping_address: Address::new(
            args.first_name,
            args.last_name,
            args.address,
            args.city,
            args.zip,
        ),
        card_number: args.card,
    };

    let pricing = store.pricing(&checkout.config().pricing);
    if !ctx.output.is_json() {
        print_summary(&pricing, &details, ctx);
    }

    if !args.yes && !ctx.output.is_json() {
        ctx.output.info("");
        let confirmed = Confirm::new()
            .with_prompt(format!("Place order for {}?", pricing.grand_total))
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Checkout cancelled");
            return Ok(());
        }
    }

    let spinner = ctx.output.spinner("Processing order...");
    let result = checkout.submit(&mut store, details).await;
    spinner.finish_and_clear();
    let order = result.context("Checkout failed")?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "order_number": order.order_number(),
            "order": order,
        }));
        return Ok(());
    }

    print_confirmation(&order, ctx);
    Ok(())
}

/// Parse `ID` or `ID:QTY`.
fn parse_item(spec: &str) -> Result<(ProductId, i64)> {
    let (id, quantity) = match spec.split_once(':') {
        Some((id, quantity)) => (id, quantity),
        None => (spec, "1"),
    };

    let id: ProductId = id
        .parse()
        .with_context(|| format!("Invalid item '{}'", spec))?;
    let quantity: i64 = quantity
        .trim()
        .parse()
        .with_context(|| format!("Invalid quantity in item '{}'", spec))?;
    if quantity < 1 {
        bail!("Quantity must be at least 1 in item '{}'", spec);
    }

    Ok((id, quantity))
}

fn print_summary(pricing: &CartPricing, details: &CheckoutDetails, ctx: &Context) {
    ctx.output.header("Order Summary");

    let widths = [40, 5, 12];
    ctx.output.table_row(&["ITEM", "QTY", "TOTAL"], &widths);
    for line in &pricing.line_items {
        ctx.output.table_row(
            &[
                truncate(&line.title, widths[0]).as_str(),
                line.quantity.to_string().as_str(),
                line.total.to_string().as_str(),
            ],
            &widths,
        );
    }

    ctx.output.info("");
    ctx.output.kv("Subtotal", &pricing.subtotal.to_string());
    ctx.output.kv("Shipping", &pricing.shipping_total.to_string());
    ctx.output.kv("Tax", &pricing.tax_total.to_string());
    ctx.output.kv("Total", &pricing.grand_total.to_string());

    ctx.output.info("");
    ctx.output.kv("Ship to", &details.shipping_address.full_name());
    ctx.output.kv("Address", &details.shipping_address.one_line());
    ctx.output.kv("Email", &details.email);
    if let Some(last4) = details.card_last4() {
        ctx.output.kv("Card", &format!("•••• {} (test mode)", last4));
    }
}

fn print_confirmation(order: &OrderConfirmation, ctx: &Context) {
    ctx.output.success("Order placed");
    ctx.output.kv("Order number", &order.order_number());
    ctx.output.kv("Items", &order.item_count().to_string());
    ctx.output.kv("Total", &order.pricing.grand_total.to_string());
    if let Some(placed) = Local.timestamp_opt(order.placed_at, 0).single() {
        ctx.output.kv("Placed", &placed.format("%Y-%m-%d %H:%M:%S").to_string());
    }
    ctx.output
        .info(&format!("A confirmation will be sent to {}", order.email));
}
