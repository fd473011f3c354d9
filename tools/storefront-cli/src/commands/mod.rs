//! CLI command implementations.

pub mod categories;
pub mod checkout;
pub mod config;
pub mod featured;
pub mod product;
pub mod products;

use clap::{Args, Subcommand};
use storefront_commerce::search::{SortOption, FEATURED_LIMIT};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Case-insensitive title search.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show these categories (repeatable).
    #[arg(short, long)]
    pub category: Vec<String>,

    /// Lowest price, inclusive.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Highest price, inclusive.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Sort order: title, price-asc, price-desc, rating.
    #[arg(long, default_value = "title")]
    pub sort: SortOption,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: u64,
}

/// Arguments for the featured command.
#[derive(Args)]
pub struct FeaturedArgs {
    /// Number of products to show.
    #[arg(short, long, default_value_t = FEATURED_LIMIT)]
    pub limit: usize,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Item to buy as ID or ID:QTY (repeatable).
    #[arg(short, long = "item", value_name = "ID[:QTY]", required = true)]
    pub items: Vec<String>,

    /// Contact email.
    #[arg(long)]
    pub email: String,

    /// First name.
    #[arg(long)]
    pub first_name: String,

    /// Last name.
    #[arg(long)]
    pub last_name: String,

    /// Street address.
    #[arg(long)]
    pub address: String,

    /// City.
    #[arg(long)]
    pub city: String,

    /// ZIP or postal code.
    #[arg(long)]
    pub zip: String,

    /// Card number (test mode, never charged).
    #[arg(long, default_value = "4242 4242 4242 4242")]
    pub card: String,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
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
    /// Validate the config file.
    Validate,
}
