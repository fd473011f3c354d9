//! Storefront CLI - browse the product catalog and place simulated orders.
//!
//! Commands:
//! - `storefront products` - List products with search, filters and sorting
//! - `storefront product` - Show a single product
//! - `storefront categories` - List categories
//! - `storefront featured` - Show top-rated products
//! - `storefront checkout` - Build a cart and place a simulated order
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CheckoutArgs, ConfigArgs, FeaturedArgs, ProductArgs, ProductsArgs};

/// Storefront CLI - Browse the catalog and check out from the terminal
#[derive(Parser)]
#[command(name = "storefront")]
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
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products(ProductsArgs),

    /// Show a single product
    Product(ProductArgs),

    /// List categories
    Categories,

    /// Show top-rated products
    Featured(FeaturedArgs),

    /// Place a simulated order
    Checkout(CheckoutArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let logging = if cli.verbose {
        ctx.config.logging.verbose()
    } else {
        ctx.config.logging
    };
    if let Err(e) = storefront_observability::init(&logging) {
        ctx.output.warn(&format!("Logging disabled: {}", e));
    }
    tracing::debug!(config = ?ctx.config_path, "configuration loaded");

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Product(args) => commands::product::run(args, &ctx).await,
        Commands::Categories => commands::categories::run(&ctx).await,
        Commands::Featured(args) => commands::featured::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
