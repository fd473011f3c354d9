//! HTTP client for the storefront product catalog.
//!
//! The catalog is a read-only JSON service. [`CatalogClient`] issues one GET
//! per call with a bounded timeout and maps every failure to a
//! [`FetchError`]. Views depend on the [`CatalogSource`] trait so they can
//! run against [`InMemoryCatalog`] as well.
//!
//! # Example
//!
//! ```rust,no_run
//! use storefront_catalog::{load_catalog, CatalogClient, CatalogConfig};
//!
//! # async fn run() -> Result<(), storefront_catalog::FetchError> {
//! let client = CatalogClient::new(CatalogConfig::default())?;
//!
//! let snapshot = load_catalog(&client).await;
//! for product in &snapshot.products {
//!     println!("{} {}", product.title, product.price);
//! }
//!
//! let categories = client.categories().await?;
//! # let _ = categories;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod loader;
mod response;
mod source;

pub use client::{CatalogClient, CatalogConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::FetchError;
pub use loader::{find_product, load_catalog, CatalogSnapshot};
pub use response::Response;
pub use source::{CatalogSource, InMemoryCatalog};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        find_product, load_catalog, CatalogClient, CatalogConfig, CatalogSnapshot, CatalogSource,
        FetchError, InMemoryCatalog,
    };
}
