//! Catalog loading for listing and detail views.

use storefront_commerce::catalog::{Category, Product};
use storefront_commerce::ProductId;
use tracing::{info, warn};

use crate::{CatalogSource, FetchError};

/// Products and categories as loaded for a listing view.
///
/// When loading fails the lists are empty and `error` holds the cause.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub error: Option<FetchError>,
}

impl CatalogSnapshot {
    /// Check if the snapshot fell back to an empty catalog.
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

/// Fetch products and categories concurrently.
///
/// Never fails: any fetch error is logged and yields an empty snapshot.
pub async fn load_catalog<S>(source: &S) -> CatalogSnapshot
where
    S: CatalogSource + ?Sized,
{
    match futures::try_join!(source.products(), source.categories()) {
        Ok((products, categories)) => {
            info!(
                products = products.len(),
                categories = categories.len(),
                "catalog loaded"
            );
            CatalogSnapshot {
                products,
                categories,
                error: None,
            }
        }
        Err(err) => {
            warn!(error = %err, "catalog unavailable, showing empty catalog");
            CatalogSnapshot {
                error: Some(err),
                ..CatalogSnapshot::default()
            }
        }
    }
}

/// Fetch a single product for a detail view.
///
/// A missing product is `Ok(None)`; other failures are returned.
pub async fn find_product<S>(source: &S, id: ProductId) -> Result<Option<Product>, FetchError>
where
    S: CatalogSource + ?Sized,
{
    match source.product(id).await {
        Ok(product) => Ok(Some(product)),
        Err(err) if err.is_not_found() => {
            info!(product_id = %id, "product not found");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
