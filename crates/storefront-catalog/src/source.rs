//! Catalog source abstraction.

use async_trait::async_trait;
use storefront_commerce::catalog::{Category, Product};
use storefront_commerce::ProductId;

use crate::{CatalogClient, FetchError};

/// Anything that can answer the four catalog reads.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// All products.
    async fn products(&self) -> Result<Vec<Product>, FetchError>;

    /// One product by id.
    async fn product(&self, id: ProductId) -> Result<Product, FetchError>;

    /// Products in one category.
    async fn products_in_category(&self, category: &Category)
        -> Result<Vec<Product>, FetchError>;

    /// All category labels.
    async fn categories(&self) -> Result<Vec<Category>, FetchError>;
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn products(&self) -> Result<Vec<Product>, FetchError> {
        CatalogClient::products(self).await
    }

    async fn product(&self, id: ProductId) -> Result<Product, FetchError> {
        CatalogClient::product(self, id).await
    }

    async fn products_in_category(
        &self,
        category: &Category,
    ) -> Result<Vec<Product>, FetchError> {
        CatalogClient::products_in_category(self, category).await
    }

    async fn categories(&self) -> Result<Vec<Category>, FetchError> {
        CatalogClient::categories(self).await
    }
}

/// Fixed in-memory catalog.
///
/// Categories are derived from the products in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn products(&self) -> Result<Vec<Product>, FetchError> {
        Ok(self.products.clone())
    }

    async fn product(&self, id: ProductId) -> Result<Product, FetchError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| FetchError::NotFound {
                url: format!("memory:/products/{}", id),
            })
    }

    async fn products_in_category(
        &self,
        category: &Category,
    ) -> Result<Vec<Product>, FetchError> {
        Ok(self
            .products
            .iter()
            .filter(|p| &p.category == category)
            .cloned()
            .collect())
    }

    async fn categories(&self) -> Result<Vec<Category>, FetchError> {
        let mut categories: Vec<Category> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        Ok(categories)
    }
}
