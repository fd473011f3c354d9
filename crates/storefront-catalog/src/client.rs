//! HTTP catalog client.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use storefront_commerce::catalog::{Category, Product};
use storefront_commerce::ProductId;
use tracing::{debug, info};

use crate::{FetchError, Response};

/// Default catalog service.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Catalog client settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Service root; endpoint paths are appended to it.
    pub base_url: String,
    /// Upper bound on each request, body included.
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CatalogConfig {
    /// Settings for a different service root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Read-only client for the remote product catalog.
///
/// Each call issues exactly one GET with no body and no credentials.
/// Failures are not retried.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client.
    pub fn new(config: CatalogConfig) -> Result<Self, FetchError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(FetchError::InvalidUrl(config.base_url));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        info!(base_url = %base_url, timeout_ms = config.timeout.as_millis() as u64, "catalog client ready");
        Ok(Self { http, base_url })
    }

    /// Service root in use.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All products.
    pub async fn products(&self) -> Result<Vec<Product>, FetchError> {
        self.get_json("/products").await
    }

    /// One product by id.
    pub async fn product(&self, id: ProductId) -> Result<Product, FetchError> {
        self.get(&format!("/products/{}", id))
            .await?
            .json_resource()
    }

    /// Products in one category.
    pub async fn products_in_category(
        &self,
        category: &Category,
    ) -> Result<Vec<Product>, FetchError> {
        self.get_json(&format!("/products/category/{}", category.path_segment()))
            .await
    }

    /// All category labels.
    pub async fn categories(&self) -> Result<Vec<Category>, FetchError> {
        self.get_json("/products/categories").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        self.get(path).await?.json()
    }

    async fn get(&self, path: &str) -> Result<Response, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "catalog request");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, &url))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(e, &url))?;

        debug!(%url, status, bytes = body.len(), "catalog response");
        Response::new(status, url, body.to_vec()).error_for_status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, "https://fakestoreapi.com");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client =
            CatalogClient::new(CatalogConfig::default().with_base_url("http://localhost:8080/"))
                .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let err = CatalogClient::new(CatalogConfig::default().with_base_url("ftp://catalog"))
            .unwrap_err();
        assert_eq!(err, FetchError::InvalidUrl("ftp://catalog".to_string()));
    }
}
