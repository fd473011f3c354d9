//! CLI configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_catalog::{CatalogConfig, DEFAULT_BASE_URL};
use storefront_commerce::cart::PricingPolicy;
use storefront_commerce::checkout::CheckoutConfig;
use storefront_commerce::money::{Currency, Money};
use storefront_observability::LoggingConfig;

/// Config file names, in lookup order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Environment variable overriding `catalog.base_url`.
pub const CATALOG_URL_ENV: &str = "STOREFRONT_CATALOG_URL";

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Catalog service settings.
    #[serde(default)]
    pub catalog: CatalogSection,

    /// Checkout settings.
    #[serde(default)]
    pub checkout: CheckoutSection,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Apply environment overrides.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(CATALOG_URL_ENV) {
            self.apply_catalog_url(&url);
        }
    }

    fn apply_catalog_url(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() {
            self.catalog.base_url = url.to_string();
        }
    }

    /// Catalog client settings.
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            base_url: self.catalog.base_url.clone(),
            timeout: Duration::from_secs(self.catalog.timeout_secs),
        }
    }

    /// Checkout flow settings.
    pub fn checkout_config(&self) -> CheckoutConfig {
        CheckoutConfig {
            delay: Duration::from_millis(self.checkout.delay_ms),
            pricing: PricingPolicy {
                shipping_flat: Money::from_decimal(self.checkout.shipping_flat, Currency::USD),
                tax_rate_percent: self.checkout.tax_rate_percent,
            },
        }
    }

    /// Check values that parse but make no sense. Returns (errors, warnings).
    pub fn validate(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let url = &self.catalog.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(format!("catalog.base_url '{}' must be an http(s) URL", url));
        } else if url.starts_with("http://") {
            warnings.push("catalog.base_url is not using HTTPS".to_string());
        }

        if self.catalog.timeout_secs == 0 {
            errors.push("catalog.timeout_secs must be at least 1".to_string());
        } else if self.catalog.timeout_secs > 60 {
            warnings.push(format!(
                "catalog.timeout_secs = {} is unusually long",
                self.catalog.timeout_secs
            ));
        }

        if !self.checkout.shipping_flat.is_finite() || self.checkout.shipping_flat < 0.0 {
            errors.push("checkout.shipping_flat must be a non-negative amount".to_string());
        }

        let rate = self.checkout.tax_rate_percent;
        if !rate.is_finite() || !(0.0..=100.0).contains(&rate) {
            errors.push("checkout.tax_rate_percent must be 0-100".to_string());
        }

        if self.checkout.delay_ms > 30_000 {
            warnings.push(format!(
                "checkout.delay_ms = {} makes checkout very slow",
                self.checkout.delay_ms
            ));
        }

        (errors, warnings)
    }
}

/// Catalog service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSection {
    /// Service root URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Checkout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSection {
    /// Simulated processing time in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Flat shipping charge in dollars.
    #[serde(default = "default_shipping_flat")]
    pub shipping_flat: f64,

    /// Tax rate as a percentage of the subtotal.
    #[serde(default = "default_tax_rate_percent")]
    pub tax_rate_percent: f64,
}

fn default_delay_ms() -> u64 {
    2000
}

fn default_shipping_flat() -> f64 {
    10.0
}

fn default_tax_rate_percent() -> f64 {
    8.0
}

impl Default for CheckoutSection {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            shipping_flat: default_shipping_flat(),
            tax_rate_percent: default_tax_rate_percent(),
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Storefront configuration

[catalog]
base_url = "{base_url}"
timeout_secs = 10

[checkout]
# Simulated order processing time
delay_ms = 2000
shipping_flat = 10.0
tax_rate_percent = 8.0

[logging]
# trace, debug, info, warn, error (RUST_LOG overrides)
level = "warn"
# human or json
format = "human"
"#,
        base_url = DEFAULT_BASE_URL
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_observability::{LogFormat, LogLevel};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("storefront-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_generated_config_matches_defaults() {
        let config: StorefrontConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: StorefrontConfig = toml::from_str(
            r#"
            [checkout]
            delay_ms = 0

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog, CatalogSection::default());
        assert_eq!(config.checkout.delay_ms, 0);
        assert_eq!(config.checkout.tax_rate_percent, 8.0);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_derived_settings() {
        let config = StorefrontConfig::default();

        let catalog = config.catalog_config();
        assert_eq!(catalog.base_url, "https://fakestoreapi.com");
        assert_eq!(catalog.timeout, Duration::from_secs(10));

        let checkout = config.checkout_config();
        assert_eq!(checkout, CheckoutConfig::default());
    }

    #[test]
    fn test_catalog_url_override() {
        let mut config = StorefrontConfig::default();
        config.apply_catalog_url("  ");
        assert_eq!(config.catalog.base_url, DEFAULT_BASE_URL);
        config.apply_catalog_url("http://localhost:3000");
        assert_eq!(config.catalog.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_validate() {
        let (errors, warnings) = StorefrontConfig::default().validate();
        assert!(errors.is_empty());
        assert!(warnings.is_empty());

        let mut config = StorefrontConfig::default();
        config.catalog.base_url = "fakestoreapi.com".to_string();
        config.catalog.timeout_secs = 0;
        config.checkout.tax_rate_percent = 150.0;
        let (errors, _) = config.validate();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_save_and_load() {
        let mut config = StorefrontConfig::default();
        config.checkout.delay_ms = 500;

        for name in ["roundtrip.toml", "roundtrip.json"] {
            let path = temp_path(name);
            config.save(&path).unwrap();
            let loaded = StorefrontConfig::load(&path).unwrap();
            std::fs::remove_file(&path).unwrap();
            assert_eq!(loaded, config);
        }
    }
}
