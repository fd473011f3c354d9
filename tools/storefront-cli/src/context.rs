//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use storefront_catalog::CatalogClient;

use crate::config::{StorefrontConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration, environment overrides applied.
    pub config: StorefrontConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file, or the nearest one found
    /// walking up from the working directory.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(PathBuf::from(path)),
            None => find_config(&cwd),
        };
        let mut config = match &config_path {
            Some(path) => StorefrontConfig::load(path)?,
            None => StorefrontConfig::default(),
        };
        config.apply_env();
        let config = checked(config)?;

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Build a catalog client from the configuration.
    pub fn catalog_client(&self) -> Result<CatalogClient> {
        CatalogClient::new(self.config.catalog_config()).context("Invalid catalog settings")
    }
}

/// Reject a configuration with validation errors. Warnings are left for
/// `config validate` to report.
fn checked(config: StorefrontConfig) -> Result<StorefrontConfig> {
    let (errors, _) = config.validate();
    if !errors.is_empty() {
        bail!("Invalid configuration: {}", errors.join("; "));
    }
    Ok(config)
}

/// Find the nearest config file in the directory tree.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}
