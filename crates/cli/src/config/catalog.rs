//! Catalog Connection Config

use std::time::Duration;

use clap::Args;
use storefront::catalog::{CatalogConfig, ConfigError, DEFAULT_BASE_URL};

/// Catalog service settings.
#[derive(Debug, Args)]
pub(crate) struct CatalogArgs {
    /// Catalog service base URL
    #[arg(long, global = true, env = "CATALOG_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub(crate) base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, global = true, env = "CATALOG_TIMEOUT_SECONDS", default_value_t = 10u64)]
    pub(crate) timeout_seconds: u64,
}

impl CatalogArgs {
    /// Validated client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute `http`/`https` URL.
    pub(crate) fn config(&self) -> Result<CatalogConfig, ConfigError> {
        Ok(CatalogConfig::parse(&self.base_url)?
            .with_timeout(Duration::from_secs(self.timeout_seconds)))
    }
}
