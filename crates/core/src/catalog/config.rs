//! Catalog Config

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while building a [`CatalogConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base URL could not be parsed.
    #[error("invalid catalog base url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The base URL parsed but cannot host the catalog endpoints.
    #[error("catalog base url must be an absolute http(s) url, got `{0}`")]
    UnsupportedBaseUrl(String),
}

/// Connection settings for the catalog service.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    base_url: Url,
    timeout: Duration,
}

impl CatalogConfig {
    /// Build a config for `base_url` with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is not an http(s) URL that endpoint
    /// paths can be appended to.
    pub fn new(base_url: Url) -> Result<Self, ConfigError> {
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(ConfigError::UnsupportedBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Parse and validate a base URL string.
    ///
    /// # Errors
    ///
    /// Returns an error when the string is not a valid base URL.
    pub fn parse(base_url: &str) -> Result<Self, ConfigError> {
        Self::new(Url::parse(base_url)?)
    }

    /// Replace the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Catalog service base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
