//! Catalog
//!
//! Access to the remote catalog service. [`CatalogService`] is the transport
//! seam, implemented over HTTP by [`HttpCatalogService`]; [`CatalogClient`]
//! layers the client-side contract on top of it.

mod client;
mod config;
mod errors;
mod http;
mod service;

pub use client::CatalogClient;
pub use config::{CatalogConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use errors::{CatalogError, ErrorKind};
pub use http::HttpCatalogService;
pub use service::*;
