//! Catalog client.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use tracing::debug;

use crate::{
    catalog::{
        config::CatalogConfig, errors::CatalogError, http::HttpCatalogService,
        service::CatalogService,
    },
    products::{Product, ProductDraft, ProductId},
};

/// Client-side catalog contract.
///
/// Blank searches never reach the service and drafts are validated before
/// submission. Calls are independent: nothing is cached, retried or
/// de-duplicated.
#[derive(Clone)]
pub struct CatalogClient {
    service: Arc<dyn CatalogService>,
}

impl Debug for CatalogClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CatalogClient").finish_non_exhaustive()
    }
}

impl CatalogClient {
    /// Wrap an existing service.
    pub fn new(service: Arc<dyn CatalogService>) -> Self {
        Self { service }
    }

    /// Build a client talking HTTP to the configured catalog.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be initialised.
    pub fn http(config: CatalogConfig) -> Result<Self, CatalogError> {
        Ok(Self::new(Arc::new(HttpCatalogService::new(config)?)))
    }

    /// Fetch the full catalog.
    ///
    /// # Errors
    ///
    /// Returns a transport-class error when the request fails.
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.service.list_products().await
    }

    /// Search the catalog. A blank query yields no products and sends no request.
    ///
    /// # Errors
    ///
    /// Returns a transport-class error when the request fails.
    pub async fn search_products(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        if query.trim().is_empty() {
            debug!("blank search query, skipping request");

            return Ok(Vec::new());
        }

        self.service.search_products(query.to_owned()).await
    }

    /// Fetch a single product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingProductId`] without a request when the id
    /// is blank, [`CatalogError::NotFound`] when the service reports no such
    /// product, or a transport-class error when the request fails.
    pub async fn get_product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        if id.as_str().trim().is_empty() {
            debug!("blank product id, skipping request");

            return Err(CatalogError::MissingProductId);
        }

        self.service.get_product(id.clone()).await
    }

    /// Validate and submit a product suggestion.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] without sending anything when the
    /// draft is incomplete, or a transport-class error when the submission fails.
    pub async fn suggest_product(&self, draft: ProductDraft) -> Result<(), CatalogError> {
        let draft = draft.validate()?;

        self.service.create_product(draft).await
    }
}
