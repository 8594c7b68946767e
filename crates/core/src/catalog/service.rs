//! Catalog service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    catalog::errors::CatalogError,
    products::{Product, ProductId, ValidDraft},
};

/// Transport-level access to the catalog service.
///
/// Implementations perform exactly one request per call; short-circuiting
/// and validation live in [`CatalogClient`](crate::catalog::CatalogClient).
#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Fetches the full catalog.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Runs a server-side search for `query`.
    async fn search_products(&self, query: String) -> Result<Vec<Product>, CatalogError>;

    /// Fetches a single product.
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError>;

    /// Submits a validated product suggestion.
    async fn create_product(&self, draft: ValidDraft) -> Result<(), CatalogError>;
}
