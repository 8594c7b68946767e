//! HTTP catalog service.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::{Span, debug, info, warn};
use url::Url;

use crate::{
    catalog::{config::CatalogConfig, errors::CatalogError, service::CatalogService},
    products::{
        Product, ProductId, ValidDraft,
        records::{ProductEnvelope, ProductsEnvelope},
    },
};

const PRODUCTS_PATH: [&str; 2] = ["api", "products"];

const SEARCH_SEGMENT: &str = "search";

const SEARCH_QUERY_PARAM: &str = "query";

/// [`CatalogService`] over the catalog's JSON HTTP API.
#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    config: CatalogConfig,
    http: Client,
}

impl HttpCatalogService {
    /// Create a service from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be initialised.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let http = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self { config, http })
    }

    /// `{base}/api/products` followed by `segments`, each encoded as a single
    /// path segment. Any path prefix on the base URL is kept.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = self.config.base_url().clone();

        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| CatalogError::InvalidUrl)?;

            path.pop_if_empty().extend(PRODUCTS_PATH).extend(segments);
        }

        Ok(url)
    }
}

fn ensure_success(response: Response) -> Result<Response, CatalogError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    warn!(%status, url = %response.url(), "catalog request failed");

    Err(CatalogError::Status(status))
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    #[tracing::instrument(
        name = "catalog.http.list_products",
        skip(self),
        fields(product_count = tracing::field::Empty),
        err
    )]
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = self.endpoint(&[])?;

        debug!(%url, "fetching catalog");

        let response = self.http.get(url).send().await?;
        let envelope: ProductsEnvelope = ensure_success(response)?.json().await?;

        if let Some(message) = &envelope.message {
            debug!(%message, "catalog listed products");
        }

        let products = envelope.into_products();

        Span::current().record("product_count", tracing::field::display(products.len()));

        Ok(products)
    }

    #[tracing::instrument(
        name = "catalog.http.search_products",
        skip(self),
        fields(product_count = tracing::field::Empty),
        err
    )]
    async fn search_products(&self, query: String) -> Result<Vec<Product>, CatalogError> {
        let mut url = self.endpoint(&[SEARCH_SEGMENT])?;

        url.query_pairs_mut()
            .append_pair(SEARCH_QUERY_PARAM, &query);

        debug!(%url, "searching catalog");

        let response = self.http.post(url).send().await?;
        let envelope: ProductsEnvelope = ensure_success(response)?.json().await?;
        let products = envelope.into_products();

        Span::current().record("product_count", tracing::field::display(products.len()));

        Ok(products)
    }

    #[tracing::instrument(
        name = "catalog.http.get_product",
        skip(self),
        fields(product_id = %id),
        err
    )]
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let url = self.endpoint(&[id.as_str()])?;

        debug!(%url, "fetching product");

        let response = self.http.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }

        let envelope: ProductEnvelope = ensure_success(response)?.json().await?;

        envelope.into_product().ok_or(CatalogError::NotFound)
    }

    #[tracing::instrument(
        name = "catalog.http.create_product",
        skip(self, draft),
        fields(product_name = %draft.draft().name),
        err
    )]
    async fn create_product(&self, draft: ValidDraft) -> Result<(), CatalogError> {
        let url = self.endpoint(&[])?;

        debug!(%url, "submitting product suggestion");

        let response = self.http.post(url).json(&draft).send().await?;

        ensure_success(response)?;

        info!("submitted product suggestion");

        Ok(())
    }
}
