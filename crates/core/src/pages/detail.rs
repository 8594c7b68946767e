//! Product Detail Page

use tokio_util::sync::CancellationToken;

use crate::{
    catalog::CatalogClient,
    pages::{LoadOutcome, PageFailure, PageState, until_cancelled},
    products::{
        Product, ProductId,
        cards::{DETAIL_PLACEHOLDER_IMAGE, format_price, image_or},
    },
    routes::{Navigation, Route},
};

/// Shown when the product request fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch product data. Please try again.";

/// Detail page for a single product.
#[derive(Debug)]
pub struct ProductDetailPage {
    id: ProductId,
    state: PageState<Product>,
    image_failed: bool,
}

impl ProductDetailPage {
    /// New page for the product in the route.
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            state: PageState::Loading,
            image_failed: false,
        }
    }

    /// Product identifier from the route.
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    /// Current state.
    pub fn state(&self) -> &PageState<Product> {
        &self.state
    }

    /// Fetch the product.
    pub async fn load(&mut self, client: &CatalogClient, cancel: &CancellationToken) -> LoadOutcome {
        let previous = std::mem::replace(&mut self.state, PageState::Loading);

        let Some(result) = until_cancelled(cancel, client.get_product(&self.id)).await else {
            self.state = previous;

            return LoadOutcome::Cancelled;
        };

        self.image_failed = false;
        self.state = match result {
            Ok(product) => PageState::Ready(product),
            Err(error) => PageState::Failed(PageFailure::from_error(&error, FETCH_FAILED_MESSAGE)),
        };

        LoadOutcome::Completed
    }

    /// Image to display: the product image, or the placeholder when it is
    /// missing or failed to load.
    pub fn image_url(&self) -> Option<&str> {
        let product = self.state.ready()?;

        if self.image_failed {
            return Some(DETAIL_PLACEHOLDER_IMAGE);
        }

        Some(image_or(&product.image_url, DETAIL_PLACEHOLDER_IMAGE))
    }

    /// Formatted price of the loaded product.
    pub fn price(&self) -> Option<String> {
        self.state.ready().map(|product| format_price(product.price))
    }

    /// Record that the product image failed to load.
    pub fn mark_image_failed(&mut self) {
        self.image_failed = true;
    }

    /// Record that the product image loaded.
    pub fn mark_image_loaded(&mut self) {
        self.image_failed = false;
    }

    /// "Back to list".
    pub fn back(&self) -> Navigation {
        Navigation::Back
    }

    /// "Go to home", offered alongside errors.
    pub fn home(&self) -> Navigation {
        Navigation::Push(Route::Home)
    }
}
