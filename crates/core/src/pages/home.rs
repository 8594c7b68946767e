//! Home Page

use tokio_util::sync::CancellationToken;

use crate::{
    catalog::CatalogClient,
    listing::{ProductListing, SortKey},
    pages::{LoadOutcome, PageFailure, PageState, until_cancelled},
    products::ProductCard,
};

/// Shown when the catalog cannot be fetched.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load products. Please try again.";

/// Shown when the projection is empty.
pub const EMPTY_MESSAGE: &str = "No products found";

/// Product list page: the full catalog, filtered and sorted locally.
#[derive(Debug)]
pub struct HomePage {
    term: String,
    sort: SortKey,
    state: PageState<ProductListing>,
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}

impl HomePage {
    /// New page, loading, with a blank term sorted by name.
    pub fn new() -> Self {
        Self {
            term: String::new(),
            sort: SortKey::default(),
            state: PageState::Loading,
        }
    }

    /// Current state.
    pub fn state(&self) -> &PageState<ProductListing> {
        &self.state
    }

    /// Current search term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Current sort key.
    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Fetch the catalog.
    pub async fn load(&mut self, client: &CatalogClient, cancel: &CancellationToken) -> LoadOutcome {
        let previous = std::mem::replace(&mut self.state, PageState::Loading);

        let Some(result) = until_cancelled(cancel, client.list_products()).await else {
            self.state = previous;

            return LoadOutcome::Cancelled;
        };

        self.state = match result {
            Ok(products) => {
                PageState::Ready(ProductListing::with_view(products, self.term.clone(), self.sort))
            }
            Err(error) => PageState::Failed(PageFailure::from_error(&error, LOAD_FAILED_MESSAGE)),
        };

        LoadOutcome::Completed
    }

    /// Update the search term.
    pub fn set_term(&mut self, term: &str) {
        term.clone_into(&mut self.term);

        if let PageState::Ready(listing) = &mut self.state {
            listing.set_term(term);
        }
    }

    /// Update the sort key.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;

        if let PageState::Ready(listing) = &mut self.state {
            listing.set_sort(sort);
        }
    }

    /// Cards for the current projection; empty unless ready.
    pub fn cards(&self) -> Vec<ProductCard> {
        self.state
            .ready()
            .map(|listing| listing.projection().map(ProductCard::from).collect())
            .unwrap_or_default()
    }
}
