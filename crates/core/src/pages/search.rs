//! Search Results Page

use tokio_util::sync::CancellationToken;

use crate::{
    catalog::CatalogClient,
    pages::{LoadOutcome, PageFailure, PageState, until_cancelled},
    products::{Product, ProductCard},
    routes::{Navigation, Route},
};

/// Shown when the search request fails.
pub const SEARCH_FAILED_MESSAGE: &str = "Error loading search results. Please try again.";

/// Shown before any term has been searched.
pub const START_SEARCHING_MESSAGE: &str = "Start searching for products!";

/// Search results for the term in the route.
#[derive(Debug)]
pub struct SearchPage {
    query: String,
    input: String,
    state: PageState<Vec<Product>>,
}

impl SearchPage {
    /// New page for the route's query; the search box starts with the query.
    pub fn new(query: impl Into<String>) -> Self {
        let query = query.into();

        Self {
            input: query.clone(),
            query,
            state: PageState::Loading,
        }
    }

    /// Query from the route.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current search box contents.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Current state.
    pub fn state(&self) -> &PageState<Vec<Product>> {
        &self.state
    }

    /// Run the search. A blank query becomes ready with no results and
    /// sends no request.
    pub async fn load(&mut self, client: &CatalogClient, cancel: &CancellationToken) -> LoadOutcome {
        let previous = std::mem::replace(&mut self.state, PageState::Loading);

        let Some(result) = until_cancelled(cancel, client.search_products(&self.query)).await
        else {
            self.state = previous;

            return LoadOutcome::Cancelled;
        };

        self.state = match result {
            Ok(products) => PageState::Ready(products),
            Err(error) => PageState::Failed(PageFailure::from_error(&error, SEARCH_FAILED_MESSAGE)),
        };

        LoadOutcome::Completed
    }

    /// Page heading.
    pub fn heading(&self) -> String {
        format!("Search Results for \"{}\"", self.query)
    }

    /// Message for an empty result set, distinguishing "nothing searched
    /// yet" from "nothing matched". `None` while results are present or the
    /// page is not ready.
    pub fn empty_message(&self) -> Option<String> {
        let products = self.state.ready()?;

        if !products.is_empty() {
            return None;
        }

        if self.query.trim().is_empty() {
            Some(START_SEARCHING_MESSAGE.to_string())
        } else {
            Some(format!("No products found for \"{}\"", self.query))
        }
    }

    /// Result cards, in service order.
    pub fn cards(&self) -> Vec<ProductCard> {
        self.state
            .ready()
            .map(|products| products.iter().map(ProductCard::from).collect())
            .unwrap_or_default()
    }

    /// Update the search box.
    pub fn set_input(&mut self, input: &str) {
        input.clone_into(&mut self.input);
    }

    /// Submit the search box; blank input does not navigate.
    pub fn submit(&self) -> Option<Navigation> {
        Route::search(&self.input).map(Navigation::Push)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        catalog::{CatalogError, ErrorKind, MockCatalogService},
        pages::test_support::{client, product},
    };

    use super::*;

    #[tokio::test]
    async fn blank_query_is_ready_without_request() {
        let mut service = MockCatalogService::new();

        service.expect_search_products().never();

        let mut page = SearchPage::new("");

        page.load(&client(service), &CancellationToken::new()).await;

        assert_eq!(page.state(), &PageState::Ready(Vec::new()));
        assert_eq!(
            page.empty_message().as_deref(),
            Some(START_SEARCHING_MESSAGE)
        );
    }

    #[tokio::test]
    async fn unmatched_query_reports_no_results() {
        let mut service = MockCatalogService::new();

        service
            .expect_search_products()
            .once()
            .withf(|query| query == "kettle")
            .return_once(|_| Ok(Vec::new()));

        let mut page = SearchPage::new("kettle");

        page.load(&client(service), &CancellationToken::new()).await;

        assert_eq!(
            page.empty_message().as_deref(),
            Some("No products found for \"kettle\"")
        );
    }

    #[tokio::test]
    async fn results_are_shown_as_cards() {
        let mut service = MockCatalogService::new();

        service
            .expect_search_products()
            .once()
            .return_once(|_| Ok(vec![product("1", "Kettle", 40, "Kitchen")]));

        let mut page = SearchPage::new("kettle");

        page.load(&client(service), &CancellationToken::new()).await;

        assert_eq!(page.empty_message(), None);
        assert_eq!(page.cards().len(), 1);
        assert_eq!(page.heading(), "Search Results for \"kettle\"");
    }

    #[tokio::test]
    async fn failed_search_shows_retry_message() {
        let mut service = MockCatalogService::new();

        service
            .expect_search_products()
            .once()
            .return_once(|_| Err(CatalogError::InvalidUrl));

        let mut page = SearchPage::new("kettle");

        page.load(&client(service), &CancellationToken::new()).await;

        let failure = page.state().failure().cloned();

        assert_eq!(failure.as_ref().map(|f| f.kind), Some(ErrorKind::Transport));
        assert_eq!(
            failure.map(|f| f.message),
            Some(SEARCH_FAILED_MESSAGE.to_string())
        );
    }

    #[test]
    fn submit_navigates_only_for_non_blank_input() {
        let mut page = SearchPage::new("lamp");

        page.set_input("   ");
        assert_eq!(page.submit(), None);

        page.set_input(" desk lamp ");
        assert_eq!(
            page.submit(),
            Some(Navigation::Push(Route::Search {
                query: "desk lamp".to_string()
            }))
        );
    }
}
