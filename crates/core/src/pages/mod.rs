//! Pages
//!
//! Headless page models. Each page owns its fetched data and exposes one of
//! three states to the surrounding shell: loading, failed or ready. Loads take
//! a [`CancellationToken`]; cancelling it (for example on navigation away)
//! abandons the request and leaves the page state as it was.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::catalog::{CatalogError, ErrorKind};

pub mod detail;
pub mod home;
pub mod not_found;
pub mod preview;
pub mod search;
pub mod suggest;

pub use detail::ProductDetailPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use preview::{ImagePreview, PREVIEW_DEBOUNCE};
pub use search::SearchPage;
pub use suggest::{SubmissionStatus, SubmitOutcome, SuggestProductPage};

/// Observable page state.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    /// A request is in flight.
    Loading,

    /// The last request failed.
    Failed(PageFailure),

    /// Data is available.
    Ready(T),
}

impl<T> PageState<T> {
    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    /// Ready data, if any.
    pub fn ready(&self) -> Option<&T> {
        match self {
            PageState::Ready(data) => Some(data),
            PageState::Loading | PageState::Failed(_) => None,
        }
    }

    /// Failure details, if the last request failed.
    pub fn failure(&self) -> Option<&PageFailure> {
        match self {
            PageState::Failed(failure) => Some(failure),
            PageState::Loading | PageState::Ready(_) => None,
        }
    }
}

/// Visible error state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFailure {
    /// Error class
    pub kind: ErrorKind,

    /// Message to show
    pub message: String,
}

impl PageFailure {
    /// Build a failure, using `transport_message` for transport-class errors.
    pub fn from_error(error: &CatalogError, transport_message: &str) -> Self {
        let kind = error.kind();

        let message = match kind {
            ErrorKind::Transport => transport_message.to_string(),
            ErrorKind::NotFound | ErrorKind::Validation => error.user_message().to_string(),
        };

        Self { kind, message }
    }
}

/// How a page load ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The request resolved and the page state was updated.
    Completed,

    /// The token was cancelled first; the page state was not touched.
    Cancelled,
}

/// Drive `future` unless `cancel` fires first.
pub(crate) async fn until_cancelled<F>(cancel: &CancellationToken, future: F) -> Option<F::Output>
where
    F: Future,
{
    tokio::select! {
        biased;

        () = cancel.cancelled() => None,
        output = future => Some(output),
    }
}
