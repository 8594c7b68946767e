//! Catalog Errors

use reqwest::StatusCode;
use thiserror::Error;

use crate::products::DraftError;

/// Errors surfaced by catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport failure or an undecodable response body.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("catalog responded with status {0}")]
    Status(StatusCode),

    /// An endpoint URL could not be built from the configured base URL.
    #[error("catalog endpoint url could not be built")]
    InvalidUrl,

    /// The requested product does not exist.
    #[error("product not found")]
    NotFound,

    /// The product id was blank; nothing was requested.
    #[error("product id is missing")]
    MissingProductId,

    /// The draft failed local validation and was not sent.
    #[error(transparent)]
    Validation(#[from] DraftError),
}

/// User-facing classification of a [`CatalogError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request failed; the user may retry.
    Transport,

    /// The entity is absent.
    NotFound,

    /// The input was rejected locally.
    Validation,
}

impl CatalogError {
    /// Classify the error for display.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Http(_) | CatalogError::Status(_) | CatalogError::InvalidUrl => {
                ErrorKind::Transport
            }
            CatalogError::NotFound | CatalogError::MissingProductId => ErrorKind::NotFound,
            CatalogError::Validation(_) => ErrorKind::Validation,
        }
    }

    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> &'static str {
        if matches!(self, CatalogError::MissingProductId) {
            return "Product ID is missing.";
        }

        match self.kind() {
            ErrorKind::Transport => "Request failed. Please try again.",
            ErrorKind::NotFound => "Product not found.",
            ErrorKind::Validation => "Please fill in all fields correctly.",
        }
    }
}
