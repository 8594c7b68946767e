//! CLI Errors

use std::io;

use storefront::{
    catalog::{CatalogError, ConfigError},
    pages::PageFailure,
    products::DraftError,
};
use thiserror::Error;

/// Errors that end a command.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// The catalog settings are invalid.
    #[error("invalid catalog configuration: {0}")]
    Config(#[from] ConfigError),

    /// The catalog client could not be created.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A page ended in its failed state.
    #[error("{}", .0.message)]
    Page(PageFailure),

    /// The suggestion form was rejected locally.
    #[error(transparent)]
    Rejected(DraftError),

    /// The path resolved to the not-found page.
    #[error("no page at `{0}`")]
    UnknownPath(String),

    /// Interrupted before the page loaded.
    #[error("cancelled")]
    Cancelled,

    /// Output could not be written.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    /// Output could not be encoded as JSON.
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}
