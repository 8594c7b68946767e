//! Command-line configuration

use clap::{Parser, Subcommand};
use storefront::listing::SortKey;

use crate::config::{catalog::CatalogArgs, logging::LoggingConfig, suggest::SuggestArgs};

pub(crate) mod catalog;
pub(crate) mod logging;
pub(crate) mod suggest;

/// Storefront catalog client
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Browse and suggest storefront products", long_about = None)]
pub(crate) struct Cli {
    /// Catalog service settings.
    #[command(flatten)]
    pub(crate) catalog: CatalogArgs,

    /// Logging output settings.
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    /// Page to show.
    #[command(subcommand)]
    pub(crate) command: Command,
}

/// Pages reachable from the command line.
#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List the catalog, filtered and sorted locally.
    List {
        /// Case-insensitive name or category filter
        #[arg(short, long, default_value = "")]
        term: String,

        /// Sort order (name, price-low, price-high, category)
        #[arg(short, long, default_value_t = SortKey::Name)]
        sort: SortKey,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a single product.
    Show {
        /// Product identifier
        id: String,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Run a server-side search.
    Search {
        /// Search term
        query: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Suggest a new product.
    Suggest(SuggestArgs),

    /// Resolve an application path and show that page.
    Open {
        /// Path such as `/home`, `/product/{id}` or `/search?query=lamp`
        path: String,
    },
}

impl Cli {
    /// Load configuration from `.env`, the environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
