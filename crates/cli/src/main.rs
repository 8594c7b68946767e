//! Storefront command-line client

use std::process::ExitCode;

use storefront::catalog::CatalogClient;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::{config::Cli, errors::CliError};

mod commands;
mod config;
mod errors;
mod logging;
mod output;
mod shutdown;

/// Storefront CLI entry point
#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration from .env and CLI arguments
    let cli = match Cli::load() {
        Ok(cli) => cli,
        Err(parse_error) => {
            _ = parse_error.print();

            return if parse_error.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(init_error) = logging::init_subscriber(&cli.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        return ExitCode::FAILURE;
    }

    match execute(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(command_error) => {
            error!(error = %command_error, "command failed");

            #[expect(
                clippy::print_stderr,
                reason = "the user message belongs on the terminal regardless of log level"
            )]
            {
                eprintln!("{command_error}");
            }

            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: &Cli) -> Result<(), CliError> {
    let client = CatalogClient::http(cli.catalog.config()?)?;
    let cancel = CancellationToken::new();

    let signals = tokio::spawn(shutdown::cancel_on_signal(cancel.clone()));

    let result = commands::run(&cli.command, &client, &cancel, &mut std::io::stdout()).await;

    cancel.cancel();

    if let Ok(Err(signal_error)) = signals.await {
        debug!(error = %signal_error, "signal handler unavailable");
    }

    result
}
