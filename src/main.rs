//! ReviewDeck entrypoint: terminal dashboard or one-shot summary.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use reviewdeck::{DashboardError, OperationMode, ReviewDeckConfig, logging};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), DashboardError> {
    let config = load_config()?;
    config.validate()?;
    logging::init();

    match config.operation_mode() {
        OperationMode::Dashboard => cli::dashboard_tui::run(&config).await,
        OperationMode::Summary => cli::summary::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`DashboardError::Configuration`] when ortho-config fails to
/// parse arguments or load configuration files.
fn load_config() -> Result<ReviewDeckConfig, DashboardError> {
    ReviewDeckConfig::load().map_err(|error| DashboardError::Configuration {
        message: error.to_string(),
    })
}
