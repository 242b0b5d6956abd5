//! TUI mode for the review dashboard.
//!
//! Wires the HTTP gateway into the TUI's module-level context, then hands
//! control to bubbletea-rs until the user quits. Telemetry is discarded here:
//! configuration validation only allows it in summary mode.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use reviewdeck::telemetry::NoopTelemetrySink;
use reviewdeck::tui::{DashboardApp, set_dashboard_context, set_initial_tab};
use reviewdeck::{DashboardError, HttpDashboardGateway, ReviewDeckConfig};

/// Runs the interactive dashboard.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the TUI fails to
/// start. Dataset failures are shown in the dashboard, not returned.
pub async fn run(config: &ReviewDeckConfig) -> Result<(), DashboardError> {
    let gateway = HttpDashboardGateway::new(config.gateway_settings()?)?;
    let tab = config.initial_tab()?;

    if !set_dashboard_context(Arc::new(gateway), Arc::new(NoopTelemetrySink)) {
        tracing::debug!("dashboard context already set; keeping the existing gateway");
    }
    if !set_initial_tab(tab) {
        tracing::debug!(%tab, "initial tab already set; keeping the existing tab");
    }

    tracing::info!(api_url = config.api_url(), %tab, "starting dashboard");
    run_tui().await.map_err(|error| DashboardError::Io {
        message: format!("TUI error: {error}"),
    })
}

/// Runs the bubbletea-rs program with the `DashboardApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // DashboardApp::init() reads the context set above.
    let program = Program::<DashboardApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
