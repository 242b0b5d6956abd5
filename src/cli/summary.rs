//! One-shot summary mode.
//!
//! Loads all three datasets, waits for every result, and prints the selected
//! tab's panel once. Failed datasets render like empty ones; each failure is
//! also reported on stderr so scripts can tell the two apart. With
//! `--telemetry`, each dataset's load latency is written to stderr as a JSON
//! line.

use std::io::{self, IsTerminal, Write};

use chrono::{DateTime, Utc};

use reviewdeck::dashboard::{DashboardData, DashboardTab, load_snapshot};
use reviewdeck::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};
use reviewdeck::tui::components::{ListWindow, PanelComponent, PanelViewContext};
use reviewdeck::{DashboardError, HttpDashboardGateway, ReviewDeckConfig};

/// Loads the datasets and prints the configured tab's panel to stdout.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or stdout/stderr cannot
/// be written. Dataset failures are reported, not returned.
pub async fn run(config: &ReviewDeckConfig) -> Result<(), DashboardError> {
    let gateway = HttpDashboardGateway::new(config.gateway_settings()?)?;
    let tab = config.initial_tab()?;

    let telemetry = telemetry_sink(config);

    let data = load_snapshot(&gateway, telemetry.as_ref()).await;

    let styled = io::stdout().is_terminal();
    write_panel_to(&mut io::stdout().lock(), tab, &data, Utc::now(), styled)?;
    write_failures_to(&mut io::stderr().lock(), &data)
}

/// Selects the JSONL sink when telemetry is enabled.
fn telemetry_sink(config: &ReviewDeckConfig) -> Box<dyn TelemetrySink> {
    if config.telemetry {
        Box::new(StderrJsonlTelemetrySink)
    } else {
        Box::new(NoopTelemetrySink)
    }
}

/// Writes the heading and panel for `tab`.
///
/// # Errors
///
/// Returns [`DashboardError::Io`] when the writer fails.
pub fn write_panel_to<W: Write>(
    writer: &mut W,
    tab: DashboardTab,
    data: &DashboardData,
    now: DateTime<Utc>,
    styled: bool,
) -> Result<(), DashboardError> {
    let panel = PanelComponent::view(&PanelViewContext {
        tab,
        data,
        now,
        window: ListWindow::unbounded(),
        styled,
    });

    writeln!(writer, "{}", tab.title()).map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;
    write!(writer, "{panel}").map_err(|e| io_error(&e))
}

/// Writes one line per failed dataset.
///
/// # Errors
///
/// Returns [`DashboardError::Io`] when the writer fails.
pub fn write_failures_to<W: Write>(
    writer: &mut W,
    data: &DashboardData,
) -> Result<(), DashboardError> {
    let failures = [
        ("reviews", data.reviews.failure()),
        ("cycles", data.cycles.failure()),
        ("analytics", data.analytics.failure()),
    ];
    for (label, failure) in failures {
        if let Some(message) = failure {
            writeln!(writer, "warning: failed to load {label}: {message}")
                .map_err(|e| io_error(&e))?;
        }
    }
    Ok(())
}

fn io_error(error: &io::Error) -> DashboardError {
    DashboardError::Io {
        message: error.to_string(),
    }
}
