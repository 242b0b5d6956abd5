//! Terminal User Interface for the review dashboard.
//!
//! The TUI follows the Model-View-Update (MVU) pattern on bubbletea-rs:
//!
//! - **Model**: Application state in [`app::DashboardApp`]
//! - **View**: Rendering logic in each component's `view()` function
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Cursor state management
//! - [`components`]: Panel components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Data Loading
//!
//! bubbletea-rs requires `Model::init()` to be a static function, so the
//! gateway and the channel carrying dataset results live in module-level
//! storage. Call [`set_dashboard_context`] (and optionally
//! [`set_initial_tab`]) before starting the program.
//!
//! A load spawns a [`DashboardLoader`] whose tasks send each result on the
//! channel as soon as it arrives. The model keeps one listener command
//! waiting on the channel and re-arms it after every delivery, so datasets
//! render independently in completion order.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tokio::sync::Mutex as AsyncMutex;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::gateway::DashboardGateway;
use crate::dashboard::{DashboardLoader, DashboardTab, DatasetUpdate};
use crate::telemetry::{TelemetryEvent, TelemetrySink};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::DashboardApp;

/// Global storage for the data-loading context.
static DASHBOARD_CONTEXT: OnceLock<DashboardContext> = OnceLock::new();

/// Global storage for the tab shown at start-up.
static INITIAL_TAB: OnceLock<DashboardTab> = OnceLock::new();

/// Everything the running model needs to load data.
struct DashboardContext {
    gateway: Arc<dyn DashboardGateway>,
    telemetry: Arc<dyn TelemetrySink>,
    updates: UnboundedSender<DatasetUpdate>,
    receiver: AsyncMutex<UnboundedReceiver<DatasetUpdate>>,
    loader: Mutex<Option<DashboardLoader>>,
}

/// Sets the gateway and telemetry sink used by the TUI.
///
/// Must be called before starting the bubbletea-rs program; without it the
/// dashboard stays in its loading state.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
#[must_use]
pub fn set_dashboard_context(
    gateway: Arc<dyn DashboardGateway>,
    telemetry: Arc<dyn TelemetrySink>,
) -> bool {
    let (updates, receiver) = mpsc::unbounded_channel();
    DASHBOARD_CONTEXT
        .set(DashboardContext {
            gateway,
            telemetry,
            updates,
            receiver: AsyncMutex::new(receiver),
            loader: Mutex::new(None),
        })
        .is_ok()
}

/// Sets the tab shown when the dashboard starts.
///
/// # Returns
///
/// `true` if the tab was set, `false` if it was already set.
#[must_use]
pub fn set_initial_tab(tab: DashboardTab) -> bool {
    INITIAL_TAB.set(tab).is_ok()
}

/// Returns the configured start-up tab, or the default.
pub(crate) fn initial_tab() -> DashboardTab {
    INITIAL_TAB.get().copied().unwrap_or_default()
}

/// Starts loading every dataset for `generation`.
///
/// Any load still in flight is cancelled first, so only the newest
/// generation keeps running. Returns `false` when no context is set.
pub(crate) fn start_load(generation: u64) -> bool {
    let Some(context) = DASHBOARD_CONTEXT.get() else {
        return false;
    };

    let mut slot = context
        .loader
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(previous) = slot.as_mut() {
        previous.cancel();
    }
    *slot = Some(DashboardLoader::spawn(
        Arc::clone(&context.gateway),
        generation,
        &context.updates,
    ));
    true
}

/// Aborts the current load, if any.
pub(crate) fn cancel_load() {
    let Some(context) = DASHBOARD_CONTEXT.get() else {
        return;
    };
    let mut slot = context
        .loader
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(mut loader) = slot.take() {
        loader.cancel();
    }
}

/// Waits for the next dataset result.
///
/// Returns `None` when no context is set.
pub(crate) async fn next_update() -> Option<DatasetUpdate> {
    let context = DASHBOARD_CONTEXT.get()?;
    context.receiver.lock().await.recv().await
}

/// Records a telemetry event on the configured sink, if any.
pub(crate) fn record_telemetry(event: TelemetryEvent) {
    if let Some(context) = DASHBOARD_CONTEXT.get() {
        context.telemetry.record(event);
    }
}
