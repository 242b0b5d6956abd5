//! Loading and refresh handlers for the dashboard TUI.
//!
//! A load runs under a generation number. Refreshing bumps the generation,
//! resets every dataset to pending and starts a new load, which cancels the
//! previous one. Results still queued from an older generation are dropped
//! on arrival.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::DashboardApp;
use crate::dashboard::{DashboardData, DatasetUpdate};
use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;

impl DashboardApp {
    /// Dispatches data loading messages to their handlers.
    pub(super) fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::RefreshRequested => self.handle_refresh_requested(),
            AppMsg::DatasetLoaded(update) => self.handle_dataset_loaded(update),
            _ => {
                // Unreachable: caller filters to data messages.
                None
            }
        }
    }

    /// Discards current data and reloads every dataset.
    #[expect(
        clippy::unnecessary_wraps,
        reason = "Returns Option<Cmd> for consistency with other message handlers"
    )]
    pub(super) fn handle_refresh_requested(&mut self) -> Option<Cmd> {
        self.generation = self.generation.saturating_add(1);
        self.data = DashboardData::pending();
        self.clamp_cursors();

        let listen = !self.listening;
        self.listening = true;
        tracing::debug!(generation = self.generation, "dashboard refresh requested");
        Some(Self::load_cmd(self.generation, listen))
    }

    /// Stores a dataset result if it belongs to the current generation, then
    /// re-arms the listener.
    #[expect(
        clippy::unnecessary_wraps,
        reason = "Returns Option<Cmd> for consistency with other message handlers"
    )]
    pub(super) fn handle_dataset_loaded(&mut self, update: &DatasetUpdate) -> Option<Cmd> {
        let endpoint = update.payload.endpoint();

        if update.generation == self.generation {
            crate::tui::record_telemetry(TelemetryEvent::DatasetLoaded {
                endpoint: endpoint.label().to_owned(),
                latency_ms: update.latency_ms,
                ok: update.payload.is_ok(),
            });
            self.data.apply(update.payload.clone());
            self.clamp_cursors();
        } else {
            tracing::debug!(
                %endpoint,
                stale = update.generation,
                current = self.generation,
                "discarding result from superseded load"
            );
            crate::tui::record_telemetry(TelemetryEvent::StaleResultDiscarded {
                endpoint: endpoint.label().to_owned(),
                generation: update.generation,
            });
        }

        Some(Self::listen_cmd())
    }

    /// Creates a command that starts a load and, if `listen` is set, waits
    /// for its first result.
    pub(super) fn load_cmd(generation: u64, listen: bool) -> Cmd {
        Box::pin(async move {
            if !crate::tui::start_load(generation) || !listen {
                return None;
            }
            crate::tui::next_update()
                .await
                .map(|update| Box::new(AppMsg::DatasetLoaded(update)) as Box<dyn Any + Send>)
        })
    }

    /// Creates a command that waits for the next dataset result.
    pub(super) fn listen_cmd() -> Cmd {
        Box::pin(async {
            crate::tui::next_update()
                .await
                .map(|update| Box::new(AppMsg::DatasetLoaded(update)) as Box<dyn Any + Send>)
        })
    }

    /// Creates a command that emits `Initialized` immediately.
    ///
    /// This synthetic startup event triggers the first render cycle and the
    /// first load without waiting for user input.
    pub(super) fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }
}
