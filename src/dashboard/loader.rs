//! Concurrent, cancellable loading of the dashboard datasets.
//!
//! [`DashboardLoader`] issues the three dataset requests as independent Tokio
//! tasks. Each result is sent on a channel as soon as it arrives, so a slow
//! or failing endpoint never holds back the others. The loader owns its
//! tasks: cancelling or dropping it aborts whatever is still in flight.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinSet;

use crate::api::gateway::{DashboardGateway, Endpoint};
use crate::telemetry::{TelemetryEvent, TelemetrySink};

use super::resource::{DashboardData, DatasetPayload, DatasetUpdate};

/// Handle over one generation of in-flight dataset requests.
#[derive(Debug)]
pub struct DashboardLoader {
    generation: u64,
    tasks: JoinSet<()>,
}

impl DashboardLoader {
    /// Spawns one request task per endpoint on the current Tokio runtime.
    ///
    /// Results are tagged with `generation` and sent on `updates` in
    /// completion order.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use]
    pub fn spawn(
        gateway: Arc<dyn DashboardGateway>,
        generation: u64,
        updates: &UnboundedSender<DatasetUpdate>,
    ) -> Self {
        let mut tasks = JoinSet::new();
        for endpoint in Endpoint::ALL {
            let task_gateway = Arc::clone(&gateway);
            let sender = updates.clone();
            tasks.spawn(async move {
                let started = Instant::now();
                let payload = fetch_dataset(task_gateway.as_ref(), endpoint).await;
                let latency_ms = elapsed_millis(started);
                log_outcome(&payload, latency_ms);
                // The receiver is gone once the view has shut down.
                let _ignored = sender.send(DatasetUpdate {
                    generation,
                    latency_ms,
                    payload,
                });
            });
        }
        tracing::debug!(generation, "dashboard load started");
        Self { generation, tasks }
    }

    /// Returns the generation tag of this load.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Aborts every request that has not completed yet.
    pub fn cancel(&mut self) {
        if !self.tasks.is_empty() {
            tracing::debug!(generation = self.generation, "dashboard load cancelled");
        }
        self.tasks.abort_all();
    }
}

/// Requests a single dataset.
pub async fn fetch_dataset(gateway: &dyn DashboardGateway, endpoint: Endpoint) -> DatasetPayload {
    match endpoint {
        Endpoint::Reviews => DatasetPayload::Reviews(gateway.list_reviews().await),
        Endpoint::Cycles => DatasetPayload::Cycles(gateway.list_cycles().await),
        Endpoint::AnalyticsOverview => {
            DatasetPayload::Analytics(gateway.analytics_overview().await)
        }
    }
}

/// Loads all three datasets concurrently and waits for every result.
///
/// Used by the one-shot summary, which renders once everything has settled.
/// Each request is timed on its own and reported to `telemetry`.
pub async fn load_snapshot(
    gateway: &dyn DashboardGateway,
    telemetry: &dyn TelemetrySink,
) -> DashboardData {
    let (reviews, cycles, analytics) = tokio::join!(
        timed_fetch(gateway, Endpoint::Reviews),
        timed_fetch(gateway, Endpoint::Cycles),
        timed_fetch(gateway, Endpoint::AnalyticsOverview),
    );

    let mut data = DashboardData::pending();
    for (payload, latency_ms) in [reviews, cycles, analytics] {
        log_outcome(&payload, latency_ms);
        telemetry.record(TelemetryEvent::DatasetLoaded {
            endpoint: payload.endpoint().label().to_owned(),
            latency_ms,
            ok: payload.is_ok(),
        });
        data.apply(payload);
    }
    data
}

async fn timed_fetch(gateway: &dyn DashboardGateway, endpoint: Endpoint) -> (DatasetPayload, u64) {
    let started = Instant::now();
    let payload = fetch_dataset(gateway, endpoint).await;
    (payload, elapsed_millis(started))
}

fn log_outcome(payload: &DatasetPayload, latency_ms: u64) {
    let endpoint = payload.endpoint();
    match payload {
        DatasetPayload::Reviews(Err(error))
        | DatasetPayload::Cycles(Err(error))
        | DatasetPayload::Analytics(Err(error)) => {
            tracing::warn!(%endpoint, latency_ms, %error, "dataset failed to load");
        }
        DatasetPayload::Reviews(Ok(_))
        | DatasetPayload::Cycles(Ok(_))
        | DatasetPayload::Analytics(Ok(_)) => {
            tracing::info!(%endpoint, latency_ms, "dataset loaded");
        }
    }
}

fn elapsed_millis(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
