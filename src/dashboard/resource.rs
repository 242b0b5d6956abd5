//! Per-dataset load state held by the dashboard.
//!
//! Each of the three datasets loads independently, so the dashboard keeps a
//! [`Resource`] per dataset and renders whatever is available. A failed load
//! renders exactly like an empty one; the failure itself is still recorded so
//! the status bar and logs can report it.

use crate::api::error::DashboardError;
use crate::api::gateway::Endpoint;
use crate::api::models::{AnalyticsSummary, Review, ReviewCycle};

/// Load state of one dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Resource<T> {
    /// Request issued, no answer yet.
    #[default]
    Pending,
    /// Data available.
    Ready(T),
    /// The request failed with the given message.
    Failed(String),
}

impl<T> Resource<T> {
    /// Builds a resource from a gateway result.
    #[must_use]
    pub fn from_result(result: Result<T, DashboardError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(error) => Self::Failed(error.to_string()),
        }
    }

    /// Returns the data if it has loaded.
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Pending | Self::Failed(_) => None,
        }
    }

    /// Returns true while the request is outstanding.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns the failure message, if the load failed.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Pending | Self::Ready(_) => None,
        }
    }
}

/// The result of loading one dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetPayload {
    /// Result of the reviews request.
    Reviews(Result<Vec<Review>, DashboardError>),
    /// Result of the cycles request.
    Cycles(Result<Vec<ReviewCycle>, DashboardError>),
    /// Result of the analytics request.
    Analytics(Result<AnalyticsSummary, DashboardError>),
}

impl DatasetPayload {
    /// Returns the endpoint this payload came from.
    #[must_use]
    pub const fn endpoint(&self) -> Endpoint {
        match self {
            Self::Reviews(_) => Endpoint::Reviews,
            Self::Cycles(_) => Endpoint::Cycles,
            Self::Analytics(_) => Endpoint::AnalyticsOverview,
        }
    }

    /// Returns true if the request succeeded.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        match self {
            Self::Reviews(result) => result.is_ok(),
            Self::Cycles(result) => result.is_ok(),
            Self::Analytics(result) => result.is_ok(),
        }
    }
}

/// A dataset result tagged with the load generation that produced it.
///
/// Results from a superseded generation are ignored by the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetUpdate {
    /// Generation of the load that issued the request.
    pub generation: u64,
    /// Milliseconds between issuing the request and receiving the result.
    pub latency_ms: u64,
    /// The dataset result.
    pub payload: DatasetPayload,
}

/// All three datasets as currently known.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    /// Reviews assigned to the user.
    pub reviews: Resource<Vec<Review>>,
    /// Review cycles.
    pub cycles: Resource<Vec<ReviewCycle>>,
    /// Analytics overview.
    pub analytics: Resource<AnalyticsSummary>,
}

impl DashboardData {
    /// Creates data with every dataset pending.
    #[must_use]
    pub fn pending() -> Self {
        Self::default()
    }

    /// Stores a dataset result, replacing any previous value for it.
    pub fn apply(&mut self, payload: DatasetPayload) {
        match payload {
            DatasetPayload::Reviews(result) => self.reviews = Resource::from_result(result),
            DatasetPayload::Cycles(result) => self.cycles = Resource::from_result(result),
            DatasetPayload::Analytics(result) => self.analytics = Resource::from_result(result),
        }
    }

    /// Returns true while any dataset is still loading.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.reviews.is_pending() || self.cycles.is_pending() || self.analytics.is_pending()
    }

    /// Returns the endpoints whose last load failed, in display order.
    #[must_use]
    pub fn failed_endpoints(&self) -> Vec<Endpoint> {
        let failures = [
            (Endpoint::Reviews, self.reviews.failure().is_some()),
            (Endpoint::Cycles, self.cycles.failure().is_some()),
            (Endpoint::AnalyticsOverview, self.analytics.failure().is_some()),
        ];
        failures
            .into_iter()
            .filter_map(|(endpoint, failed)| failed.then_some(endpoint))
            .collect()
    }

    /// Returns the loaded reviews, or an empty slice.
    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        self.reviews.ready().map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns loaded reviews that are not completed, in backend order.
    #[must_use]
    pub fn open_reviews(&self) -> Vec<&Review> {
        self.reviews()
            .iter()
            .filter(|review| !review.status.is_completed())
            .collect()
    }

    /// Returns loaded completed reviews, in backend order.
    #[must_use]
    pub fn completed_reviews(&self) -> Vec<&Review> {
        self.reviews()
            .iter()
            .filter(|review| review.status.is_completed())
            .collect()
    }

    /// Returns the loaded cycles, or an empty slice.
    #[must_use]
    pub fn cycles(&self) -> &[ReviewCycle] {
        self.cycles.ready().map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the loaded analytics, or zeroed counts.
    #[must_use]
    pub fn analytics(&self) -> AnalyticsSummary {
        self.analytics.ready().cloned().unwrap_or_default()
    }
}
