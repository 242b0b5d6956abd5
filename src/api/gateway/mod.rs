//! Gateways for loading dashboard data from the review backend.
//!
//! Rendering code never talks HTTP directly: it depends on the
//! [`DashboardGateway`] trait so tests can substitute mocks while
//! [`HttpDashboardGateway`] performs the real requests.

mod client;
mod error_mapping;

pub use client::HttpDashboardGateway;

use std::fmt;

use async_trait::async_trait;

use crate::api::error::DashboardError;
use crate::api::models::{AnalyticsSummary, Review, ReviewCycle};

/// The read-only endpoints the dashboard consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /api/reviews/dev`
    Reviews,
    /// `GET /api/reviews/dev/cycles`
    Cycles,
    /// `GET /api/reviews/dev/analytics/overview`
    AnalyticsOverview,
}

impl Endpoint {
    /// All endpoints in display order.
    pub const ALL: [Self; 3] = [Self::Reviews, Self::Cycles, Self::AnalyticsOverview];

    /// Returns the absolute request path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Reviews => "/api/reviews/dev",
            Self::Cycles => "/api/reviews/dev/cycles",
            Self::AnalyticsOverview => "/api/reviews/dev/analytics/overview",
        }
    }

    /// Returns the short dataset name used in logs and status messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Reviews => "reviews",
            Self::Cycles => "cycles",
            Self::AnalyticsOverview => "analytics",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Read-only access to the dashboard datasets.
///
/// Each method is independent: callers may issue all three concurrently and
/// must not assume any ordering between their completions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardGateway: Send + Sync {
    /// Fetch the reviews assigned to the current user.
    async fn list_reviews(&self) -> Result<Vec<Review>, DashboardError>;

    /// Fetch the review cycles.
    async fn list_cycles(&self) -> Result<Vec<ReviewCycle>, DashboardError>;

    /// Fetch the aggregate analytics summary.
    async fn analytics_overview(&self) -> Result<AnalyticsSummary, DashboardError>;
}
