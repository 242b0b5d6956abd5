//! Data access for the review backend.
//!
//! This module owns everything that crosses the network: connection
//! settings, the [`gateway::DashboardGateway`] port with its HTTP
//! implementation, the payload models, and the error taxonomy.

pub mod error;
pub mod gateway;
pub mod models;
pub mod settings;

pub use error::DashboardError;
pub use gateway::{DashboardGateway, Endpoint, HttpDashboardGateway};
pub use models::{
    AnalyticsSummary, CycleProgress, CycleStatus, Participant, Review, ReviewCycle, ReviewStatus,
    TemplateRef,
};
pub use settings::{ApiToken, GatewaySettings};
