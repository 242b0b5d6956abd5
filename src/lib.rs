//! ReviewDeck library crate: a terminal dashboard for a team-feedback
//! backend.
//!
//! The library fetches the reviewer's reviews, the review cycles and the
//! analytics overview over HTTP, derives presentation values such as status
//! icons, due-date labels and reminders, and renders them as five tab
//! panels. The binary runs them either as an interactive bubbletea-rs
//! dashboard or as a one-shot summary.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod telemetry;
pub mod tui;

pub use api::{
    ApiToken, DashboardError, DashboardGateway, Endpoint, GatewaySettings, HttpDashboardGateway,
};
pub use config::{OperationMode, ReviewDeckConfig};
pub use dashboard::{DashboardData, DashboardTab};
