//! CLI operation mode handlers.
//!
//! - [`dashboard_tui`]: Interactive terminal dashboard
//! - [`summary`]: One-shot rendering of a single panel

pub mod dashboard_tui;
pub mod summary;
