//! Presentation-independent dashboard logic.
//!
//! This module holds everything the review dashboard needs apart from the
//! terminal itself: tab selection, status visuals, due-date wording, derived
//! notifications, per-dataset load state and the concurrent loader that
//! fills it.

pub mod due_date;
pub mod loader;
pub mod notifications;
pub mod resource;
pub mod status;
pub mod tabs;

pub use due_date::{DueLabel, describe_due, format_date, time_until_due};
pub use loader::{DashboardLoader, fetch_dataset, load_snapshot};
pub use notifications::{Notification, NotificationKind, derive_notifications};
pub use resource::{DashboardData, DatasetPayload, DatasetUpdate, Resource};
pub use status::{StatusColor, StatusPresentation, status_presentation};
pub use tabs::{DashboardTab, TabState};
