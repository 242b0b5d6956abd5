//! Data models for the review dashboard payloads.
//!
//! The backend owns these entities; the dashboard only displays them. Types
//! suffixed with `Envelope` are internal deserialisation targets that wrap
//! the documented `{ "reviews": [...] }` style response bodies.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;

mod wire;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use wire::parse_timestamp;

/// Lifecycle status of a single review assignment.
///
/// Values outside the documented set deserialise to [`ReviewStatus::Unknown`]
/// and are displayed with the pending visual.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// Assigned but not started.
    #[default]
    Pending,
    /// Started by the reviewer.
    InProgress,
    /// Submitted.
    Completed,
    /// Past its due date without submission.
    Overdue,
    /// Any status value the dashboard does not recognise.
    #[serde(other)]
    Unknown,
}

impl ReviewStatus {
    /// Interprets a raw backend status string.
    #[must_use]
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "pending" => Self::Pending,
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            "overdue" => Self::Overdue,
            _ => Self::Unknown,
        }
    }

    /// Returns the human-readable label shown in panels.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending | Self::Unknown => "Pending",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
            Self::Overdue => "Overdue",
        }
    }

    /// Returns true once the review has been submitted.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A person referenced by a review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Backend identifier.
    #[serde(default, deserialize_with = "wire::deserialize_id")]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
}

impl Participant {
    /// Returns the best available label for this person.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Unknown")
    }
}

/// The questionnaire template a review was created from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TemplateRef {
    /// Backend identifier.
    #[serde(default, deserialize_with = "wire::deserialize_id")]
    pub id: String,
    /// Template name.
    #[serde(default)]
    pub name: Option<String>,
}

/// A single feedback assignment between a reviewer and a reviewee.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Backend identifier.
    #[serde(deserialize_with = "wire::deserialize_id")]
    pub id: String,
    /// Person being reviewed.
    #[serde(default)]
    pub reviewee: Option<Participant>,
    /// Current status.
    #[serde(default)]
    pub status: ReviewStatus,
    /// Deadline for submission.
    #[serde(default, deserialize_with = "wire::deserialize_optional_timestamp")]
    pub due_date: Option<DateTime<Utc>>,
    /// Submission timestamp.
    #[serde(default, deserialize_with = "wire::deserialize_optional_timestamp")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Minutes the reviewer spent on the review.
    #[serde(default, deserialize_with = "wire::deserialize_lenient_count")]
    pub completion_time: Option<u32>,
    /// Overall rating given, from 1 to 5.
    #[serde(default, deserialize_with = "wire::deserialize_lenient_count")]
    pub overall_rating: Option<u8>,
    /// Gamification points awarded on completion.
    #[serde(default, deserialize_with = "wire::deserialize_lenient_count")]
    pub points_earned: Option<u32>,
    /// Template the review was created from.
    #[serde(default)]
    pub template: Option<TemplateRef>,
}

impl Review {
    /// Returns the reviewee label, falling back to `Unknown`.
    #[must_use]
    pub fn reviewee_name(&self) -> &str {
        self.reviewee
            .as_ref()
            .map_or("Unknown", Participant::display_name)
    }

    /// Returns the template name, if one is attached.
    #[must_use]
    pub fn template_name(&self) -> Option<&str> {
        self.template.as_ref().and_then(|t| t.name.as_deref())
    }
}

/// Status of a review cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleStatus {
    /// Reviews are being collected.
    Active,
    /// The cycle has closed.
    Completed,
    /// Draft, archived, or any other backend state.
    #[default]
    #[serde(other)]
    Other,
}

impl CycleStatus {
    /// Returns the human-readable label shown in panels.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Other => "Inactive",
        }
    }
}

/// Aggregate progress of a review cycle.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CycleProgress {
    /// Percentage of completed reviews, nominally within `[0, 100]`.
    pub completion_rate: f64,
    /// Number of completed reviews.
    pub completed_reviews: u64,
    /// Number of reviews in the cycle.
    pub total_reviews: u64,
}

/// A time-boxed batch of reviews with aggregate progress tracking.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCycle {
    /// Backend identifier.
    #[serde(deserialize_with = "wire::deserialize_id")]
    pub id: String,
    /// Cycle name.
    #[serde(default)]
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Current status.
    #[serde(default)]
    pub status: CycleStatus,
    /// First day of the cycle.
    #[serde(default, deserialize_with = "wire::deserialize_optional_timestamp")]
    pub start_date: Option<DateTime<Utc>>,
    /// Last day of the cycle.
    #[serde(default, deserialize_with = "wire::deserialize_optional_timestamp")]
    pub end_date: Option<DateTime<Utc>>,
    /// Progress summary.
    #[serde(default)]
    pub progress: CycleProgress,
}

/// Aggregate counts for the analytics overview.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsSummary {
    /// Number of reviews assigned.
    pub total_reviews: u64,
    /// Number of reviews submitted.
    pub completed_reviews: u64,
    /// Number of reviews still open.
    pub pending_reviews: u64,
    /// Mean overall rating across submitted reviews.
    pub average_rating: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReviewsEnvelope {
    #[serde(default)]
    pub(crate) reviews: Vec<Review>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CyclesEnvelope {
    #[serde(default)]
    pub(crate) cycles: Vec<ReviewCycle>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyticsEnvelope {
    #[serde(default)]
    pub(crate) analytics: AnalyticsSummary,
}
