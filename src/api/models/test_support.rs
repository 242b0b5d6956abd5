//! Test helpers for constructing dashboard model fixtures.
//!
//! # Examples
//!
//! ```
//! use reviewdeck::api::models::ReviewStatus;
//! use reviewdeck::api::models::test_support::review_for;
//!
//! let review = review_for("r-1", "Ada", ReviewStatus::Pending);
//! assert_eq!(review.reviewee_name(), "Ada");
//! ```

use chrono::{DateTime, Utc};

use super::{
    AnalyticsSummary, CycleProgress, CycleStatus, Participant, Review, ReviewCycle, ReviewStatus,
    TemplateRef,
};

/// Constructs a review with only the identifier, reviewee, and status set.
#[must_use]
pub fn review_for(id: &str, reviewee: &str, status: ReviewStatus) -> Review {
    Review {
        id: id.to_owned(),
        reviewee: Some(Participant {
            id: format!("user-{id}"),
            name: Some(reviewee.to_owned()),
            email: None,
        }),
        status,
        due_date: None,
        completed_at: None,
        completion_time: None,
        overall_rating: None,
        points_earned: None,
        template: Some(TemplateRef {
            id: "template-1".to_owned(),
            name: Some("Peer review".to_owned()),
        }),
    }
}

/// Constructs an open review due at the given instant.
#[must_use]
pub fn review_due(id: &str, reviewee: &str, due: DateTime<Utc>) -> Review {
    Review {
        due_date: Some(due),
        ..review_for(id, reviewee, ReviewStatus::Pending)
    }
}

/// Constructs a completed review with a rating and points.
#[must_use]
pub fn completed_review(id: &str, reviewee: &str, rating: u8, points: u32) -> Review {
    Review {
        overall_rating: Some(rating),
        points_earned: Some(points),
        completion_time: Some(25),
        ..review_for(id, reviewee, ReviewStatus::Completed)
    }
}

/// Constructs a cycle with the given progress counts.
#[must_use]
pub fn cycle_with_progress(id: &str, name: &str, completed: u64, total: u64) -> ReviewCycle {
    let completion_rate = if total == 0 {
        0.0
    } else {
        percentage(completed, total)
    };
    ReviewCycle {
        id: id.to_owned(),
        name: name.to_owned(),
        description: None,
        status: CycleStatus::Active,
        start_date: None,
        end_date: None,
        progress: CycleProgress {
            completion_rate,
            completed_reviews: completed,
            total_reviews: total,
        },
    }
}

/// Constructs an analytics summary.
#[must_use]
pub const fn analytics(
    total_reviews: u64,
    completed_reviews: u64,
    pending_reviews: u64,
    average_rating: f64,
) -> AnalyticsSummary {
    AnalyticsSummary {
        total_reviews,
        completed_reviews,
        pending_reviews,
        average_rating,
    }
}

#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "fixture counts are small"
)]
fn percentage(completed: u64, total: u64) -> f64 {
    completed as f64 * 100.0 / total as f64
}
