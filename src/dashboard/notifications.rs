//! Reminders derived from review deadlines.
//!
//! The notifications tab has no endpoint of its own. Entries are computed
//! from the reviews dataset on every render: one per open review that is
//! overdue, and one per open review due within [`DUE_SOON_DAYS`].

use chrono::{DateTime, Utc};

use crate::api::models::{Review, ReviewStatus};

use super::due_date::{DueLabel, time_until_due};

/// Horizon, in calendar days, for "due soon" reminders.
pub const DUE_SOON_DAYS: i64 = 3;

/// Why a notification was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// The review is past its deadline.
    Overdue,
    /// The deadline is close.
    DueSoon(DueLabel),
}

/// A reminder about a single review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Identifier of the review the reminder refers to.
    pub review_id: String,
    /// Reason for the reminder.
    pub kind: NotificationKind,
    /// Message shown to the user.
    pub message: String,
}

/// Derives reminders for open reviews.
///
/// Overdue reminders come first, then due-soon reminders ordered by
/// deadline. Completed reviews never produce a reminder.
#[must_use]
pub fn derive_notifications(reviews: &[Review], now: DateTime<Utc>) -> Vec<Notification> {
    let mut overdue = Vec::new();
    let mut due_soon = Vec::new();

    for review in reviews.iter().filter(|r| !r.status.is_completed()) {
        let label = review.due_date.map(|due| time_until_due(due, now));
        let is_overdue = review.status == ReviewStatus::Overdue || label == Some(DueLabel::Overdue);

        if is_overdue {
            overdue.push(Notification {
                review_id: review.id.clone(),
                kind: NotificationKind::Overdue,
                message: format!("Review of {} is overdue", review.reviewee_name()),
            });
        } else if let (Some(due_label), Some(due)) = (label, review.due_date)
            && due_label.is_within(DUE_SOON_DAYS)
        {
            due_soon.push((
                due,
                Notification {
                    review_id: review.id.clone(),
                    kind: NotificationKind::DueSoon(due_label),
                    message: format!(
                        "Review of {}: {}",
                        review.reviewee_name(),
                        due_label.to_string().to_lowercase()
                    ),
                },
            ));
        }
    }

    due_soon.sort_by_key(|(due, _)| *due);
    overdue.extend(due_soon.into_iter().map(|(_, notification)| notification));
    overdue
}
