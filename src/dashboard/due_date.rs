//! Human-readable due dates and date formatting.
//!
//! Day differences are taken between UTC calendar dates rather than exact
//! 24-hour windows, so a deadline shortly after midnight reads as "Due
//! tomorrow" even when it is only minutes away, and a deadline earlier today
//! still reads as "Due today".

use std::fmt;

use chrono::{DateTime, Utc};

/// Placeholder shown wherever a date is absent.
pub const MISSING_DATE: &str = "—";

/// How far away a deadline is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DueLabel {
    /// The deadline fell on an earlier calendar day.
    Overdue,
    /// Due later today.
    Today,
    /// Due on the next calendar day.
    Tomorrow,
    /// Due in the given number of days (always greater than one).
    InDays(i64),
}

impl DueLabel {
    /// Returns true when the deadline is at most `days` calendar days away
    /// and has not yet passed.
    #[must_use]
    pub const fn is_within(self, days: i64) -> bool {
        match self {
            Self::Overdue => false,
            Self::Today => true,
            Self::Tomorrow => days >= 1,
            Self::InDays(remaining) => remaining <= days,
        }
    }
}

impl fmt::Display for DueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overdue => f.write_str("Overdue"),
            Self::Today => f.write_str("Due today"),
            Self::Tomorrow => f.write_str("Due tomorrow"),
            Self::InDays(days) => write!(f, "Due in {days} days"),
        }
    }
}

/// Classifies a deadline relative to `now`.
///
/// The label is derived from the number of calendar days between the two
/// UTC dates. Only a deadline on an earlier date is overdue, so a bare
/// calendar date due today reads as "Due today" for the whole day.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use reviewdeck::dashboard::due_date::{DueLabel, time_until_due};
///
/// let now = Utc::now();
/// assert_eq!(time_until_due(now, now), DueLabel::Today);
/// assert_eq!(time_until_due(now - Duration::days(2), now), DueLabel::Overdue);
/// assert_eq!(time_until_due(now - Duration::days(1), now), DueLabel::Overdue);
/// ```
#[must_use]
pub fn time_until_due(due: DateTime<Utc>, now: DateTime<Utc>) -> DueLabel {
    let days = due
        .date_naive()
        .signed_duration_since(now.date_naive())
        .num_days();
    match days {
        n if n < 0 => DueLabel::Overdue,
        0 => DueLabel::Today,
        1 => DueLabel::Tomorrow,
        n => DueLabel::InDays(n),
    }
}

/// Renders an optional due date as a label, or `No due date`.
#[must_use]
pub fn describe_due(due: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    due.map_or_else(
        || "No due date".to_owned(),
        |deadline| time_until_due(deadline, now).to_string(),
    )
}

/// Formats a timestamp as `Mon D, YYYY`.
///
/// # Examples
///
/// ```
/// use reviewdeck::api::models::parse_timestamp;
/// use reviewdeck::dashboard::due_date::format_date;
///
/// let date = parse_timestamp("2025-03-05").ok();
/// assert_eq!(format_date(date), "Mar 5, 2025");
/// assert_eq!(format_date(None), "—");
/// ```
#[must_use]
pub fn format_date(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp.map_or_else(
        || MISSING_DATE.to_owned(),
        |ts| ts.format("%b %-d, %Y").to_string(),
    )
}
