//! My Reviews panel: open reviews assigned to the user.
//!
//! Each row shows the status icon, reviewee, template and how far away the
//! deadline is.

use chrono::{DateTime, Utc};

use crate::api::models::Review;
use crate::dashboard::describe_due;
use crate::dashboard::status::review_status_presentation;

use super::{ListWindow, PLACEHOLDER, render_empty, render_rows, status_icon};

/// Message shown when no open reviews are assigned.
pub const EMPTY_MESSAGE: &str = "No reviews assigned to you yet.";

/// Context for rendering the review list view.
#[derive(Debug, Clone)]
pub struct ReviewListViewContext<'a> {
    /// Open reviews in display order.
    pub reviews: &'a [&'a Review],
    /// Visible slice and cursor.
    pub window: ListWindow,
    /// Reference instant for due labels.
    pub now: DateTime<Utc>,
    /// Whether to colour status icons.
    pub styled: bool,
}

/// Component for displaying open reviews.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewListComponent;

impl ReviewListComponent {
    /// Renders the review list, or the empty-state message.
    #[must_use]
    pub fn view(ctx: &ReviewListViewContext<'_>) -> String {
        if ctx.reviews.is_empty() {
            return render_empty(EMPTY_MESSAGE);
        }

        render_rows(ctx.reviews, ctx.window, |review| {
            Self::format_review_line(review, ctx.now, ctx.styled)
        })
    }

    fn format_review_line(review: &Review, now: DateTime<Utc>, styled: bool) -> String {
        let icon = status_icon(review_status_presentation(review.status), styled);
        let name = review.reviewee_name();
        let template = review.template_name().unwrap_or(PLACEHOLDER);
        let due = describe_due(review.due_date, now);
        format!("{icon} {name:<24} {template:<20} {due}")
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use rstest::{fixture, rstest};

    use super::*;
    use crate::api::models::ReviewStatus;
    use crate::api::models::test_support::{review_due, review_for};
    use crate::tui::components::test_utils::strip_ansi_codes;

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 5, 10, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }

    fn window(cursor: usize) -> ListWindow {
        ListWindow {
            cursor: Some(cursor),
            scroll_offset: 0,
            visible_height: 10,
        }
    }

    #[rstest]
    fn empty_list_renders_message_not_rows(now: DateTime<Utc>) {
        let ctx = ReviewListViewContext {
            reviews: &[],
            window: window(0),
            now,
            styled: true,
        };

        let output = ReviewListComponent::view(&ctx);

        assert_eq!(output, format!("  {EMPTY_MESSAGE}\n"));
        assert!(!output.contains('>'), "no cursor row should render");
    }

    #[rstest]
    fn rows_show_reviewee_template_and_due_label(now: DateTime<Utc>) {
        let first = review_due("r-1", "Ada Lovelace", now + Duration::days(1));
        let second = review_for("r-2", "Grace Hopper", ReviewStatus::InProgress);
        let reviews = vec![&first, &second];
        let ctx = ReviewListViewContext {
            reviews: &reviews,
            window: window(1),
            now,
            styled: false,
        };

        let output = ReviewListComponent::view(&ctx);
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        let first_line = lines.first().expect("first row");
        assert!(first_line.starts_with("  ○ Ada Lovelace"));
        assert!(first_line.contains("Peer review"));
        assert!(first_line.ends_with("Due tomorrow"));
        let second_line = lines.get(1).expect("second row");
        assert!(second_line.starts_with("> ◐ Grace Hopper"));
        assert!(second_line.ends_with("No due date"));
    }

    #[rstest]
    fn styled_rows_colour_the_icon(now: DateTime<Utc>) {
        let overdue = review_for("r-1", "Ada", ReviewStatus::Overdue);
        let reviews = vec![&overdue];
        let ctx = ReviewListViewContext {
            reviews: &reviews,
            window: window(0),
            now,
            styled: true,
        };

        let output = ReviewListComponent::view(&ctx);

        assert!(output.contains("\x1b[31m!\x1b[0m"));
        assert!(strip_ansi_codes(&output).starts_with("> ! Ada"));
    }
}
