//! Completed panel: submitted reviews with rating, points and timing.

use crate::api::models::Review;
use crate::dashboard::format_date;
use crate::dashboard::status::review_status_presentation;

use super::{ListWindow, PLACEHOLDER, render_empty, render_rows, status_icon};

/// Message shown when nothing has been submitted.
pub const EMPTY_MESSAGE: &str = "No completed reviews yet.";

/// Context for rendering the completed reviews view.
#[derive(Debug, Clone)]
pub struct CompletedListViewContext<'a> {
    /// Completed reviews in display order.
    pub reviews: &'a [&'a Review],
    /// Visible slice and cursor.
    pub window: ListWindow,
    /// Whether to colour status icons.
    pub styled: bool,
}

/// Component for displaying completed reviews.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompletedListComponent;

impl CompletedListComponent {
    /// Renders the completed reviews, or the empty-state message.
    #[must_use]
    pub fn view(ctx: &CompletedListViewContext<'_>) -> String {
        if ctx.reviews.is_empty() {
            return render_empty(EMPTY_MESSAGE);
        }

        render_rows(ctx.reviews, ctx.window, |review| {
            Self::format_completed_line(review, ctx.styled)
        })
    }

    fn format_completed_line(review: &Review, styled: bool) -> String {
        let icon = status_icon(review_status_presentation(review.status), styled);
        let name = review.reviewee_name();
        let rating = format_rating(review.overall_rating);
        let points = review
            .points_earned
            .map_or_else(|| PLACEHOLDER.to_owned(), |points| format!("{points} pts"));
        let completed_on = format_date(review.completed_at);
        let duration = review
            .completion_time
            .map_or_else(|| PLACEHOLDER.to_owned(), |minutes| format!("{minutes} min"));
        format!("{icon} {name:<24} {rating:<7} {points:>8}  {completed_on:<12}  {duration}")
    }
}

/// Renders a 1-5 rating as `★ n/5`.
fn format_rating(rating: Option<u8>) -> String {
    rating.map_or_else(|| format!("★ {PLACEHOLDER}"), |stars| format!("★ {stars}/5"))
}
