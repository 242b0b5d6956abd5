//! Analytics panel: four summary cards.
//!
//! Counts are shown verbatim and the average rating with one decimal place.
//! A completion-rate line follows the cards when there is at least one
//! review.

use crate::api::models::AnalyticsSummary;

/// Inner width of a card, in columns.
const CARD_WIDTH: usize = 16;

/// Context for rendering the analytics view.
#[derive(Debug, Clone)]
pub struct AnalyticsViewContext<'a> {
    /// Summary to display. Missing analytics arrive as zeroed counts.
    pub summary: &'a AnalyticsSummary,
}

/// Component for displaying analytics summary cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticsCardsComponent;

impl AnalyticsCardsComponent {
    /// Renders the four cards side by side.
    #[must_use]
    pub fn view(ctx: &AnalyticsViewContext<'_>) -> String {
        let summary = ctx.summary;
        let cards = [
            ("Total Reviews", summary.total_reviews.to_string()),
            ("Completed", summary.completed_reviews.to_string()),
            ("Pending", summary.pending_reviews.to_string()),
            ("Average Rating", format!("{:.1}", summary.average_rating)),
        ];

        let border = "─".repeat(CARD_WIDTH);
        let top = cards.iter().map(|_| format!("┌{border}┐")).collect::<Vec<_>>();
        let labels = cards
            .iter()
            .map(|(label, _)| card_row(label))
            .collect::<Vec<_>>();
        let values = cards
            .iter()
            .map(|(_, value)| card_row(value))
            .collect::<Vec<_>>();
        let bottom = cards.iter().map(|_| format!("└{border}┘")).collect::<Vec<_>>();

        let mut output = String::new();
        for row in [top, labels, values, bottom] {
            output.push_str("  ");
            output.push_str(&row.join(" "));
            output.push('\n');
        }

        if let Some(rate) = completion_rate(summary) {
            output.push('\n');
            output.push_str(&format!("  Completion rate: {rate}%\n"));
        }

        output
    }
}

fn card_row(text: &str) -> String {
    format!("│ {text:<width$} │", width = CARD_WIDTH.saturating_sub(2))
}

/// Whole-number share of completed reviews, or `None` without reviews.
fn completion_rate(summary: &AnalyticsSummary) -> Option<u64> {
    summary
        .completed_reviews
        .saturating_mul(100)
        .checked_div(summary.total_reviews)
}
