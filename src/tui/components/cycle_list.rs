//! Cycles panel: review cycles with a progress bar.

use crate::api::models::{CycleProgress, ReviewCycle};
use crate::dashboard::format_date;
use crate::dashboard::status::cycle_status_presentation;

use super::{ListWindow, render_empty, render_rows, status_icon};

/// Message shown when the backend reports no cycles.
pub const EMPTY_MESSAGE: &str = "No review cycles found.";

/// Number of cells in the progress bar.
const BAR_WIDTH: u8 = 10;

/// Context for rendering the cycles view.
#[derive(Debug, Clone)]
pub struct CycleListViewContext<'a> {
    /// Cycles in display order.
    pub cycles: &'a [ReviewCycle],
    /// Visible slice and cursor.
    pub window: ListWindow,
    /// Whether to colour status icons.
    pub styled: bool,
}

/// Component for displaying review cycles.
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleListComponent;

impl CycleListComponent {
    /// Renders the cycle list, or the empty-state message.
    #[must_use]
    pub fn view(ctx: &CycleListViewContext<'_>) -> String {
        if ctx.cycles.is_empty() {
            return render_empty(EMPTY_MESSAGE);
        }

        render_rows(ctx.cycles, ctx.window, |cycle| {
            Self::format_cycle_line(cycle, ctx.styled)
        })
    }

    fn format_cycle_line(cycle: &ReviewCycle, styled: bool) -> String {
        let icon = status_icon(cycle_status_presentation(cycle.status), styled);
        let name = &cycle.name;
        let status = cycle.status.label();
        let start = format_date(cycle.start_date);
        let end = format_date(cycle.end_date);
        let progress = format_progress(&cycle.progress);
        format!("{icon} {name:<24} {status:<9} {start} - {end}  {progress}")
    }
}

/// Renders `[████░░░░░░] 40%  4/10`.
fn format_progress(progress: &CycleProgress) -> String {
    let percent = clamped_percent(progress.completion_rate);
    let filled = progress_cells(percent);
    let empty = BAR_WIDTH.saturating_sub(filled);
    format!(
        "[{}{}] {percent:>3}%  {}/{}",
        "█".repeat(usize::from(filled)),
        "░".repeat(usize::from(empty)),
        progress.completed_reviews,
        progress.total_reviews
    )
}

/// Rounds a completion rate to a whole percentage within `0..=100`.
///
/// Out-of-range and non-finite rates are clamped for display only.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped to 0..=100 before the cast"
)]
fn clamped_percent(rate: f64) -> u8 {
    if rate.is_nan() {
        return 0;
    }
    rate.clamp(0.0, 100.0).round() as u8
}

fn progress_cells(percent: u8) -> u8 {
    let scaled = u16::from(percent).saturating_mul(u16::from(BAR_WIDTH));
    let cells = scaled.checked_div(100).unwrap_or(0);
    u8::try_from(cells).unwrap_or(BAR_WIDTH).min(BAR_WIDTH)
}
