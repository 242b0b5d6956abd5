//! UI components for the dashboard panels.
//!
//! Components are stateless: each takes a `*ViewContext` describing what to
//! draw and returns the rendered text. Scrolling and cursor state live in the
//! application model and reach components through [`ListWindow`].

mod analytics_cards;
mod completed_list;
mod cycle_list;
mod notification_list;
mod panel;
mod review_list;
mod tab_bar;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

pub use analytics_cards::{AnalyticsCardsComponent, AnalyticsViewContext};
pub use completed_list::{CompletedListComponent, CompletedListViewContext};
pub use cycle_list::{CycleListComponent, CycleListViewContext};
pub use notification_list::{NotificationListComponent, NotificationListViewContext};
pub use panel::{PanelComponent, PanelViewContext};
pub use review_list::{ReviewListComponent, ReviewListViewContext};
pub use tab_bar::{TabBarComponent, TabBarViewContext};

use crate::dashboard::StatusPresentation;
use crate::dashboard::due_date::MISSING_DATE as PLACEHOLDER;

/// The slice of a list that is currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListWindow {
    /// Highlighted row, if the list is interactive.
    pub cursor: Option<usize>,
    /// Index of the first visible row.
    pub scroll_offset: usize,
    /// Maximum number of rows to render.
    pub visible_height: usize,
}

impl ListWindow {
    /// A window showing every row without a cursor, for one-shot output.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            cursor: None,
            scroll_offset: 0,
            visible_height: usize::MAX,
        }
    }
}

/// Renders the visible rows of `items`, prefixing the cursor row with `>`.
fn render_rows<T>(items: &[T], window: ListWindow, format_row: impl Fn(&T) -> String) -> String {
    let mut output = String::new();
    for (index, item) in items
        .iter()
        .enumerate()
        .skip(window.scroll_offset)
        .take(window.visible_height)
    {
        let prefix = if window.cursor == Some(index) {
            ">"
        } else {
            " "
        };
        output.push_str(prefix);
        output.push(' ');
        output.push_str(&format_row(item));
        output.push('\n');
    }
    output
}

/// Renders the placeholder shown instead of an empty list.
fn render_empty(message: &str) -> String {
    format!("  {message}\n")
}

/// Returns the status icon, coloured when `styled` is set.
fn status_icon(presentation: StatusPresentation, styled: bool) -> String {
    if styled {
        presentation.painted_icon()
    } else {
        presentation.icon.to_owned()
    }
}
