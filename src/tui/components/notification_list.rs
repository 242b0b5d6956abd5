//! Notifications panel: reminders about overdue and soon-due reviews.

use crate::dashboard::{Notification, NotificationKind, StatusColor};

use super::{ListWindow, render_empty, render_rows};

/// Message shown when there is nothing to remind the user about.
pub const EMPTY_MESSAGE: &str = "You're all caught up.";

/// Context for rendering the notifications view.
#[derive(Debug, Clone)]
pub struct NotificationListViewContext<'a> {
    /// Notifications in display order.
    pub notifications: &'a [Notification],
    /// Visible slice and cursor.
    pub window: ListWindow,
    /// Whether to colour markers.
    pub styled: bool,
}

/// Component for displaying notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationListComponent;

impl NotificationListComponent {
    /// Renders the notifications, or the empty-state message.
    #[must_use]
    pub fn view(ctx: &NotificationListViewContext<'_>) -> String {
        if ctx.notifications.is_empty() {
            return render_empty(EMPTY_MESSAGE);
        }

        render_rows(ctx.notifications, ctx.window, |notification| {
            let marker = marker(notification.kind, ctx.styled);
            format!("{marker} {}", notification.message)
        })
    }
}

fn marker(kind: NotificationKind, styled: bool) -> String {
    let (glyph, color) = match kind {
        NotificationKind::Overdue => ("!", StatusColor::Red),
        NotificationKind::DueSoon(_) => ("•", StatusColor::Yellow),
    };
    if styled {
        color.paint(glyph)
    } else {
        glyph.to_owned()
    }
}
