//! Status-to-visual mapping for reviews and cycles.
//!
//! Every status resolves to an icon and a colour. There is no error case:
//! unrecognised review statuses fall back to the pending visual.

use crate::api::models::{CycleStatus, ReviewStatus};

/// Terminal colour applied to a status icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusColor {
    /// Finished work.
    Green,
    /// Work underway.
    Blue,
    /// Needs attention.
    Red,
    /// Waiting to start.
    Yellow,
    /// Inactive.
    Grey,
}

impl StatusColor {
    /// Returns the SGR foreground code for this colour.
    #[must_use]
    pub const fn ansi_code(self) -> &'static str {
        match self {
            Self::Green => "32",
            Self::Blue => "34",
            Self::Red => "31",
            Self::Yellow => "33",
            Self::Grey => "90",
        }
    }

    /// Wraps `text` in the colour's escape sequence, resetting afterwards.
    #[must_use]
    pub fn paint(self, text: &str) -> String {
        format!("\x1b[{}m{text}\x1b[0m", self.ansi_code())
    }
}

/// Icon and colour pair for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusPresentation {
    /// Single-glyph icon.
    pub icon: &'static str,
    /// Colour for the icon.
    pub color: StatusColor,
}

impl StatusPresentation {
    /// Returns the icon painted in its colour.
    #[must_use]
    pub fn painted_icon(self) -> String {
        self.color.paint(self.icon)
    }
}

const COMPLETED: StatusPresentation = StatusPresentation {
    icon: "✔",
    color: StatusColor::Green,
};
const IN_PROGRESS: StatusPresentation = StatusPresentation {
    icon: "◐",
    color: StatusColor::Blue,
};
const OVERDUE: StatusPresentation = StatusPresentation {
    icon: "!",
    color: StatusColor::Red,
};
const PENDING: StatusPresentation = StatusPresentation {
    icon: "○",
    color: StatusColor::Yellow,
};

/// Maps a review status to its visual.
#[must_use]
pub const fn review_status_presentation(status: ReviewStatus) -> StatusPresentation {
    match status {
        ReviewStatus::Completed => COMPLETED,
        ReviewStatus::InProgress => IN_PROGRESS,
        ReviewStatus::Overdue => OVERDUE,
        ReviewStatus::Pending | ReviewStatus::Unknown => PENDING,
    }
}

/// Maps a raw backend status string to its visual.
///
/// # Examples
///
/// ```
/// use reviewdeck::dashboard::status::{StatusColor, status_presentation};
///
/// assert_eq!(status_presentation("overdue").color, StatusColor::Red);
/// assert_eq!(status_presentation("snoozed").color, StatusColor::Yellow);
/// ```
#[must_use]
pub fn status_presentation(raw: &str) -> StatusPresentation {
    review_status_presentation(ReviewStatus::from_wire(raw))
}

/// Maps a cycle status to its visual.
#[must_use]
pub const fn cycle_status_presentation(status: CycleStatus) -> StatusPresentation {
    match status {
        CycleStatus::Active => StatusPresentation {
            icon: "●",
            color: StatusColor::Blue,
        },
        CycleStatus::Completed => COMPLETED,
        CycleStatus::Other => StatusPresentation {
            icon: "○",
            color: StatusColor::Grey,
        },
    }
}
