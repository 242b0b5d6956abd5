//! The five mutually exclusive dashboard tabs.

use std::fmt;
use std::str::FromStr;

use crate::api::error::DashboardError;

/// Identifier of a dashboard panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DashboardTab {
    /// Open reviews assigned to the user.
    #[default]
    MyReviews,
    /// Submitted reviews.
    Completed,
    /// Review cycles and their progress.
    Cycles,
    /// Aggregate summary cards.
    Analytics,
    /// Reminders derived from review deadlines.
    Notifications,
}

impl DashboardTab {
    /// All tabs in display order.
    pub const ALL: [Self; 5] = [
        Self::MyReviews,
        Self::Completed,
        Self::Cycles,
        Self::Analytics,
        Self::Notifications,
    ];

    /// Returns the stable kebab-case identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::MyReviews => "my-reviews",
            Self::Completed => "completed",
            Self::Cycles => "cycles",
            Self::Analytics => "analytics",
            Self::Notifications => "notifications",
        }
    }

    /// Returns the title shown in the tab bar.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::MyReviews => "My Reviews",
            Self::Completed => "Completed",
            Self::Cycles => "Cycles",
            Self::Analytics => "Analytics",
            Self::Notifications => "Notifications",
        }
    }

    /// Returns the zero-based position in [`DashboardTab::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::MyReviews => 0,
            Self::Completed => 1,
            Self::Cycles => 2,
            Self::Analytics => 3,
            Self::Notifications => 4,
        }
    }

    /// Returns the tab at a zero-based position, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the following tab, wrapping after the last one.
    #[must_use]
    pub fn next(self) -> Self {
        Self::from_index(self.index().saturating_add(1)).unwrap_or(Self::MyReviews)
    }

    /// Returns the preceding tab, wrapping before the first one.
    #[must_use]
    pub fn previous(self) -> Self {
        match self.index().checked_sub(1) {
            Some(index) => Self::from_index(index).unwrap_or(Self::Notifications),
            None => Self::Notifications,
        }
    }

    /// Returns true for tabs that render a navigable list.
    #[must_use]
    pub const fn has_list(self) -> bool {
        !matches!(self, Self::Analytics)
    }
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DashboardTab {
    type Err = DashboardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.id() == value)
            .ok_or_else(|| DashboardError::Configuration {
                message: format!(
                    "unknown tab '{value}' (expected one of: my-reviews, completed, cycles, \
                     analytics, notifications)"
                ),
            })
    }
}

/// Single-selection state over the dashboard tabs.
///
/// Selecting a tab is the only mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabState {
    active: DashboardTab,
}

impl TabState {
    /// Creates state with the given tab active.
    #[must_use]
    pub const fn new(active: DashboardTab) -> Self {
        Self { active }
    }

    /// Returns the active tab.
    #[must_use]
    pub const fn active(self) -> DashboardTab {
        self.active
    }

    /// Activates `tab`, returning true if the selection changed.
    pub fn select(&mut self, tab: DashboardTab) -> bool {
        let changed = self.active != tab;
        self.active = tab;
        changed
    }

    /// Returns true if `tab` is the active tab.
    #[must_use]
    pub fn is_active(self, tab: DashboardTab) -> bool {
        self.active == tab
    }
}
