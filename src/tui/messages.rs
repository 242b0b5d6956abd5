//! Message types for the TUI update loop.
//!
//! Messages represent user actions, async command results, and system
//! events.

use crate::dashboard::{DashboardTab, DatasetUpdate};

/// Messages for the dashboard TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one item.
    CursorUp,
    /// Move cursor down one item.
    CursorDown,
    /// Move cursor up one page.
    PageUp,
    /// Move cursor down one page.
    PageDown,
    /// Move cursor to first item.
    Home,
    /// Move cursor to last item.
    End,

    // Tabs
    /// Activate a specific tab.
    SelectTab(DashboardTab),
    /// Activate the tab to the right, wrapping.
    NextTab,
    /// Activate the tab to the left, wrapping.
    PrevTab,

    // Data loading
    /// Discard current data and reload every dataset.
    RefreshRequested,
    /// One dataset request finished.
    DatasetLoaded(DatasetUpdate),

    // Application lifecycle
    /// Startup event emitted once after `init`.
    Initialized,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for cursor movement messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::PageUp
                | Self::PageDown
                | Self::Home
                | Self::End
        )
    }

    /// Returns true for tab selection messages.
    #[must_use]
    pub const fn is_tab(&self) -> bool {
        matches!(self, Self::SelectTab(_) | Self::NextTab | Self::PrevTab)
    }

    /// Returns true for data loading messages.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(self, Self::RefreshRequested | Self::DatasetLoaded(_))
    }
}
