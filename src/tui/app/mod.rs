//! Main TUI application model implementing the MVU pattern.
//!
//! The model owns the tab selection, the three dataset slots and one cursor
//! per list tab. Datasets arrive one at a time as `DatasetLoaded` messages;
//! each is tagged with the load generation that produced it, and results
//! from a superseded generation are dropped.
//!
//! # Module Structure
//!
//! - `data_handlers`: Loading, refresh and dataset delivery
//! - `lifecycle_handlers`: Startup, help, resize and quit
//! - `model_impl`: `bubbletea_rs::Model` implementation and viewport
//!   normalisation
//! - `navigation`: Tab selection and cursor movement
//! - `rendering`: View rendering methods for terminal output

use chrono::{DateTime, Utc};

use bubbletea_rs::Cmd;

use crate::api::models::Review;
use crate::dashboard::{
    DashboardData, DashboardTab, Notification, TabState, derive_notifications,
};

use super::messages::AppMsg;
use super::state::ListCursor;

mod data_handlers;
mod lifecycle_handlers;
mod model_impl;
mod navigation;
mod rendering;

/// Rows used by the header, tab bar, spacer and status bar.
const CHROME_HEIGHT: usize = 4;

/// Smallest list height used for paging, even on tiny terminals.
const MIN_LIST_HEIGHT: usize = 1;

/// Main application model for the review dashboard.
#[derive(Debug)]
pub struct DashboardApp {
    /// Active tab.
    tabs: TabState,
    /// The three datasets as currently known.
    pub(crate) data: DashboardData,
    /// One cursor per tab, indexed by [`DashboardTab::index`].
    cursors: [ListCursor; DashboardTab::ALL.len()],
    /// Generation of the most recent load.
    generation: u64,
    /// Whether the startup event has been handled.
    has_initialized: bool,
    /// Whether a listener command is waiting for dataset results.
    listening: bool,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Source of the current time for due labels.
    clock: fn() -> DateTime<Utc>,
}

impl DashboardApp {
    /// Creates an application showing `initial_tab`, with every dataset
    /// pending.
    #[must_use]
    pub fn new(initial_tab: DashboardTab) -> Self {
        Self {
            tabs: TabState::new(initial_tab),
            data: DashboardData::pending(),
            cursors: [ListCursor::new(); DashboardTab::ALL.len()],
            generation: 0,
            has_initialized: false,
            listening: false,
            width: 80,
            height: 24,
            show_help: false,
            clock: Utc::now,
        }
    }

    /// Replaces the clock used for due-date labels.
    #[must_use]
    pub const fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the active tab.
    #[must_use]
    pub const fn active_tab(&self) -> DashboardTab {
        self.tabs.active()
    }

    /// Returns the datasets as currently known.
    #[must_use]
    pub const fn data(&self) -> &DashboardData {
        &self.data
    }

    /// Returns the generation of the most recent load.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns true while any dataset is still loading.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.data.is_loading()
    }

    /// Returns the cursor position in the active tab's list.
    #[must_use]
    pub fn cursor_position(&self) -> usize {
        self.cursor(self.active_tab())
            .map_or(0, |cursor| cursor.cursor_position)
    }

    /// Returns the current time according to the model's clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    /// Returns reviews that are not completed, in backend order.
    #[must_use]
    pub fn open_reviews(&self) -> Vec<&Review> {
        self.data.open_reviews()
    }

    /// Returns completed reviews, in backend order.
    #[must_use]
    pub fn completed_reviews(&self) -> Vec<&Review> {
        self.data.completed_reviews()
    }

    /// Returns reminders derived from the loaded reviews.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        derive_notifications(self.data.reviews(), self.now())
    }

    /// Returns the number of rows in a tab's list.
    #[must_use]
    pub fn item_count(&self, tab: DashboardTab) -> usize {
        match tab {
            DashboardTab::MyReviews => self.open_reviews().len(),
            DashboardTab::Completed => self.completed_reviews().len(),
            DashboardTab::Cycles => self.data.cycles().len(),
            DashboardTab::Analytics => 0,
            DashboardTab::Notifications => self.notifications().len(),
        }
    }

    /// Handles a message and updates state accordingly.
    ///
    /// Delegates to a handler per message category.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_tab() {
            return self.handle_tab_msg(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    fn cursor(&self, tab: DashboardTab) -> Option<&ListCursor> {
        self.cursors.get(tab.index())
    }

    fn cursor_mut(&mut self, tab: DashboardTab) -> Option<&mut ListCursor> {
        self.cursors.get_mut(tab.index())
    }

    /// Rows available to the panel body.
    fn list_height(&self) -> usize {
        usize::from(self.height)
            .saturating_sub(CHROME_HEIGHT)
            .max(MIN_LIST_HEIGHT)
    }

    /// Clamps every cursor after the datasets changed.
    fn clamp_cursors(&mut self) {
        let list_height = self.list_height();
        for tab in DashboardTab::ALL {
            let count = self.item_count(tab);
            if let Some(cursor) = self.cursor_mut(tab) {
                cursor.clamp_cursor(count);
                cursor.adjust_scroll_to_cursor(list_height);
            }
        }
    }
}

impl Default for DashboardApp {
    fn default() -> Self {
        Self::new(DashboardTab::default())
    }
}
