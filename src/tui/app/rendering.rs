//! Rendering logic for the dashboard TUI application.
//!
//! These are pure query methods that read state without modification.
//! Exactly one panel is rendered: the one for the active tab.

use super::DashboardApp;
use crate::api::gateway::Endpoint;
use crate::dashboard::DashboardTab;
use crate::tui::components::{
    ListWindow, PanelComponent, PanelViewContext, TabBarComponent, TabBarViewContext,
};

/// Title shown in the header bar.
pub(crate) const TITLE: &str = "ReviewDeck - Team Feedback";

impl DashboardApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let loading_indicator = if self.is_loading() {
            " [Loading...]"
        } else {
            ""
        };
        format!("{TITLE}{loading_indicator}\n")
    }

    /// Renders the tab bar.
    pub(super) fn render_tab_bar(&self) -> String {
        TabBarComponent::view(&TabBarViewContext {
            active: self.active_tab(),
            notification_count: self.notifications().len(),
        })
    }

    /// Renders the active tab's panel.
    pub(super) fn render_panel(&self) -> String {
        let tab = self.active_tab();
        PanelComponent::view(&PanelViewContext {
            tab,
            data: &self.data,
            now: self.now(),
            window: self.window(tab),
            styled: true,
        })
    }

    /// Renders the status bar: failed datasets, or key hints.
    pub(super) fn render_status_bar(&self) -> String {
        let failed = self.data.failed_endpoints();
        if !failed.is_empty() {
            return format!("Failed to load: {}  r:retry  q:quit\n", join_labels(&failed));
        }

        let hints = if self.width <= 80 {
            "1-5:tabs  j/k:move  r:refresh  ?:help  q:quit"
        } else {
            "1-5:tabs  Tab/h/l:switch  j/k:move  g/G:top/bottom  r:refresh  ?:help  q:quit"
        };
        format!("{hints}\n")
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Tabs:
  1-5        Jump to tab
  Tab, l     Next tab
  S-Tab, h   Previous tab

Navigation:
  j, Down    Move cursor down
  k, Up      Move cursor up
  PgDn       Page down
  PgUp       Page up
  Home, g    Go to first item
  End, G     Go to last item

Other:
  r          Reload all data
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";
        help_text.to_owned()
    }

    fn window(&self, tab: DashboardTab) -> ListWindow {
        let cursor = self.cursor(tab).copied().unwrap_or_default();
        ListWindow {
            cursor: Some(cursor.cursor_position),
            scroll_offset: cursor.scroll_offset,
            visible_height: self.list_height(),
        }
    }
}

fn join_labels(endpoints: &[Endpoint]) -> String {
    endpoints
        .iter()
        .map(|endpoint| endpoint.label())
        .collect::<Vec<_>>()
        .join(", ")
}
