//! Tab selection and cursor movement.
//!
//! Cursor messages act on the active tab's list only. The analytics tab has
//! no list, so cursor messages are ignored there.

use bubbletea_rs::Cmd;

use super::DashboardApp;
use crate::dashboard::DashboardTab;
use crate::tui::messages::AppMsg;
use crate::tui::state::ListCursor;

impl DashboardApp {
    /// Dispatches tab messages to their handlers.
    pub(super) fn handle_tab_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let target = match msg {
            AppMsg::SelectTab(tab) => *tab,
            AppMsg::NextTab => self.active_tab().next(),
            AppMsg::PrevTab => self.active_tab().previous(),
            _ => {
                // Unreachable: caller filters to tab messages.
                return None;
            }
        };
        self.select_tab(target)
    }

    /// Activates `tab`. Selection is the only state change.
    fn select_tab(&mut self, tab: DashboardTab) -> Option<Cmd> {
        if self.tabs.select(tab) {
            tracing::trace!(%tab, "tab selected");
        }
        None
    }

    /// Dispatches navigation messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let tab = self.active_tab();
        if !tab.has_list() {
            return None;
        }

        let count = self.item_count(tab);
        let max_index = count.saturating_sub(1);
        let page_size = self.list_height();

        let Some(cursor) = self.cursor_mut(tab) else {
            return None;
        };
        apply_navigation(cursor, msg, max_index, page_size);
        cursor.clamp_cursor(count);
        cursor.adjust_scroll_to_cursor(page_size);
        None
    }
}

fn apply_navigation(cursor: &mut ListCursor, msg: &AppMsg, max_index: usize, page_size: usize) {
    match msg {
        AppMsg::CursorUp => cursor.cursor_up(),
        AppMsg::CursorDown => cursor.cursor_down(max_index),
        AppMsg::PageUp => cursor.page_up(page_size),
        AppMsg::PageDown => cursor.page_down(page_size, max_index),
        AppMsg::Home => cursor.home(),
        AppMsg::End => cursor.end(max_index),
        _ => {
            debug_assert!(false, "non-navigation message routed to apply_navigation");
        }
    }
}
