//! Lifecycle and window handlers for the dashboard TUI.
//!
//! Handles startup initialisation, terminal resize events, and high-level
//! lifecycle messages such as quit and help toggling.

use bubbletea_rs::Cmd;

use super::DashboardApp;
use crate::dashboard::DashboardTab;
use crate::tui::messages::AppMsg;

impl DashboardApp {
    /// Dispatches lifecycle and window messages to their handlers.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Initialized => self.handle_initialized(),
            AppMsg::Quit => Self::handle_quit(),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            _ => {
                // Unreachable: caller filters to lifecycle messages.
                None
            }
        }
    }

    /// Starts the first load.
    ///
    /// `Initialized` is a one-shot startup event; repeats are ignored so the
    /// first load is not restarted.
    fn handle_initialized(&mut self) -> Option<Cmd> {
        if self.has_initialized {
            return None;
        }

        self.has_initialized = true;
        self.generation = self.generation.saturating_add(1);
        self.listening = true;
        Some(Self::load_cmd(self.generation, true))
    }

    /// Cancels outstanding requests before quitting.
    #[expect(
        clippy::unnecessary_wraps,
        reason = "Returns Option<Cmd> for consistency with other message handlers"
    )]
    fn handle_quit() -> Option<Cmd> {
        crate::tui::cancel_load();
        Some(bubbletea_rs::quit())
    }

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        let list_height = self.list_height();
        for tab in DashboardTab::ALL {
            if let Some(cursor) = self.cursor_mut(tab) {
                cursor.adjust_scroll_to_cursor(list_height);
            }
        }
        None
    }
}
