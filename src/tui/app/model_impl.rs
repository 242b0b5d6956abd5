//! `Model` trait implementation for the dashboard application.
//!
//! Handles initialisation, update dispatch and frame assembly, and clamps
//! every frame to the terminal so shorter rows overwrite stale cells.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::DashboardApp;
use crate::tui::input::map_key_to_message;
use crate::tui::messages::AppMsg;

impl Model for DashboardApp {
    fn init() -> (Self, Option<Cmd>) {
        let model = Self::new(crate::tui::initial_tab());

        // The first load starts when `Initialized` is handled.
        (model, Some(Self::immediate_init_cmd()))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            return map_key_to_message(key_msg).and_then(|mapped| self.handle_message(&mapped));
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            return self.handle_message(&AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            });
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_tab_bar());
        output.push('\n');
        output.push_str(&self.pad_panel(&self.render_panel()));
        output.push_str(&self.render_status_bar());

        self.normalise_viewport(&output)
    }
}

impl DashboardApp {
    /// Pads or cuts the panel so the status bar sits on the last row.
    fn pad_panel(&self, panel: &str) -> String {
        let height = self.list_height();
        let mut lines: Vec<&str> = panel.lines().take(height).collect();
        let missing = height.saturating_sub(lines.len());
        lines.extend(std::iter::repeat_n("", missing));

        let mut padded = lines.join("\n");
        padded.push('\n');
        padded
    }

    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than the terminal width to avoid
    /// autowrap, and padded with spaces to clear stale cells after resize.
    pub(super) fn normalise_viewport(&self, output: &str) -> String {
        let width = usize::from(self.width.max(1));
        let safe_width = width.saturating_sub(1).max(1);
        let height = usize::from(self.height.max(1));

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| fit_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_n(blank, missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

/// Fits `line` to exactly `width` visible columns.
///
/// Escape sequences pass through without counting towards the width. If the
/// line was styled and cut before its reset, a reset is appended.
fn fit_line(line: &str, width: usize) -> String {
    let mut output = String::with_capacity(line.len());
    let mut visible = 0usize;
    let mut escape = EscapeState::default();

    for ch in line.chars() {
        if escape.in_sequence {
            output.push(ch);
            escape.sequence.push(ch);
            if ch.is_ascii_alphabetic() {
                escape.finish();
            }
            continue;
        }

        if ch == '\x1b' {
            escape.in_sequence = true;
            output.push(ch);
            continue;
        }

        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible.saturating_add(char_width) > width {
            break;
        }
        output.push(ch);
        visible = visible.saturating_add(char_width);
    }

    output.push_str(&" ".repeat(width.saturating_sub(visible)));

    if escape.style_open {
        output.push_str("\x1b[0m");
    }
    output
}

/// Tracks the escape sequence being copied and whether a style is active.
#[derive(Default)]
struct EscapeState {
    in_sequence: bool,
    sequence: String,
    style_open: bool,
}

impl EscapeState {
    fn finish(&mut self) {
        if self.sequence.ends_with('m') {
            self.style_open = !matches!(self.sequence.as_str(), "[0m" | "[m");
        }
        self.sequence.clear();
        self.in_sequence = false;
    }
}
