//! Input handling for the TUI application.
//!
//! Translates terminal key events into application messages.

use crossterm::event::KeyCode;

use crate::dashboard::DashboardTab;

use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char(digit @ '1'..='5') => tab_for_digit(digit).map(AppMsg::SelectTab),
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => Some(AppMsg::NextTab),
        KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => Some(AppMsg::PrevTab),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Char('r') => Some(AppMsg::RefreshRequested),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

/// Maps `'1'..='5'` to the tab at that one-based position.
fn tab_for_digit(digit: char) -> Option<DashboardTab> {
    let position = usize::try_from(digit.to_digit(10)?).ok()?;
    DashboardTab::from_index(position.checked_sub(1)?)
}
