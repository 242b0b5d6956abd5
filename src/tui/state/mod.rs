//! State management for the dashboard TUI.

mod list_cursor;

pub use list_cursor::ListCursor;
