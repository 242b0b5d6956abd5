//! Cursor and scroll position within a panel list.
//!
//! Each list tab keeps its own cursor, so switching tabs and back restores
//! the previous position. The cursor is clamped whenever the list shrinks.

/// Cursor and scroll offset for one list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    /// Current cursor position (0-indexed).
    pub cursor_position: usize,
    /// Index of the first visible row.
    pub scroll_offset: usize,
}

impl ListCursor {
    /// Creates a cursor at the top of the list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cursor_position: 0,
            scroll_offset: 0,
        }
    }

    /// Clamps the cursor position to be within the valid range.
    ///
    /// If the list is empty, cursor and scroll are reset to 0.
    pub const fn clamp_cursor(&mut self, count: usize) {
        if count == 0 {
            self.cursor_position = 0;
            self.scroll_offset = 0;
        } else if self.cursor_position >= count {
            self.cursor_position = count.saturating_sub(1);
        }
    }

    /// Moves the cursor up by one position if possible.
    pub const fn cursor_up(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    /// Moves the cursor down by one position if within bounds.
    pub const fn cursor_down(&mut self, max_index: usize) {
        if self.cursor_position < max_index {
            self.cursor_position = self.cursor_position.saturating_add(1);
        }
    }

    /// Moves the cursor up by a page.
    pub const fn page_up(&mut self, page_size: usize) {
        self.cursor_position = self.cursor_position.saturating_sub(page_size);
    }

    /// Moves the cursor down by a page, stopping at `max_index`.
    pub const fn page_down(&mut self, page_size: usize, max_index: usize) {
        let new_pos = self.cursor_position.saturating_add(page_size);
        self.cursor_position = if new_pos < max_index {
            new_pos
        } else {
            max_index
        };
    }

    /// Moves the cursor to the first item.
    pub const fn home(&mut self) {
        self.cursor_position = 0;
        self.scroll_offset = 0;
    }

    /// Moves the cursor to the last item.
    pub const fn end(&mut self, max_index: usize) {
        self.cursor_position = max_index;
    }

    /// Adjusts the scroll offset so the cursor stays within `visible_height`
    /// rows.
    pub const fn adjust_scroll_to_cursor(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }

        if self.cursor_position < self.scroll_offset {
            self.scroll_offset = self.cursor_position;
            return;
        }

        let viewport_end = self.scroll_offset.saturating_add(visible_height);
        if self.cursor_position >= viewport_end {
            self.scroll_offset = self
                .cursor_position
                .saturating_sub(visible_height.saturating_sub(1));
        }
    }
}
