//! Cursor position and horizontal scrolling for the single-line SearchBox.
//!
//! `CursorState` owns the cursor byte offset and the column scroll offset.
//! Methods take `buffer: &str` explicitly; the text itself is owned by
//! `SearchBox`.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of `text` in terminal columns, saturating at `u16::MAX`.
pub(super) fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

pub(super) fn prev_char_boundary(buffer: &str, pos: usize) -> usize {
    buffer[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

pub(super) fn next_char_boundary(buffer: &str, pos: usize) -> usize {
    buffer[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(buffer.len())
}

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// First visible column when the text is wider than the field
    pub scroll_offset: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
        }
    }

    /// Place the cursor after the last character.
    pub fn move_to_end(&mut self, buffer: &str) {
        self.pos = buffer.len();
        self.scroll_offset = 0;
    }

    /// Column of the cursor relative to the start of the text.
    pub fn column(&self, buffer: &str) -> u16 {
        display_width(&buffer[..self.pos])
    }

    /// Keep the cursor inside a field `width` columns wide.
    pub fn update_scroll_offset(&mut self, buffer: &str, width: u16) {
        if width == 0 {
            self.scroll_offset = 0;
            return;
        }
        let col = self.column(buffer);
        if col < self.scroll_offset {
            self.scroll_offset = col;
        } else if col >= self.scroll_offset.saturating_add(width) {
            self.scroll_offset = col - width + 1;
        }
    }

    /// The slice of `buffer` visible from the current scroll offset.
    pub fn visible<'b>(&self, buffer: &'b str) -> &'b str {
        let mut col: u16 = 0;
        for (i, c) in buffer.char_indices() {
            if col >= self.scroll_offset {
                return &buffer[i..];
            }
            let w = u16::try_from(c.width().unwrap_or(0)).unwrap_or(0);
            col = col.saturating_add(w);
        }
        ""
    }
}
