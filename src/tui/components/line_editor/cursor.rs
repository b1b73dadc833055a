//! Cursor position tracking and horizontal scrolling for the LineEditor.
//!
//! `CursorState` owns the cursor byte offset and the column scroll offset.
//! All methods accept `buffer: &str` explicitly; the text itself is owned by
//! `LineEditor`.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Cursor and scroll state, separated from the text buffer.
#[derive(Debug, Default)]
pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// First buffer column shown when the line is wider than the bar
    pub scroll_offset: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset cursor to start (used whenever the buffer is cleared).
    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// Display column of the cursor within the buffer.
    pub fn column(&self, buffer: &str) -> u16 {
        buffer[..self.pos].width() as u16
    }

    /// Keep the cursor inside a window `visible_width` columns wide.
    pub fn update_scroll_offset(&mut self, buffer: &str, visible_width: u16) {
        if visible_width == 0 {
            self.scroll_offset = 0;
            return;
        }

        let column = self.column(buffer);
        if column < self.scroll_offset {
            self.scroll_offset = column;
        } else if column >= self.scroll_offset + visible_width {
            self.scroll_offset = column - visible_width + 1;
        }
    }

    /// Calculate screen position for the cursor. Returns (column, row).
    pub fn screen_pos(&self, buffer: &str, area: Rect, prompt_width: u16) -> (u16, u16) {
        let relative = self.column(buffer).saturating_sub(self.scroll_offset);
        let max_x = (area.x + area.width).saturating_sub(1);
        let x = (area.x + prompt_width + relative).min(max_x.max(area.x));
        (x, area.y)
    }
}

/// The part of `buffer` that fits in `width` columns starting at column `skip`.
pub(super) fn visible_slice(buffer: &str, skip: u16, width: u16) -> &str {
    let (skip, width) = (skip as usize, width as usize);
    let mut column = 0;
    let mut start = None;
    let mut end = buffer.len();

    for (i, c) in buffer.char_indices() {
        if start.is_none() && column >= skip {
            start = Some(i);
        }
        let w = c.width().unwrap_or(0);
        if start.is_some() && column + w > skip + width {
            end = i;
            break;
        }
        column += w;
    }

    match start {
        Some(s) if s <= end => &buffer[s..end],
        _ => "",
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
