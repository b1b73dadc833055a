//! # LineEditor Component
//!
//! Reads one bounded line of text from the status bar.
//!
//! ## Responsibilities
//!
//! - Show the `"> "` prompt and the line being typed
//! - Handle editing (backspace, delete, cursor movement, paste, kill-line)
//! - Enforce the maximum line length
//! - Report `Submitted(text)` on Enter, `ResizeInterrupted` on a resize
//!
//! ## Resize Contract
//!
//! A resize interrupts the read: the partial line is discarded and the caller
//! re-lays out the screen before the next read starts with an empty prompt.
//! Nothing is submitted.

mod cursor;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::{CursorState, next_char_boundary, prev_char_boundary, visible_slice};

pub const PROMPT: &str = "> ";

/// Result of a line read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineResult {
    /// User pressed Enter.
    Submitted(String),
    /// A resize arrived before the line was complete.
    ResizeInterrupted,
}

/// Single-line text input with a character limit.
///
/// # State
///
/// - `buffer`: Current text being typed
/// - `cursor`: Cursor position and horizontal scroll (see `CursorState`)
pub struct LineEditor {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Maximum characters accepted (Prop)
    pub max_len: usize,
    cursor: CursorState,
}

impl LineEditor {
    pub fn new(max_len: usize) -> Self {
        Self {
            buffer: String::new(),
            max_len,
            cursor: CursorState::new(),
        }
    }

    /// Empty the buffer and move the cursor home.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor.reset();
    }

    /// Byte offset of the cursor.
    pub fn cursor_pos(&self) -> usize {
        self.cursor.pos
    }

    fn remaining(&self) -> usize {
        self.max_len.saturating_sub(self.buffer.chars().count())
    }

    fn insert_str(&mut self, text: &str) -> bool {
        let accepted: String = text
            .chars()
            .filter(|c| !c.is_control())
            .take(self.remaining())
            .collect();
        if accepted.is_empty() {
            return false;
        }
        self.buffer.insert_str(self.cursor.pos, &accepted);
        self.cursor.pos += accepted.len();
        true
    }
}

impl Component for LineEditor {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let prompt_width = (PROMPT.len() as u16).min(area.width);
        let visible_width = area.width - prompt_width;
        self.cursor.update_scroll_offset(&self.buffer, visible_width);

        let visible = visible_slice(&self.buffer, self.cursor.scroll_offset, visible_width);
        let line = format!("{PROMPT}{visible}");
        frame.render_widget(Paragraph::new(line), area);

        if area.area() > 0 {
            frame.set_cursor_position(self.cursor.screen_pos(&self.buffer, area, prompt_width));
        }
    }
}

impl EventHandler for LineEditor {
    type Event = LineResult;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Char(c) => {
                let mut tmp = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut tmp));
                None
            }
            TuiEvent::Paste(text) => {
                let first_line = text.lines().next().unwrap_or_default();
                self.insert_str(first_line);
                None
            }
            TuiEvent::Backspace => {
                if self.cursor.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(prev..self.cursor.pos);
                    self.cursor.pos = prev;
                }
                None
            }
            TuiEvent::Delete => {
                if self.cursor.pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(self.cursor.pos..next);
                }
                None
            }
            TuiEvent::CursorLeft => {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor.pos < self.buffer.len() {
                    self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.cursor.pos = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor.pos = self.buffer.len();
                None
            }
            TuiEvent::Cancel => {
                self.clear();
                None
            }
            TuiEvent::Submit => {
                let text = std::mem::take(&mut self.buffer);
                self.cursor.reset();
                Some(LineResult::Submitted(text))
            }
            TuiEvent::Resize(..) => {
                self.clear();
                Some(LineResult::ResizeInterrupted)
            }
            TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::Interrupt => None,
        }
    }
}
