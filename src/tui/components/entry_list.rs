//! # EntryList Component
//!
//! Renders the checklist into the text area in one of two views:
//!
//! - **Collecting**: `"> text"` per entry, pinned to the newest line.
//! - **Navigating**: `"[x] text"` / `"[ ] text"`, selected row in reverse video,
//!   scrolled to keep the selection visible.
//!
//! Long entries wrap with a hanging indent the width of their marker.
//!
//! `EntryList` is a transient component (created each frame) wrapping the
//! persistent `ListState` owned by `TuiState`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::entry::{Entry, EntryStore};
use crate::core::state::Mode;
use crate::tui::component::Component;

pub const ECHO_MARKER: &str = "> ";
pub const CHECKED_MARKER: &str = "[x] ";
pub const UNCHECKED_MARKER: &str = "[ ] ";

pub struct EntryList<'a> {
    store: &'a EntryStore,
    mode: Mode,
    selection: usize,
    state: &'a mut ListState,
}

impl<'a> EntryList<'a> {
    pub fn new(
        store: &'a EntryStore,
        mode: Mode,
        selection: usize,
        state: &'a mut ListState,
    ) -> Self {
        Self {
            store,
            mode,
            selection,
            state,
        }
    }

    fn render_echo(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .store
            .entries()
            .iter()
            .flat_map(|entry| wrap_entry(ECHO_MARKER, &entry.text, area.width))
            .collect();

        let overflow = lines.len().saturating_sub(area.height as usize) as u16;
        frame.render_widget(Paragraph::new(lines).scroll((overflow, 0)), area);
    }

    fn render_checklist(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .store
            .entries()
            .iter()
            .map(|entry| ListItem::new(Text::from(wrap_entry(marker(entry), &entry.text, area.width))))
            .collect();

        if items.is_empty() {
            self.state.select(None);
        } else {
            self.state.select(Some(self.selection.min(items.len() - 1)));
        }

        let list = List::new(items).highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(list, area, &mut *self.state);
    }
}

impl Component for EntryList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self.mode {
            Mode::Collecting => self.render_echo(frame, area),
            Mode::Navigating => self.render_checklist(frame, area),
        }
    }
}

/// Checkbox marker for an entry.
pub fn marker(entry: &Entry) -> &'static str {
    if entry.checked {
        CHECKED_MARKER
    } else {
        UNCHECKED_MARKER
    }
}

/// Wrap `marker + text` to `width` columns, indenting continuation lines
/// under the text. Lines fill greedily and break only at spaces.
pub fn wrap_entry(marker: &str, text: &str, width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    let indent = " ".repeat(marker.width());
    if text.is_empty() || width <= marker.width() {
        return vec![Line::from(format!("{marker}{text}"))];
    }

    let options = textwrap::Options::new(width)
        .initial_indent(marker)
        .subsequent_indent(&indent)
        .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
        .break_words(true);

    textwrap::wrap(text, options)
        .into_iter()
        .map(|line| Line::from(line.into_owned()))
        .collect()
}
