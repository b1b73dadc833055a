//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use ratatui::backend::TestBackend;
use ratatui::layout::Size;
use ratatui::{Frame, Terminal};

use crate::tui::event::TuiEvent;
use crate::tui::surface::Surface;

/// A surface that replays a fixed list of events, then interrupts.
///
/// `Resize` events resize the backing `TestBackend` as they are delivered,
/// the way a real terminal changes size before the notification arrives.
pub struct ScriptedSurface {
    pub terminal: Terminal<TestBackend>,
    events: VecDeque<TuiEvent>,
    /// Number of `apply_resize` calls seen.
    pub resizes: usize,
}

impl ScriptedSurface {
    pub fn new(cols: u16, rows: u16, events: Vec<TuiEvent>) -> Self {
        Self {
            terminal: Terminal::new(TestBackend::new(cols, rows)).unwrap(),
            events: events.into(),
            resizes: 0,
        }
    }

    /// The last drawn frame, one string per row.
    pub fn screen(&self) -> Vec<String> {
        let buffer = self.terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }
}

fn backend_err(e: impl std::fmt::Display) -> io::Error {
    io::Error::other(e.to_string())
}

impl Surface for ScriptedSurface {
    fn next_event(&mut self) -> io::Result<TuiEvent> {
        let event = self.events.pop_front().unwrap_or(TuiEvent::Interrupt);
        if let TuiEvent::Resize(cols, rows) = event {
            self.terminal.backend_mut().resize(cols, rows);
        }
        Ok(event)
    }

    fn draw<F: FnOnce(&mut Frame)>(&mut self, render: F) -> io::Result<()> {
        self.terminal.draw(render).map_err(backend_err)?;
        Ok(())
    }

    fn size(&self) -> io::Result<Size> {
        self.terminal.size().map_err(backend_err)
    }

    fn apply_resize(&mut self, _delay: Duration) -> io::Result<()> {
        self.resizes += 1;
        self.terminal.autoresize().map_err(backend_err)?;
        self.terminal.clear().map_err(backend_err)
    }
}

/// Printable key presses for each character.
pub fn keys(text: &str) -> Vec<TuiEvent> {
    text.chars().map(TuiEvent::Char).collect()
}

/// Type a line and press Enter.
pub fn line(text: &str) -> Vec<TuiEvent> {
    let mut events = keys(text);
    events.push(TuiEvent::Submit);
    events
}
