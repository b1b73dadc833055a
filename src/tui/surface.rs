//! # Terminal Surface
//!
//! The capability set the dispatch loop needs from a terminal: read the next
//! event, draw a frame, report the size, settle after a resize.
//!
//! `CrosstermSurface` is the real terminal. Tests drive the loop with a
//! scripted surface over ratatui's `TestBackend`.
//!
//! ## Teardown
//!
//! `TerminalSession` is the process-wide record of whether the terminal is in
//! raw mode. `teardown()` restores it at most once and holds the draw lock
//! while doing so, so a signal arriving mid-frame waits for that frame to
//! finish flushing before the terminal is handed back.

use std::io::{self, stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use log::{debug, info, warn};
use ratatui::layout::Size;
use ratatui::{DefaultTerminal, Frame};

use crate::tui::event::{TuiEvent, read_event};

pub trait Surface {
    /// Block until the next input event.
    fn next_event(&mut self) -> io::Result<TuiEvent>;

    /// Draw and flush one frame.
    fn draw<F: FnOnce(&mut Frame)>(&mut self, render: F) -> io::Result<()>;

    /// Current terminal size.
    fn size(&self) -> io::Result<Size>;

    /// Wait `delay` for the terminal to settle, then pick up the new size and
    /// clear the screen for a full redraw.
    fn apply_resize(&mut self, delay: Duration) -> io::Result<()>;
}

static ACTIVE: AtomicBool = AtomicBool::new(false);
static DRAW_LOCK: Mutex<()> = Mutex::new(());

pub struct TerminalSession;

impl TerminalSession {
    fn activate() {
        ACTIVE.store(true, Ordering::SeqCst);
    }

    pub fn is_active() -> bool {
        ACTIVE.load(Ordering::SeqCst)
    }

    fn draw_lock() -> MutexGuard<'static, ()> {
        DRAW_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Restore the terminal. Returns `false` if it was already restored.
    pub fn teardown() -> bool {
        let _guard = Self::draw_lock();
        if !ACTIVE.swap(false, Ordering::SeqCst) {
            return false;
        }
        if let Err(e) = execute!(stdout(), DisableBracketedPaste, Show) {
            warn!("Failed to reset terminal modes: {}", e);
        }
        ratatui::restore();
        info!("Terminal restored");
        true
    }

    /// Restore the terminal and exit 0 on SIGINT / SIGTERM.
    pub fn install_signal_hook() -> Result<(), ctrlc::Error> {
        ctrlc::set_handler(|| {
            TerminalSession::teardown();
            std::process::exit(0);
        })
    }
}

pub struct CrosstermSurface {
    terminal: DefaultTerminal,
}

impl CrosstermSurface {
    /// Enter raw mode and the alternate screen.
    pub fn new() -> io::Result<Self> {
        let terminal = ratatui::try_init()?;
        TerminalSession::activate();
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Cursor marks the input position
            SetCursorStyle::SteadyBlock
        )?;
        info!("Terminal modes enabled (raw, alternate screen, bracketed paste)");
        Ok(Self { terminal })
    }
}

impl Surface for CrosstermSurface {
    fn next_event(&mut self) -> io::Result<TuiEvent> {
        read_event()
    }

    fn draw<F: FnOnce(&mut Frame)>(&mut self, render: F) -> io::Result<()> {
        let _guard = TerminalSession::draw_lock();
        if !TerminalSession::is_active() {
            return Ok(());
        }
        self.terminal.draw(render)?;
        Ok(())
    }

    fn size(&self) -> io::Result<Size> {
        self.terminal.size()
    }

    fn apply_resize(&mut self, delay: Duration) -> io::Result<()> {
        std::thread::sleep(delay);
        let _guard = TerminalSession::draw_lock();
        self.terminal.autoresize()?;
        self.terminal.clear()?;
        debug!("Resize applied: {:?}", self.terminal.size()?);
        Ok(())
    }
}

impl Drop for CrosstermSurface {
    fn drop(&mut self) {
        TerminalSession::teardown();
    }
}
