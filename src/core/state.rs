//! # Application State
//!
//! Core checklist state. No terminal types live here; presentation state
//! (editor buffer, geometry, scroll) belongs to the `tui` module.
//!
//! ```text
//! App
//! ├── mode: Mode            // Collecting | Navigating
//! ├── store: EntryStore     // the checklist
//! ├── selection: usize      // highlighted entry while navigating
//! ├── editing: bool         // line editor open over the selection
//! └── cycles: u64           // completed collect → navigate rounds
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::entry::EntryStore;

/// Top-level mode of the dispatch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every submitted line becomes an entry until `.e`.
    Collecting,
    /// Key-driven selection, toggling and editing over the collected list.
    Navigating,
}

#[derive(Debug)]
pub struct App {
    pub mode: Mode,
    pub store: EntryStore,
    pub selection: usize,
    pub editing: bool,
    pub cycles: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            mode: Mode::Collecting,
            store: EntryStore::new(),
            selection: 0,
            editing: false,
            cycles: 0,
        }
    }

    /// Whether keystrokes currently go to the line editor.
    pub fn line_input_active(&self) -> bool {
        match self.mode {
            Mode::Collecting => true,
            Mode::Navigating => self.editing,
        }
    }
}
