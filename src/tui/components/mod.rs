//! # TUI Components
//!
//! ### Stateless Components
//!
//! - `StatusBar`: bold key hint while navigating
//! - `Welcome`: first-launch banner
//!
//! ### Stateful Components
//!
//! - `LineEditor`: bounded single-line input with the `"> "` prompt
//! - `EntryList`: transient wrapper over a persistent `ListState`
//!
//! Each component file holds its state, event types, rendering and tests.

pub mod entry_list;
pub mod line_editor;
pub mod status_bar;
pub mod welcome;

pub use entry_list::EntryList;
pub use line_editor::{LineEditor, LineResult};
pub use status_bar::StatusBar;
pub use welcome::Welcome;
