//! # Core Checklist Logic
//!
//! Entries, modes and the reducer that drives them.
//! It knows nothing about any specific terminal library.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • EntryStore (data)    │
//!                    │  • App (mode, cursor)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`entry`]: `Entry` and the `EntryStore`, including the hidden sentinel slot
//! - [`state`]: The `App` struct and top-level `Mode`
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: Config file loading and resolution
//! - [`error`]: Error types

pub mod action;
pub mod config;
pub mod entry;
pub mod error;
pub mod state;
