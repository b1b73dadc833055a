//! # TUI Adapter
//!
//! The ratatui-specific layer. Reads terminal events, translates them into
//! `core::action::Action` values, and redraws the whole screen after each one.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Dispatch
//!
//! ```text
//!              ┌──────── Resize ────────┐
//!              ▼                        │
//!   Collecting ──(".e")──▶ Navigating ──┤
//!        ▲                    │  ▲      │
//!        └──────── q ─────────┘  └── e / Enter (editor) ──┘
//! ```
//!
//! While a line is being read (always when collecting, after `e` when
//! navigating) every key goes to the `LineEditor`. Otherwise keys map straight
//! to navigation actions. A resize is applied to the surface first (debounce,
//! new geometry, clear) and then dispatched like any other event, so an
//! interrupted line read is retried on the next pass.

mod component;
pub mod components;
pub mod event;
pub mod layout;
pub mod surface;
mod ui;

use log::{debug, info};
use ratatui::widgets::ListState;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::error::Result;
use crate::core::state::{App, Mode};
use crate::tui::component::EventHandler;
use crate::tui::components::{LineEditor, LineResult};
use crate::tui::event::TuiEvent;
use crate::tui::layout::Geometry;
use crate::tui::surface::Surface;

/// TUI-specific presentation state (not part of core logic)
pub struct TuiState {
    pub geometry: Geometry,
    pub line_editor: LineEditor,
    pub list_state: ListState,
    pub show_welcome: bool,
}

impl TuiState {
    pub fn new(geometry: Geometry, max_line_length: usize) -> Self {
        Self {
            geometry,
            line_editor: LineEditor::new(max_line_length),
            list_state: ListState::default(),
            show_welcome: true,
        }
    }

    /// Translate an event into a core action for the current mode.
    fn dispatch(&mut self, app: &App, event: &TuiEvent) -> Option<Action> {
        if !app.line_input_active() {
            return navigation_action(event);
        }

        match self.line_editor.handle_event(event)? {
            LineResult::Submitted(text) => {
                self.show_welcome = false;
                Some(match app.mode {
                    Mode::Collecting => Action::LineSubmitted(text),
                    Mode::Navigating => Action::EditSubmitted(text),
                })
            }
            LineResult::ResizeInterrupted => Some(Action::Resized),
        }
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::OpenEditor => self.line_editor.clear(),
            Effect::EnterNavigation | Effect::ReturnToCollection => {
                self.list_state = ListState::default();
                self.line_editor.clear();
            }
            Effect::CloseEditor | Effect::None => {}
        }
    }
}

/// Key bindings while navigating (editor closed).
pub fn navigation_action(event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Char('j') | TuiEvent::CursorDown => Some(Action::MoveDown),
        TuiEvent::Char('k') | TuiEvent::CursorUp => Some(Action::MoveUp),
        TuiEvent::Char('l') | TuiEvent::CursorRight | TuiEvent::Submit => {
            Some(Action::ToggleSelected)
        }
        TuiEvent::Char('e') => Some(Action::BeginEdit),
        TuiEvent::Char('q') => Some(Action::ClearList),
        TuiEvent::Resize(..) => Some(Action::Resized),
        _ => None,
    }
}

/// Run the collect → navigate cycle until an interrupt arrives.
///
/// Returns the final state; the caller owns terminal teardown.
pub fn run<S: Surface>(surface: &mut S, config: &ResolvedConfig) -> Result<App> {
    let mut app = App::new();
    let size = surface.size()?;
    let mut tui = TuiState::new(
        Geometry::compute(size.height, size.width),
        config.max_line_length,
    );
    info!("Starting in {:?} mode at {}x{}", app.mode, size.width, size.height);

    loop {
        surface.draw(|f| ui::draw_ui(f, &app, &mut tui))?;

        let event = surface.next_event()?;
        match event {
            TuiEvent::Interrupt => {
                info!("Interrupt received after {} cycles", app.cycles);
                return Ok(app);
            }
            TuiEvent::Resize(..) => {
                surface.apply_resize(config.resize_delay)?;
                let size = surface.size()?;
                tui.geometry = Geometry::compute(size.height, size.width);
                tui.show_welcome = false;
                debug!("Layout recomputed: {:?}", tui.geometry);
            }
            _ => {}
        }

        let Some(action) = tui.dispatch(&app, &event) else {
            continue;
        };
        let effect = update(&mut app, action)?;
        if effect != Effect::None {
            debug!("Effect: {:?}", effect);
        }
        tui.apply_effect(effect);
    }
}
