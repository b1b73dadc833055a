//! # Actions
//!
//! Everything that can happen to the checklist becomes an `Action`.
//! User submits a line? That's `Action::LineSubmitted(text)`.
//! User presses `l` on a row? That's `Action::ToggleSelected`.
//!
//! `update()` applies an action to the `App` and returns an `Effect` telling
//! the adapter what to do next (open the editor, switch screens). No terminal
//! I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::entry::{Entry, EntryStore, is_sentinel};
use crate::core::error::Result;
use crate::core::state::{App, Mode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A line was read from the input bar.
    LineSubmitted(String),
    /// The terminal was resized.
    Resized,
    MoveDown,
    MoveUp,
    ToggleSelected,
    /// Open the line editor over the selected entry.
    BeginEdit,
    /// Replacement text for the selected entry.
    EditSubmitted(String),
    /// Leave navigation and start a new list.
    ClearList,
}

/// What the adapter must do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    OpenEditor,
    CloseEditor,
    EnterNavigation,
    ReturnToCollection,
}

pub fn update(app: &mut App, action: Action) -> Result<Effect> {
    debug!("update: {:?} in {:?}", action, app.mode);
    match app.mode {
        Mode::Collecting => collect(app, action),
        Mode::Navigating => navigate(app, action),
    }
}

fn collect(app: &mut App, action: Action) -> Result<Effect> {
    match action {
        Action::LineSubmitted(text) => {
            let done = is_sentinel(&text);
            app.store.push(Entry::new(text))?;
            if !done {
                return Ok(Effect::None);
            }
            app.store.seal();
            app.mode = Mode::Navigating;
            app.selection = 0;
            app.editing = false;
            info!("Collected {} entries, entering navigation", app.store.len());
            Ok(Effect::EnterNavigation)
        }
        _ => Ok(Effect::None),
    }
}

fn navigate(app: &mut App, action: Action) -> Result<Effect> {
    let len = app.store.len();
    match action {
        Action::ClearList => {
            app.mode = Mode::Collecting;
            app.store = EntryStore::new();
            app.selection = 0;
            app.editing = false;
            app.cycles += 1;
            info!("List cleared, collecting again (cycle {})", app.cycles);
            Ok(Effect::ReturnToCollection)
        }
        Action::EditSubmitted(text) if app.editing => {
            app.editing = false;
            if let Some(entry) = app.store.get_mut(app.selection) {
                debug!("Entry {} edited: {:?} -> {:?}", app.selection, entry.text, text);
                entry.text = text;
            }
            Ok(Effect::CloseEditor)
        }
        // The editor owns the keyboard until it submits.
        _ if app.editing => Ok(Effect::None),
        // Empty list: movement, toggle and edit are no-ops.
        Action::MoveDown | Action::MoveUp | Action::ToggleSelected | Action::BeginEdit
            if len == 0 =>
        {
            Ok(Effect::None)
        }
        Action::MoveDown => {
            app.selection = (app.selection + 1) % len;
            Ok(Effect::None)
        }
        Action::MoveUp => {
            app.selection = (app.selection + len - 1) % len;
            Ok(Effect::None)
        }
        Action::ToggleSelected => {
            if let Some(entry) = app.store.get_mut(app.selection) {
                entry.toggle();
            }
            Ok(Effect::None)
        }
        Action::BeginEdit => {
            app.editing = true;
            Ok(Effect::OpenEditor)
        }
        Action::LineSubmitted(_) | Action::EditSubmitted(_) | Action::Resized => {
            Ok(Effect::None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(app: &mut App, line: &str) -> Effect {
        update(app, Action::LineSubmitted(line.to_string())).unwrap()
    }

    fn collected(lines: &[&str]) -> App {
        let mut app = App::new();
        for line in lines {
            submit(&mut app, line);
        }
        app
    }

    #[test]
    fn test_lines_become_unchecked_entries() {
        let mut app = App::new();
        assert_eq!(submit(&mut app, "buy milk"), Effect::None);
        assert_eq!(submit(&mut app, "walk dog"), Effect::None);
        assert_eq!(app.mode, Mode::Collecting);
        assert_eq!(app.store.len(), 2);
        assert!(app.store.entries().iter().all(|e| !e.checked));
    }

    #[test]
    fn test_sentinel_enters_navigation() {
        let mut app = App::new();
        submit(&mut app, "buy milk");
        assert_eq!(submit(&mut app, ".e"), Effect::EnterNavigation);
        assert_eq!(app.mode, Mode::Navigating);
        assert_eq!(app.selection, 0);
        assert_eq!(app.store.len(), 1);
    }

    #[test]
    fn test_resize_while_collecting_keeps_entries() {
        let mut app = collected(&["a", "b"]);
        app.store.get_mut(1).unwrap().checked = true;
        assert_eq!(update(&mut app, Action::Resized).unwrap(), Effect::None);
        let texts: Vec<_> = app.store.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["a", "b"]);
        assert!(app.store.entries()[1].checked);
    }

    #[test]
    fn test_navigation_keys_ignored_while_collecting() {
        let mut app = collected(&["a"]);
        update(&mut app, Action::ToggleSelected).unwrap();
        update(&mut app, Action::MoveDown).unwrap();
        assert!(!app.store.entries()[0].checked);
        assert_eq!(app.selection, 0);
    }

    #[test]
    fn test_selection_wraps_both_ways() {
        let mut app = collected(&["a", "b", "c", ".e"]);
        update(&mut app, Action::MoveUp).unwrap();
        assert_eq!(app.selection, 2);
        update(&mut app, Action::MoveDown).unwrap();
        assert_eq!(app.selection, 0);
        for _ in 0..7 {
            update(&mut app, Action::MoveDown).unwrap();
            assert!(app.selection < 3);
        }
        assert_eq!(app.selection, 1);
    }

    #[test]
    fn test_toggle_then_move_then_toggle() {
        let mut app = collected(&["buy milk", "walk dog", ".e"]);
        update(&mut app, Action::ToggleSelected).unwrap();
        update(&mut app, Action::MoveDown).unwrap();
        update(&mut app, Action::ToggleSelected).unwrap();
        assert!(app.store.entries()[0].checked);
        assert!(app.store.entries()[1].checked);
        assert_eq!(app.selection, 1);
    }

    #[test]
    fn test_edit_replaces_only_selected_text() {
        let mut app = collected(&["a", "b", "c", ".e"]);
        update(&mut app, Action::MoveDown).unwrap();
        update(&mut app, Action::ToggleSelected).unwrap();

        assert_eq!(update(&mut app, Action::BeginEdit).unwrap(), Effect::OpenEditor);
        assert!(app.editing);
        assert_eq!(
            update(&mut app, Action::EditSubmitted("B".to_string())).unwrap(),
            Effect::CloseEditor
        );
        assert!(!app.editing);

        let entries = app.store.entries();
        assert_eq!(entries[0], Entry::new("a"));
        assert_eq!(entries[1].text, "B");
        assert!(entries[1].checked);
        assert_eq!(entries[2], Entry::new("c"));
    }

    #[test]
    fn test_keys_ignored_while_editing() {
        let mut app = collected(&["a", "b", ".e"]);
        update(&mut app, Action::BeginEdit).unwrap();
        update(&mut app, Action::MoveDown).unwrap();
        update(&mut app, Action::ToggleSelected).unwrap();
        assert_eq!(app.selection, 0);
        assert!(!app.store.entries()[0].checked);
        assert!(app.editing);
    }

    #[test]
    fn test_edit_submitted_without_editor_is_ignored() {
        let mut app = collected(&["a", ".e"]);
        let effect = update(&mut app, Action::EditSubmitted("x".to_string())).unwrap();
        assert_eq!(effect, Effect::None);
        assert_eq!(app.store.entries()[0].text, "a");
    }

    #[test]
    fn test_empty_list_navigation_is_noop() {
        let mut app = collected(&[".e"]);
        assert_eq!(app.mode, Mode::Navigating);
        assert_eq!(app.store.len(), 0);

        for action in [
            Action::MoveDown,
            Action::MoveUp,
            Action::ToggleSelected,
            Action::BeginEdit,
        ] {
            assert_eq!(update(&mut app, action).unwrap(), Effect::None);
        }
        assert_eq!(app.selection, 0);
        assert!(!app.editing);
    }

    #[test]
    fn test_clear_list_starts_fresh_collection() {
        let mut app = collected(&["a", ".e"]);
        update(&mut app, Action::ToggleSelected).unwrap();
        assert_eq!(
            update(&mut app, Action::ClearList).unwrap(),
            Effect::ReturnToCollection
        );
        assert_eq!(app.mode, Mode::Collecting);
        assert!(app.store.is_empty());
        assert_eq!(app.cycles, 1);

        submit(&mut app, "fresh");
        assert_eq!(app.store.entries(), &[Entry::new("fresh")]);
    }

    #[test]
    fn test_clear_list_allowed_while_empty() {
        let mut app = collected(&[".e"]);
        assert_eq!(
            update(&mut app, Action::ClearList).unwrap(),
            Effect::ReturnToCollection
        );
    }
}
