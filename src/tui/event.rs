use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Printable input
    Char(char),
    Paste(String), // Bracketed paste

    // Navigation / editing keys
    Backspace,
    Delete,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    Cancel, // Esc or Ctrl+U: kill the current line

    Submit,
    Resize(u16, u16), // (cols, rows)
    Interrupt,        // Ctrl+C
}

/// Block until the next event the checklist cares about.
pub fn read_event() -> std::io::Result<TuiEvent> {
    loop {
        if let Some(mapped) = map_event(event::read()?) {
            return Ok(mapped);
        }
    }
}

/// Translate a crossterm event. Returns `None` for events we ignore.
pub fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => map_key(key_event),
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(cols, rows) => {
            log::debug!("Resize event: {}x{}", cols, rows);
            Some(TuiEvent::Resize(cols, rows))
        }
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    // Control chords match with any extra modifier held; Shift reports the
    // uppercase char.
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match key_event.code {
        KeyCode::Char('c' | 'C') if ctrl => Some(TuiEvent::Interrupt),
        KeyCode::Char('u' | 'U') if ctrl => Some(TuiEvent::Cancel),
        KeyCode::Char('a' | 'A') if ctrl => Some(TuiEvent::CursorHome),
        KeyCode::Char('e' | 'E') if ctrl => Some(TuiEvent::CursorEnd),
        _ if ctrl => None,
        KeyCode::Char(c) => Some(TuiEvent::Char(c)),
        KeyCode::Backspace => Some(TuiEvent::Backspace),
        KeyCode::Delete => Some(TuiEvent::Delete),
        KeyCode::Enter => Some(TuiEvent::Submit),
        KeyCode::Esc => Some(TuiEvent::Cancel),
        KeyCode::Up => Some(TuiEvent::CursorUp),
        KeyCode::Down => Some(TuiEvent::CursorDown),
        KeyCode::Left => Some(TuiEvent::CursorLeft),
        KeyCode::Right => Some(TuiEvent::CursorRight),
        KeyCode::Home => Some(TuiEvent::CursorHome),
        KeyCode::End => Some(TuiEvent::CursorEnd),
        _ => None,
    }
}
