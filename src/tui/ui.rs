use ratatui::Frame;
use ratatui::widgets::Block;

use crate::core::state::{App, Mode};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{EntryList, StatusBar, Welcome};

/// Compose one full frame: bordered pane, text area, status bar.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let screen = frame.area();
    let outer = tui.geometry.outer().intersection(screen);
    let text = tui.geometry.text().intersection(screen);
    let status = tui.geometry.status().intersection(screen);

    frame.render_widget(Block::bordered(), outer);

    if text.is_empty() {
        // Too small to show anything inside the border.
    } else if tui.show_welcome && app.mode == Mode::Collecting && app.store.is_empty() {
        Welcome.render(frame, text);
    } else {
        EntryList::new(&app.store, app.mode, app.selection, &mut tui.list_state).render(frame, text);
    }

    if status.is_empty() {
        return;
    }
    if app.line_input_active() {
        tui.line_editor.render(frame, status);
    } else {
        StatusBar.render(frame, status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::tui::layout::Geometry;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App, tui: &mut TuiState, cols: u16, rows: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(cols, rows)).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..rows)
            .map(|y| (0..cols).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_draw_welcome_on_start() {
        let app = App::new();
        let mut tui = TuiState::new(Geometry::compute(12, 70), 63);
        let screen = render(&app, &mut tui, 70, 12);

        assert!(screen[0].starts_with('┌'));
        assert!(screen[1].contains("Welcome to TODOLIST"));
        assert!(screen[10].starts_with('└'));
        assert!(screen[11].starts_with("  > "));
    }

    #[test]
    fn test_draw_navigation_shows_hint_and_checklist() {
        let mut app = App::new();
        for line in ["buy milk", "walk dog", ".e"] {
            update(&mut app, Action::LineSubmitted(line.to_string())).unwrap();
        }
        let mut tui = TuiState::new(Geometry::compute(8, 60), 63);
        let screen = render(&app, &mut tui, 60, 8);

        assert!(screen[1].starts_with("│ [ ] buy milk "));
        assert!(screen[2].contains("[ ] walk dog"));
        assert!(screen[7].contains("q: clear list"));
    }

    #[test]
    fn test_draw_survives_stale_geometry() {
        let app = App::new();
        let mut tui = TuiState::new(Geometry::compute(50, 200), 63);
        render(&app, &mut tui, 20, 5);
    }
}
