//! Bold key hint shown in the status bar while navigating.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

pub const NAVIGATION_HINT: &str = "q: clear list   e: edit item   CTRL+C: quit program";

pub struct StatusBar;

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let hint = Span::styled(NAVIGATION_HINT, Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(hint, area);
    }
}
