//! # Welcome Banner
//!
//! Shown in the text area on first launch, until the first line is submitted
//! or the terminal is resized.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;

pub const TITLE: &str = "Welcome to TODOLIST";

pub struct Welcome;

impl Component for Welcome {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD))),
            Line::default(),
            Line::from("Write your entries in the input bar below, and type"),
            Line::from("\".e\" to begin checking off entries!"),
            Line::default(),
            Line::from("Exit using CTRL+C"),
        ];

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
    }
}
