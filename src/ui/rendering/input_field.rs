//! Input field rendering with validation status.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{app::App, types::InputStatus};

impl App {
    pub(in crate::ui) fn draw_input(&self, f: &mut Frame, area: Rect) {
        let (border_color, subtitle) = match self.input_status_immutable() {
            InputStatus::Incomplete => (Color::Gray, ""),
            InputStatus::Valid => (Color::Green, ""),
            InputStatus::Invalid(msg) => (Color::Red, msg),
        };

        let text = format!("{}▌", self.input);
        let help_text = "Enter = add WORD MARKER | Ctrl+Z = undo | Ctrl+Q = quit";

        f.render_widget(
            Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(format!("Input {} | {}", subtitle, help_text)),
            ),
            area,
        );
    }

    // Helper method that doesn't require &mut
    pub(in crate::ui) fn input_status_immutable(&self) -> InputStatus {
        let parts: Vec<_> = self.input.split_whitespace().collect();

        match parts.len() {
            0 | 1 => InputStatus::Incomplete,
            2 if parts[0].chars().count() != parts[1].chars().count() => {
                InputStatus::Invalid("marker length mismatch")
            }
            2 => InputStatus::Valid,
            _ => InputStatus::Invalid("too many fields"),
        }
    }
}
