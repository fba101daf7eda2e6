use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_status(&self, f: &mut Frame, area: Rect) {
        let (text, color) = match self.misalignment() {
            Some(err) => (
                format!("Inconsistent history ({}): keyboard left blank", err),
                Color::Red,
            ),
            None => (
                format!(
                    "Grounds: {} | Ctrl+R: reload{}",
                    self.snapshot.len(),
                    if self.snapshot_path.is_some() {
                        ""
                    } else {
                        " (no file)"
                    }
                ),
                Color::White,
            ),
        };

        f.render_widget(
            Paragraph::new(text)
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).title("Status")),
            area,
        );
    }
}
