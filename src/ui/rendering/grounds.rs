//! Ground history rendering with colored feedback.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::keyboard::presence_style;
use crate::{keyboard::Presence, snapshot::Ground, ui::app::App};

fn ground_line(ground: &Ground) -> Line<'static> {
    if ground.word().chars().count() != ground.marker().chars().count() {
        return Line::from(vec![
            Span::raw(format!("{} {} ", ground.word(), ground.marker())),
            Span::styled("(misaligned)", Style::default().fg(Color::Red)),
        ]);
    }

    let spans: Vec<Span> = ground
        .word()
        .chars()
        .zip(ground.marker().chars())
        .map(|(c, marker)| {
            let label: String = c.to_uppercase().collect();
            Span::styled(
                format!(" {} ", label),
                presence_style(Presence::from_marker(marker)),
            )
        })
        .collect();
    Line::from(spans)
}

impl App {
    pub(in crate::ui) fn draw_grounds(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self.snapshot.grounds.iter().map(ground_line).collect();

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Grounds")),
            area,
        );
    }
}
