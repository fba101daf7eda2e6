//! On-screen keyboard rendering with colored keys.

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{
    keyboard::{
        KeyCell, KeyRenderer, Presence, RUSSIAN_LETTERS, layout::max_row_len, render_keyboard,
    },
    ui::app::App,
};

const KEY_WIDTH: u16 = 3;
const KEY_GAP: u16 = 1;
const ROW_GAP: u16 = 1;

/// Height of the keyboard without borders.
pub const KEYBOARD_HEIGHT: u16 = RUSSIAN_LETTERS.len() as u16 * (1 + ROW_GAP) - ROW_GAP;

fn row_width(keys: usize) -> u16 {
    (keys as u16 * (KEY_WIDTH + KEY_GAP)).saturating_sub(KEY_GAP)
}

/// Width of the widest keyboard row without borders.
pub fn keyboard_width() -> u16 {
    row_width(max_row_len())
}

pub fn presence_style(presence: Presence) -> Style {
    match presence {
        Presence::CorrectPosition => Style::default().bg(Color::Green).fg(Color::Black),
        Presence::WrongPosition => Style::default().bg(Color::Yellow).fg(Color::Black),
        Presence::Missing => Style::default().bg(Color::DarkGray).fg(Color::White),
        Presence::Empty => Style::default().bg(Color::Gray).fg(Color::Black),
    }
}

/// A single keyboard key.
#[derive(Debug, Copy, Clone)]
pub struct KeyTile {
    pub letter: char,
    pub presence: Presence,
}

impl From<KeyCell> for KeyTile {
    fn from(cell: KeyCell) -> Self {
        Self {
            letter: cell.letter,
            presence: cell.presence,
        }
    }
}

impl Widget for KeyTile {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label: String = self.letter.to_uppercase().collect();

        Paragraph::new(format!(" {} ", label))
            .style(presence_style(self.presence).add_modifier(Modifier::BOLD))
            .render(area, buf);
    }
}

/// Places one `KeyTile` per key into a buffer, each row centered in `area`.
/// Keys that would fall outside `area` or outside the layout are skipped.
pub struct TileRenderer<'b> {
    area: Rect,
    buf: &'b mut Buffer,
}

impl<'b> TileRenderer<'b> {
    pub fn new(area: Rect, buf: &'b mut Buffer) -> Self {
        Self { area, buf }
    }

    fn key_rect(&self, key: &KeyCell) -> Option<Rect> {
        let row_width = row_width(key.id.row_len()?);
        let left = self.area.x + self.area.width.saturating_sub(row_width) / 2;

        Some(Rect::new(
            left + key.id.column as u16 * (KEY_WIDTH + KEY_GAP),
            self.area.y + key.id.row as u16 * (1 + ROW_GAP),
            KEY_WIDTH,
            1,
        ))
    }
}

impl KeyRenderer for TileRenderer<'_> {
    fn render_key(&mut self, key: &KeyCell) {
        let Some(rect) = self.key_rect(key) else {
            return;
        };
        if rect.right() > self.area.right() || rect.bottom() > self.area.bottom() {
            return;
        }

        KeyTile::from(*key).render(rect, self.buf);
    }
}

impl App {
    pub(in crate::ui) fn draw_keyboard(&self, f: &mut Frame, area: Rect) {
        let statuses = self.letter_statuses();

        let block = Block::default().borders(Borders::ALL).title("Keyboard");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut renderer = TileRenderer::new(inner, f.buffer_mut());
        render_keyboard(&statuses, &mut renderer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::KeyId;

    #[test]
    fn test_key_tile_renders_uppercase_label() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        KeyTile {
            letter: 'ж',
            presence: Presence::WrongPosition,
        }
        .render(Rect::new(0, 0, 3, 1), &mut buf);

        assert_eq!(buf[(1, 0)].symbol(), "Ж");
        assert_eq!(buf[(1, 0)].bg, Color::Yellow);
    }

    #[test]
    fn test_tile_renderer_skips_keys_outside_area() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        let mut renderer = TileRenderer::new(area, &mut buf);

        let outside = KeyCell {
            id: KeyId { row: 1, column: 0 },
            letter: 'ж',
            presence: Presence::Missing,
        };
        renderer.render_key(&outside);

        assert!(buf.content().iter().all(|c| c.symbol() == " "));
    }

    #[test]
    fn test_tile_renderer_skips_keys_outside_layout() {
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        let mut renderer = TileRenderer::new(area, &mut buf);

        for id in [KeyId { row: 5, column: 0 }, KeyId { row: 0, column: 9 }] {
            renderer.render_key(&KeyCell {
                id,
                letter: 'ё',
                presence: Presence::CorrectPosition,
            });
        }

        assert!(buf.content().iter().all(|c| c.symbol() == " "));
    }

    #[test]
    fn test_keyboard_width_fits_widest_row() {
        assert_eq!(keyboard_width(), 7 * 4 - 1);
    }
}
