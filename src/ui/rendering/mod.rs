mod grounds;
mod input_field;
mod keyboard;
mod logs;
mod status;

pub use keyboard::{KeyTile, TileRenderer, presence_style};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let main_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(50),
                Constraint::Min(keyboard::keyboard_width() + 2),
            ])
            .split(f.area());

        let left_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(main_layout[0]);

        let right_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(keyboard::KEYBOARD_HEIGHT + 2),
                Constraint::Min(4), // logs panel
            ])
            .split(main_layout[1]);

        self.draw_status(f, left_layout[0]);
        self.draw_grounds(f, left_layout[1]);
        self.draw_input(f, left_layout[2]);

        self.draw_keyboard(f, right_layout[0]);
        self.draw_logs(f, right_layout[1]);
    }
}
