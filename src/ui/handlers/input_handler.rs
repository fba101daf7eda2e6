//! Input handling and validation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snapshot::Ground;

use super::super::{
    app::App,
    types::{InputStatus, ParsedInput},
};
use super::SnapshotHandler;

/// Helper struct for managing keyboard input and user interactions.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns `true` when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) => {
                self.app.log("Exit requested");
                return true;
            }

            (KeyCode::Char('z' | 'Z'), KeyModifiers::CONTROL) => {
                self.app.log("Undo requested");
                SnapshotHandler::new(self.app).undo_ground();
            }

            (KeyCode::Char('r' | 'R'), KeyModifiers::CONTROL) => {
                SnapshotHandler::new(self.app).reload();
            }

            (KeyCode::Esc, _) => self.app.input.clear(),
            (KeyCode::Enter, _) => self.submit_input(),
            (KeyCode::Backspace, _) => {
                self.app.input.pop();
            }
            (KeyCode::Char(c), _) => self.app.input.push(c),
            _ => {}
        }
        false
    }

    fn parse_input(&self) -> ParsedInput {
        match self.input_status() {
            InputStatus::Incomplete => ParsedInput::Incomplete,
            InputStatus::Invalid(_) => ParsedInput::Invalid,
            InputStatus::Valid => {
                let parts: Vec<_> = self.app.input.split_whitespace().collect();
                ParsedInput::Valid(Ground::new(parts[0], parts[1]))
            }
        }
    }

    /// Checks the `WORD MARKER` input line. Only the shape is checked; the
    /// words themselves are taken as given.
    pub fn input_status(&self) -> InputStatus {
        self.app.input_status_immutable()
    }

    fn submit_input(&mut self) {
        match self.parse_input() {
            ParsedInput::Valid(ground) => {
                SnapshotHandler::new(self.app).push_ground(ground);
                self.app.input.clear();
            }
            ParsedInput::Incomplete => {
                self.app.log("Input incomplete: expected WORD MARKER");
            }
            ParsedInput::Invalid => {
                self.app
                    .log(format!("Input rejected: {:?}", self.app.input));
            }
        }
    }
}
