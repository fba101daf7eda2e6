use std::{fmt::Display, io::Stdout, path::PathBuf};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::{
    keyboard::{LetterStatuses, Misalignment, check_alignment},
    snapshot::GameSnapshot,
};

use super::types::LogBuffer;

/// Main application state container.
pub struct App {
    pub(in crate::ui) snapshot: GameSnapshot,
    pub(in crate::ui) snapshot_path: Option<PathBuf>,
    pub(in crate::ui) input: String,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(snapshot: GameSnapshot, snapshot_path: Option<PathBuf>, logs: LogBuffer) -> Self {
        Self {
            snapshot,
            snapshot_path,
            input: String::new(),
            logs,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log(format!("UI started with {} grounds", self.snapshot.len()));

        loop {
            terminal.draw(|f| self.draw(f))?;

            let event = event::read()?;
            if let Event::Key(key) = event {
                if super::handlers::InputHandler::new(self).handle_key(key) {
                    return Ok(());
                }
            }
        }
    }

    /// Key statuses for the current snapshot, derived fresh on each call.
    pub(in crate::ui) fn letter_statuses(&self) -> LetterStatuses {
        LetterStatuses::from_snapshot(&self.snapshot)
    }

    pub(in crate::ui) fn misalignment(&self) -> Option<Misalignment> {
        check_alignment(&self.snapshot.grounds).err()
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }
}
