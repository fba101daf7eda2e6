mod app;
mod handlers;
mod rendering;
#[cfg(test)]
mod tests;
mod types;

pub use app::App;
pub use rendering::{KeyTile, TileRenderer, presence_style};
pub use types::{InputStatus, LogBuffer, ParsedInput};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io::stdout, path::PathBuf};

use crate::snapshot::GameSnapshot;

/// Entry point for running the UI.
pub fn run_ui(snapshot: GameSnapshot, snapshot_path: Option<PathBuf>) -> Result<()> {
    let logs = LogBuffer::new();
    let mut app = App::new(snapshot, snapshot_path, logs);

    let mut stdout = stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
