//! UI module tests.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};

use super::{
    app::App,
    handlers::{InputHandler, SnapshotHandler},
    types::{InputStatus, LogBuffer},
};
use crate::snapshot::{GameSnapshot, Ground};

/// Helper function to create a test app with one ground already played.
fn create_test_app() -> App {
    let snapshot = GameSnapshot::new(vec![Ground::new("привет", "ПРИ#ет")]);
    App::new(snapshot, None, LogBuffer::new())
}

fn press(app: &mut App, code: KeyCode) -> bool {
    InputHandler::new(app).handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(app: &mut App, c: char) -> bool {
    InputHandler::new(app).handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn render(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();
    terminal.backend().buffer().clone()
}

fn find_cell_bg(buffer: &Buffer, symbol: &str) -> Option<Color> {
    buffer
        .content()
        .iter()
        .find(|c| c.symbol() == symbol && c.bg != Color::Reset)
        .map(|c| c.bg)
}

#[cfg(test)]
mod app_tests {
    use super::*;

    #[test]
    fn test_app_initialization() {
        let app = create_test_app();

        assert_eq!(app.snapshot.len(), 1);
        assert!(app.input.is_empty());
        assert!(app.snapshot_path.is_none());
        assert!(app.misalignment().is_none());
    }

    #[test]
    fn test_log_buffer() {
        let logs = LogBuffer::new();

        logs.push("Test message 1".to_string());
        logs.push("Test message 2".to_string());

        let lines = logs.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" Test message 1"));
        assert!(lines[1].ends_with(" Test message 2"));
    }

    #[test]
    fn test_log_buffer_max_capacity() {
        let logs = LogBuffer::new();

        for i in 0..350 {
            logs.push(format!("Message {}", i));
        }

        let lines = logs.lines();
        assert_eq!(lines.len(), super::super::types::MAX_LOG_LINES);
        assert!(lines.last().unwrap().ends_with("Message 349"));
    }
}

#[cfg(test)]
mod input_handler_tests {
    use super::*;

    #[test]
    fn test_input_status_incomplete() {
        let mut app = create_test_app();
        app.input = "кот".to_string();

        assert!(matches!(
            InputHandler::new(&mut app).input_status(),
            InputStatus::Incomplete
        ));
    }

    #[test]
    fn test_input_status_valid() {
        let mut app = create_test_app();
        app.input = "кот К#т".to_string();

        assert!(matches!(
            InputHandler::new(&mut app).input_status(),
            InputStatus::Valid
        ));
    }

    #[test]
    fn test_input_status_length_mismatch() {
        let mut app = create_test_app();
        app.input = "кот К#".to_string();

        assert!(matches!(
            InputHandler::new(&mut app).input_status(),
            InputStatus::Invalid(_)
        ));
    }

    #[test]
    fn test_input_status_too_many_fields() {
        let mut app = create_test_app();
        app.input = "кот ### лишнее".to_string();

        assert!(matches!(
            InputHandler::new(&mut app).input_status(),
            InputStatus::Invalid("too many fields")
        ));
    }

    #[test]
    fn test_submit_appends_ground() {
        let mut app = create_test_app();

        type_text(&mut app, "кот К#т");
        assert!(!press(&mut app, KeyCode::Enter));

        assert_eq!(app.snapshot.len(), 2);
        assert_eq!(app.snapshot.grounds[1], Ground::new("кот", "К#т"));
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_submit_invalid_is_rejected() {
        let mut app = create_test_app();

        type_text(&mut app, "кот ##");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.snapshot.len(), 1);
        assert_eq!(app.input, "кот ##");
        assert!(app.logs.lines().iter().any(|l| l.contains("Input rejected")));
    }

    #[test]
    fn test_backspace_and_escape() {
        let mut app = create_test_app();

        type_text(&mut app, "дом");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input, "до");

        press(&mut app, KeyCode::Esc);
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_ctrl_q_exits() {
        let mut app = create_test_app();
        assert!(ctrl(&mut app, 'q'));
    }

    #[test]
    fn test_ctrl_z_undoes_last_ground() {
        let mut app = create_test_app();

        assert!(!ctrl(&mut app, 'z'));
        assert!(app.snapshot.is_empty());

        ctrl(&mut app, 'z');
        assert!(app.logs.lines().iter().any(|l| l.contains("Nothing to undo")));
    }
}

#[cfg(test)]
mod snapshot_handler_tests {
    use super::*;
    use crate::keyboard::Presence;
    use std::io::Write;

    #[test]
    fn test_push_ground_updates_statuses() {
        let mut app = create_test_app();
        assert_eq!(app.letter_statuses().get('в'), Presence::Missing);

        SnapshotHandler::new(&mut app).push_ground(Ground::new("вол", "В##"));

        assert_eq!(app.letter_statuses().get('в'), Presence::CorrectPosition);
        assert_eq!(app.letter_statuses().get('о'), Presence::Missing);
    }

    #[test]
    fn test_reload_without_file() {
        let mut app = create_test_app();

        SnapshotHandler::new(&mut app).reload();

        assert_eq!(app.snapshot.len(), 1);
        assert!(app.logs.lines().iter().any(|l| l.contains("No snapshot file")));
    }

    #[test]
    fn test_reload_replaces_snapshot() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r##"{{"grounds": [["сыр", "С#р"], ["сыр", "СЫР"]]}}"##).unwrap();

        let mut app = App::new(
            GameSnapshot::default(),
            Some(file.path().to_path_buf()),
            LogBuffer::new(),
        );
        ctrl(&mut app, 'r');

        assert_eq!(app.snapshot.len(), 2);
        assert_eq!(app.letter_statuses().get('ы'), Presence::CorrectPosition);
    }

    #[test]
    fn test_reload_failure_keeps_snapshot() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let mut app = create_test_app();
        app.snapshot_path = Some(file.path().to_path_buf());

        SnapshotHandler::new(&mut app).reload();

        assert_eq!(app.snapshot.len(), 1);
        assert!(app.logs.lines().iter().any(|l| l.contains("Reload failed")));
    }
}

#[cfg(test)]
mod rendering_tests {
    use super::*;

    #[test]
    fn test_keyboard_keys_are_colored() {
        let app = create_test_app();
        let buffer = render(&app);

        assert_eq!(find_cell_bg(&buffer, "П"), Some(Color::Green));
        assert_eq!(find_cell_bg(&buffer, "Е"), Some(Color::Yellow));
        assert_eq!(find_cell_bg(&buffer, "В"), Some(Color::DarkGray));
        assert_eq!(find_cell_bg(&buffer, "Я"), Some(Color::Gray));
    }

    #[test]
    fn test_misaligned_history_blanks_keyboard() {
        let snapshot = GameSnapshot::new(vec![Ground::new("привет", "ПРИ#е")]);
        let app = App::new(snapshot, None, LogBuffer::new());
        let buffer = render(&app);

        assert!(app.misalignment().is_some());
        assert_eq!(find_cell_bg(&buffer, "Я"), Some(Color::Gray));
        assert_eq!(find_cell_bg(&buffer, "Ж"), Some(Color::Gray));

        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Inconsistent history"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let app = create_test_app();

        assert_eq!(render(&app), render(&app));
    }
}
