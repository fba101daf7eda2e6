//! Plain-text keyboard, one line per layout row.

use super::{
    layout::{KeyCell, KeyRenderer},
    observation::check_alignment,
    render_keyboard,
    resolve::LetterStatuses,
};
use crate::snapshot::GameSnapshot;

/// Renders keys as `Б#` style tokens: uppercase letter then status symbol.
#[derive(Debug, Default)]
pub struct TextRenderer {
    rows: Vec<Vec<String>>,
}

impl KeyRenderer for TextRenderer {
    fn render_key(&mut self, key: &KeyCell) {
        if self.rows.len() <= key.id.row {
            self.rows.resize_with(key.id.row + 1, Vec::new);
        }

        let token: String = key
            .letter
            .to_uppercase()
            .chain(std::iter::once(key.presence.symbol()))
            .collect();
        self.rows[key.id.row].push(token);
    }
}

impl TextRenderer {
    pub fn finish(self) -> String {
        self.rows
            .iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn format_keyboard(statuses: &LetterStatuses) -> String {
    let mut renderer = TextRenderer::default();
    render_keyboard(statuses, &mut renderer);
    renderer.finish()
}

/// Notice for a history whose guesses and markers do not line up, which
/// leaves every key blank.
pub fn alignment_notice(snapshot: &GameSnapshot) -> Option<String> {
    check_alignment(&snapshot.grounds)
        .err()
        .map(|err| format!("inconsistent history ({}): keyboard left blank", err))
}
