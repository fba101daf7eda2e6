//! Fixed Cyrillic keyboard layout and the per-key rendering seam.

use super::{presence::Presence, resolve::LetterStatuses};

/// Five rows of the on-screen keyboard, in display order.
pub const RUSSIAN_LETTERS: [&[char]; 5] = [
    &['а', 'б', 'в', 'г', 'д', 'е'],
    &['ж', 'з', 'и', 'й', 'к', 'л'],
    &['м', 'н', 'о', 'п', 'р', 'с'],
    &['т', 'у', 'ф', 'х', 'ц', 'ч', 'ш'],
    &['щ', 'ъ', 'ы', 'ь', 'э', 'ю', 'я'],
];

/// Widest row of the layout, in keys.
pub fn max_row_len() -> usize {
    RUSSIAN_LETTERS.iter().map(|row| row.len()).max().unwrap_or(0)
}

/// Every letter on the keyboard, row by row.
pub fn letters() -> impl Iterator<Item = char> {
    RUSSIAN_LETTERS.iter().flat_map(|row| row.iter().copied())
}

/// Stable identity of a key, taken from its position in the layout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyId {
    pub row: usize,
    pub column: usize,
}

impl KeyId {
    /// Number of keys in this key's row, or `None` when the id lies outside
    /// the layout.
    pub fn row_len(&self) -> Option<usize> {
        RUSSIAN_LETTERS
            .get(self.row)
            .map(|row| row.len())
            .filter(|&len| self.column < len)
    }
}

/// What the key renderer receives for one key.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KeyCell {
    pub id: KeyId,
    pub letter: char,
    pub presence: Presence,
}

/// Draws a single key. Implementations own the visual representation.
pub trait KeyRenderer {
    fn render_key(&mut self, key: &KeyCell);
}

impl<F: FnMut(&KeyCell)> KeyRenderer for F {
    fn render_key(&mut self, key: &KeyCell) {
        self(key)
    }
}

/// Keys of the layout annotated with their resolved status, row by row.
pub fn key_cells(statuses: &LetterStatuses) -> impl Iterator<Item = KeyCell> + '_ {
    RUSSIAN_LETTERS.iter().enumerate().flat_map(move |(row, keys)| {
        keys.iter().enumerate().map(move |(column, &letter)| KeyCell {
            id: KeyId { row, column },
            letter,
            presence: statuses.get(letter),
        })
    })
}

/// Hands every key of the layout to `renderer`, once each, in row order.
pub fn render_keyboard<R: KeyRenderer + ?Sized>(statuses: &LetterStatuses, renderer: &mut R) {
    for cell in key_cells(statuses) {
        renderer.render_key(&cell);
    }
}
