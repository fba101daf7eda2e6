use serde::Serialize;

/// Marker character for a letter that is not in the solution.
pub const ABSENT_MARKER: char = '#';

/// Feedback state painted on a keyboard key.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Presence {
    #[default]
    Empty,
    Missing,
    WrongPosition,
    CorrectPosition,
}

impl Presence {
    /// Decodes one character of a result marker string.
    ///
    /// `#` is absent, a character equal to its own lowercase form is a
    /// misplaced letter, anything else (uppercase) is a letter in place.
    pub fn from_marker(marker: char) -> Self {
        if marker == ABSENT_MARKER {
            Presence::Missing
        } else if is_lowercase_form(marker) {
            Presence::WrongPosition
        } else {
            Presence::CorrectPosition
        }
    }

    /// Rank used by the "best seen" rule. Higher wins.
    pub fn priority(self) -> u8 {
        match self {
            Presence::Empty => 0,
            Presence::Missing => 1,
            Presence::WrongPosition => 2,
            Presence::CorrectPosition => 3,
        }
    }

    /// Returns whichever of the two statuses carries more information.
    pub fn best(self, other: Presence) -> Presence {
        if other.priority() > self.priority() {
            other
        } else {
            self
        }
    }

    /// Single-character tag used by the plain-text printer.
    pub fn symbol(self) -> char {
        match self {
            Presence::Empty => '.',
            Presence::Missing => '#',
            Presence::WrongPosition => '?',
            Presence::CorrectPosition => '!',
        }
    }
}

fn is_lowercase_form(c: char) -> bool {
    c.to_lowercase().eq(std::iter::once(c))
}

/// Case-insensitive letter comparison.
pub fn same_letter(a: char, b: char) -> bool {
    a.to_lowercase().eq(b.to_lowercase())
}
