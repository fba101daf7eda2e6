//! Keyboard status derivation: guess history in, one status per key out.

pub mod layout;
pub mod observation;
pub mod presence;
pub mod resolve;
pub mod text;

pub use layout::{
    KeyCell, KeyId, KeyRenderer, RUSSIAN_LETTERS, key_cells, letters, render_keyboard,
};
pub use observation::{Misalignment, Observation, check_alignment, extract_observations};
pub use presence::Presence;
pub use resolve::{LetterStatuses, resolve_presence};
pub use text::{TextRenderer, alignment_notice, format_keyboard};
