//! Per-key status resolution.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{
    layout::letters,
    observation::{Observation, extract_observations},
    presence::{Presence, same_letter},
};
use crate::snapshot::GameSnapshot;

/// Picks the status to paint on the key for `letter`.
///
/// Matching is case-insensitive and the highest-priority status among the
/// matching observations wins, regardless of how often each was seen or in
/// which row. No match at all leaves the key `Empty`.
pub fn resolve_presence(letter: char, observations: &[Observation]) -> Presence {
    observations
        .iter()
        .filter(|o| same_letter(o.letter, letter))
        .fold(Presence::Empty, |best, o| best.best(o.presence))
}

/// Resolved status for every letter on the keyboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LetterStatuses {
    statuses: BTreeMap<char, Presence>,
}

impl LetterStatuses {
    /// Derives the whole status map from a snapshot. Nothing is cached:
    /// callers recompute on every render.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Self {
        let observations = extract_observations(&snapshot.grounds);

        let statuses = letters()
            .map(|letter| (letter, resolve_presence(letter, &observations)))
            .collect();

        Self { statuses }
    }

    /// Status for `letter`, in either case. Letters that are not on the
    /// keyboard are `Empty`.
    pub fn get(&self, letter: char) -> Presence {
        letter
            .to_lowercase()
            .find_map(|c| self.statuses.get(&c).copied())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, Presence)> + '_ {
        self.statuses.iter().map(|(c, p)| (*c, *p))
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}
