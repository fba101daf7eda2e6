//! Flattening of the guess history into per-character observations.

use std::fmt;

use super::presence::Presence;
use crate::snapshot::Ground;

/// One guessed character together with the feedback it received.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Observation {
    pub letter: char,
    pub presence: Presence,
}

/// Guessed letters and marker characters do not line up.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Misalignment {
    pub letters: usize,
    pub markers: usize,
}

impl fmt::Display for Misalignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} guessed letters vs {} marker characters",
            self.letters, self.markers
        )
    }
}

impl std::error::Error for Misalignment {}

fn concat_letters<'a>(grounds: &'a [Ground], slot: fn(&'a Ground) -> &'a str) -> Vec<char> {
    grounds.iter().flat_map(|g| slot(g).chars()).collect()
}

/// Checks that the concatenated guesses and markers have the same length.
pub fn check_alignment(grounds: &[Ground]) -> Result<(), Misalignment> {
    let letters = grounds.iter().map(|g| g.word().chars().count()).sum();
    let markers = grounds.iter().map(|g| g.marker().chars().count()).sum();

    if letters == markers {
        Ok(())
    } else {
        Err(Misalignment { letters, markers })
    }
}

/// Aligns every guessed word with its marker string, row by row.
///
/// All guessed words are concatenated in row order, as are all markers, and
/// the two strings are walked index by index. If either string is empty or
/// their lengths differ, no observations are produced.
pub fn extract_observations(grounds: &[Ground]) -> Vec<Observation> {
    let letters = concat_letters(grounds, Ground::word);
    let markers = concat_letters(grounds, Ground::marker);

    if letters.is_empty() || markers.is_empty() {
        return Vec::new();
    }

    if letters.len() != markers.len() {
        tracing::warn!(
            "guess history misaligned: {} letters, {} markers; keyboard left blank",
            letters.len(),
            markers.len()
        );
        return Vec::new();
    }

    tracing::debug!(
        "introduced: {}, checked: {}",
        letters.iter().collect::<String>(),
        markers.iter().collect::<String>()
    );

    letters
        .into_iter()
        .zip(markers)
        .map(|(letter, marker)| Observation {
            letter,
            presence: Presence::from_marker(marker),
        })
        .collect()
}
