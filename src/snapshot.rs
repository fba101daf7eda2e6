//! Game-state snapshot handed to the keyboard by the game logic.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// One submitted guess row: slot 0 is the guessed word, slot 1 the result
/// marker string. Serialized as a plain JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ground {
    slots: Vec<String>,
}

impl Ground {
    pub fn new(word: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            slots: vec![word.into(), marker.into()],
        }
    }

    /// Guessed word, or `""` when the row is too short.
    pub fn word(&self) -> &str {
        self.slot(0)
    }

    /// Result marker string, or `""` when the row is too short.
    pub fn marker(&self) -> &str {
        self.slot(1)
    }

    fn slot(&self, index: usize) -> &str {
        self.slots.get(index).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    #[serde(default)]
    pub grounds: Vec<Ground>,
}

impl GameSnapshot {
    pub fn new(grounds: Vec<Ground>) -> Self {
        Self { grounds }
    }

    /// Builds a snapshot from flat `WORD MARKER WORD MARKER ...` arguments.
    /// A trailing unpaired word is ignored.
    pub fn from_pairs<S: AsRef<str>>(pairs: &[S]) -> Self {
        let grounds = pairs
            .chunks_exact(2)
            .map(|pair| Ground::new(pair[0].as_ref(), pair[1].as_ref()))
            .collect();

        Self { grounds }
    }

    pub fn push(&mut self, ground: Ground) {
        self.grounds.push(ground);
    }

    pub fn pop(&mut self) -> Option<Ground> {
        self.grounds.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.grounds.is_empty()
    }

    pub fn len(&self) -> usize {
        self.grounds.len()
    }
}

pub fn parse_snapshot(json: &str) -> Result<GameSnapshot> {
    serde_json::from_str(json).context("failed to parse game snapshot")
}

pub fn load_snapshot(path: &Path) -> Result<GameSnapshot> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;

    let snapshot = parse_snapshot(&text)?;
    tracing::debug!(
        "loaded {} grounds from {}",
        snapshot.len(),
        path.display()
    );

    Ok(snapshot)
}
