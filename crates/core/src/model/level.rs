use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::EntryId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LevelError {
    #[error("unknown level: {raw} (expected 1, 2 or 3)")]
    Unknown { raw: String },
}

/// Difficulty tag selecting how much of the dictionary a session draws from.
///
/// The dictionary is ordered from the most to the least common verb, so each
/// level is a prefix of it:
/// - `One`: the 30 most common verbs
/// - `Two`: the 60 most common verbs
/// - `Three`: every verb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Level {
    #[default]
    One,
    Two,
    Three,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::One, Level::Two, Level::Three];

    /// Short display name ("1", "2", "3").
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Level::One => "1",
            Level::Two => "2",
            Level::Three => "3",
        }
    }

    /// Number of leading dictionary entries this level covers, `None` for all.
    #[must_use]
    pub fn cutoff(self) -> Option<usize> {
        match self {
            Level::One => Some(30),
            Level::Two => Some(60),
            Level::Three => None,
        }
    }

    /// Eligible entry ids for a dictionary of `dictionary_len` entries.
    #[must_use]
    pub fn eligible(self, dictionary_len: usize) -> Vec<EntryId> {
        let end = self
            .cutoff()
            .map_or(dictionary_len, |cutoff| cutoff.min(dictionary_len));
        (0..end).map(EntryId::new).collect()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {}", self.name())
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "one" => Ok(Level::One),
            "2" | "two" => Ok(Level::Two),
            "3" | "three" => Ok(Level::Three),
            _ => Err(LevelError::Unknown { raw: s.to_string() }),
        }
    }
}
