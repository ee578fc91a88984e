use serde::{Deserialize, Serialize};

use drill_core::Level;

/// Words drawn when a session starts or resets.
pub const DEFAULT_INITIAL_WORDS: usize = 5;

/// Knobs for new quiz sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    level: Level,
    initial_words: usize,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            level: Level::default(),
            initial_words: DEFAULT_INITIAL_WORDS,
        }
    }
}

impl QuizSettings {
    #[must_use]
    pub fn new(level: Level, initial_words: usize) -> Self {
        Self {
            level,
            initial_words,
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_initial_words(mut self, initial_words: usize) -> Self {
        self.initial_words = initial_words;
        self
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn initial_words(&self) -> usize {
        self.initial_words
    }
}
