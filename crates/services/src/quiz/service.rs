use std::sync::Arc;

use drill_core::{Dictionary, DictionaryEntry, EntryId, Level};

use crate::settings::QuizSettings;

use super::session::QuizSession;

/// Starts quiz sessions over a shared dictionary.
#[derive(Debug, Clone)]
pub struct QuizService {
    dictionary: Arc<Dictionary>,
    settings: QuizSettings,
}

impl QuizService {
    #[must_use]
    pub fn new(dictionary: Arc<Dictionary>, settings: QuizSettings) -> Self {
        Self {
            dictionary,
            settings,
        }
    }

    /// Service over the bundled verb table.
    #[must_use]
    pub fn builtin(settings: QuizSettings) -> Self {
        Self::new(Arc::new(Dictionary::builtin()), settings)
    }

    #[must_use]
    pub fn dictionary(&self) -> Arc<Dictionary> {
        Arc::clone(&self.dictionary)
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    /// Start a session at the configured level.
    #[must_use]
    pub fn start_session(&self) -> QuizSession {
        self.start_session_at(self.settings.level())
    }

    /// Start a session at the given level.
    #[must_use]
    pub fn start_session_at(&self, level: Level) -> QuizSession {
        QuizSession::new(
            Arc::clone(&self.dictionary),
            level,
            self.settings.initial_words(),
        )
    }

    /// Entries a session at `level` draws from, in dictionary order.
    #[must_use]
    pub fn eligible_entries(&self, level: Level) -> Vec<(EntryId, &DictionaryEntry)> {
        self.dictionary
            .eligible(level)
            .into_iter()
            .filter_map(|id| self.dictionary.get(id).map(|entry| (id, entry)))
            .collect()
    }
}
