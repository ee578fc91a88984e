use std::sync::Arc;

use rand::Rng;

use drill_core::{
    Dictionary, DictionaryEntry, EntryId, Level, Sampler, Submission, SubmissionResult, VerbForm,
    grade,
};

use crate::error::SessionError;
use super::progress::QuizProgress;

//
// ─── DRAWN WORD ────────────────────────────────────────────────────────────────
//

/// A verb on the quiz sheet together with what the learner typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawnWord {
    entry_id: EntryId,
    simple: String,
    participle: String,
    simple_locked: bool,
    participle_locked: bool,
}

impl DrawnWord {
    fn new(entry_id: EntryId) -> Self {
        Self {
            entry_id,
            simple: String::new(),
            participle: String::new(),
            simple_locked: false,
            participle_locked: false,
        }
    }

    #[must_use]
    pub fn entry_id(&self) -> EntryId {
        self.entry_id
    }

    #[must_use]
    pub fn answer(&self, form: VerbForm) -> &str {
        match form {
            VerbForm::Simple => &self.simple,
            VerbForm::Participle => &self.participle,
        }
    }

    /// A locked field was graded correct and stays read-only until reset.
    #[must_use]
    pub fn is_locked(&self, form: VerbForm) -> bool {
        match form {
            VerbForm::Simple => self.simple_locked,
            VerbForm::Participle => self.participle_locked,
        }
    }

    fn answer_mut(&mut self, form: VerbForm) -> &mut String {
        match form {
            VerbForm::Simple => &mut self.simple,
            VerbForm::Participle => &mut self.participle,
        }
    }

    fn lock(&mut self, form: VerbForm) {
        match form {
            VerbForm::Simple => self.simple_locked = true,
            VerbForm::Participle => self.participle_locked = true,
        }
    }

    fn to_submission(&self) -> Submission {
        VerbForm::ALL
            .iter()
            .fold(Submission::new(self.entry_id), |submission, form| {
                submission.with_answer(*form, self.answer(*form))
            })
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Nothing drawn.
    Empty,
    /// Words drawn, not graded since the last draw.
    Populated,
    /// The current sheet has been graded.
    Graded,
}

/// One run of the quiz from level selection or reset to the next reset.
///
/// Owns the sampler state and the answers typed so far. Every operation is
/// synchronous and total; drawing past the end of the level returns `None`.
#[derive(Debug, Clone)]
pub struct QuizSession {
    dictionary: Arc<Dictionary>,
    level: Level,
    initial_words: usize,
    eligible: Vec<EntryId>,
    sampler: Sampler,
    words: Vec<DrawnWord>,
    result: Option<SubmissionResult>,
    phase: QuizPhase,
}

impl QuizSession {
    /// Create a session and draw the first `initial_words` words.
    #[must_use]
    pub fn new(dictionary: Arc<Dictionary>, level: Level, initial_words: usize) -> Self {
        let eligible = dictionary.eligible(level);
        let mut session = Self {
            dictionary,
            level,
            initial_words,
            eligible,
            sampler: Sampler::new(),
            words: Vec::new(),
            result: None,
            phase: QuizPhase::Empty,
        };
        session.refill(&mut rand::rng());
        tracing::info!(
            level = %session.level,
            eligible = session.eligible.len(),
            drawn = session.words.len(),
            "quiz session started"
        );
        session
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub fn words(&self) -> &[DrawnWord] {
        &self.words
    }

    /// Dictionary entry for the word at `position`, if both exist.
    #[must_use]
    pub fn entry(&self, position: usize) -> Option<&DictionaryEntry> {
        self.words
            .get(position)
            .and_then(|word| self.dictionary.get(word.entry_id()))
    }

    /// Result of the last grading, if any since the last reset.
    #[must_use]
    pub fn result(&self) -> Option<&SubmissionResult> {
        self.result.as_ref()
    }

    /// Last graded outcome of one field; `None` if blank or never graded.
    #[must_use]
    pub fn outcome(&self, position: usize, form: VerbForm) -> Option<bool> {
        self.result
            .as_ref()
            .and_then(|result| result.outcome(position, form))
    }

    #[must_use]
    pub fn is_locked(&self, position: usize, form: VerbForm) -> bool {
        self.words
            .get(position)
            .is_some_and(|word| word.is_locked(form))
    }

    /// Eligible words not drawn yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.sampler.remaining_count(&self.eligible)
    }

    #[must_use]
    pub fn can_add_word(&self) -> bool {
        self.remaining() > 0
    }

    /// Draw one more word; `None` when the level is exhausted.
    pub fn add_word(&mut self) -> Option<EntryId> {
        self.add_word_with(&mut rand::rng())
    }

    /// Same as [`QuizSession::add_word`] with a caller-supplied random source.
    pub fn add_word_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<EntryId> {
        let Some(entry_id) = self.sampler.draw_with(&self.eligible, rng) else {
            tracing::debug!(level = %self.level, "no words left to draw");
            return None;
        };
        self.words.push(DrawnWord::new(entry_id));
        self.phase = QuizPhase::Populated;
        Some(entry_id)
    }

    /// Store the learner's text for one field.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownWord` if `position` is out of range and
    /// `SessionError::FieldLocked` if the field was already graded correct.
    pub fn set_answer(
        &mut self,
        position: usize,
        form: VerbForm,
        text: impl Into<String>,
    ) -> Result<(), SessionError> {
        let word = self
            .words
            .get_mut(position)
            .ok_or(SessionError::UnknownWord { position })?;
        if word.is_locked(form) {
            return Err(SessionError::FieldLocked { position, form });
        }
        *word.answer_mut(form) = text.into();
        Ok(())
    }

    /// Grade every drawn word and lock the fields that are correct.
    ///
    /// With nothing drawn this returns an empty result and keeps the phase.
    pub fn submit(&mut self) -> &SubmissionResult {
        let submissions: Vec<Submission> =
            self.words.iter().map(DrawnWord::to_submission).collect();
        let result = grade(&self.dictionary, &submissions);

        for (word, outcomes) in self.words.iter_mut().zip(result.words()) {
            for form in VerbForm::ALL {
                if outcomes.get(form) == Some(true) {
                    word.lock(form);
                }
            }
        }

        if !self.words.is_empty() {
            self.phase = QuizPhase::Graded;
        }
        tracing::debug!(
            attempted = result.attempted_count(),
            correct = result.correct_count(),
            "quiz sheet graded"
        );
        self.result.insert(result)
    }

    /// Forget every drawn word and answer, then draw a fresh batch.
    pub fn reset(&mut self) {
        self.reset_with(&mut rand::rng());
    }

    /// Same as [`QuizSession::reset`] with a caller-supplied random source.
    pub fn reset_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.clear();
        self.refill(rng);
        tracing::info!(level = %self.level, drawn = self.words.len(), "quiz session reset");
    }

    /// Switch to another level, which always starts a fresh session.
    pub fn change_level(&mut self, level: Level) {
        self.level = level;
        self.eligible = self.dictionary.eligible(level);
        self.clear();
        self.refill(&mut rand::rng());
        tracing::info!(
            level = %self.level,
            eligible = self.eligible.len(),
            drawn = self.words.len(),
            "quiz level changed"
        );
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let (attempted, correct) = self
            .result
            .as_ref()
            .map_or((0, 0), |result| (result.attempted_count(), result.correct_count()));
        QuizProgress {
            drawn: self.words.len(),
            attempted,
            correct,
            remaining: self.remaining(),
        }
    }

    fn clear(&mut self) {
        self.sampler.reset();
        self.words.clear();
        self.result = None;
        self.phase = QuizPhase::Empty;
    }

    fn refill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for _ in 0..self.initial_words {
            if self.add_word_with(rng).is_none() {
                break;
            }
        }
    }
}
