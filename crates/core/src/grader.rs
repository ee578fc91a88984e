use crate::dictionary::Dictionary;
use crate::model::{EntryId, VerbForm};

/// A learner's typed answers for one drawn verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    entry_id: EntryId,
    simple: Option<String>,
    participle: Option<String>,
}

impl Submission {
    #[must_use]
    pub fn new(entry_id: EntryId) -> Self {
        Self {
            entry_id,
            simple: None,
            participle: None,
        }
    }

    #[must_use]
    pub fn with_answer(mut self, form: VerbForm, text: impl Into<String>) -> Self {
        let text = Some(text.into());
        match form {
            VerbForm::Simple => self.simple = text,
            VerbForm::Participle => self.participle = text,
        }
        self
    }

    #[must_use]
    pub fn entry_id(&self) -> EntryId {
        self.entry_id
    }

    #[must_use]
    pub fn answer(&self, form: VerbForm) -> Option<&str> {
        match form {
            VerbForm::Simple => self.simple.as_deref(),
            VerbForm::Participle => self.participle.as_deref(),
        }
    }
}

/// Per-field grading outcome; `None` means the field was left blank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldOutcomes {
    simple: Option<bool>,
    participle: Option<bool>,
}

impl FieldOutcomes {
    #[must_use]
    pub fn get(&self, form: VerbForm) -> Option<bool> {
        match form {
            VerbForm::Simple => self.simple,
            VerbForm::Participle => self.participle,
        }
    }

    fn set(&mut self, form: VerbForm, correct: bool) {
        match form {
            VerbForm::Simple => self.simple = Some(correct),
            VerbForm::Participle => self.participle = Some(correct),
        }
    }

    #[must_use]
    pub fn attempted(&self) -> usize {
        VerbForm::ALL
            .iter()
            .filter(|form| self.get(**form).is_some())
            .count()
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        VerbForm::ALL
            .iter()
            .filter(|form| self.get(**form) == Some(true))
            .count()
    }
}

/// Outcomes for every drawn word, in the order the words were submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionResult {
    words: Vec<FieldOutcomes>,
}

impl SubmissionResult {
    #[must_use]
    pub fn words(&self) -> &[FieldOutcomes] {
        &self.words
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&FieldOutcomes> {
        self.words.get(position)
    }

    /// Outcome of one field; `None` when blank or the position was not graded.
    #[must_use]
    pub fn outcome(&self, position: usize, form: VerbForm) -> Option<bool> {
        self.get(position).and_then(|outcomes| outcomes.get(form))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn attempted_count(&self) -> usize {
        self.words.iter().map(FieldOutcomes::attempted).sum()
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.words.iter().map(FieldOutcomes::correct).sum()
    }

    /// True when at least one field was attempted and none was wrong.
    #[must_use]
    pub fn all_attempted_correct(&self) -> bool {
        let attempted = self.attempted_count();
        attempted > 0 && attempted == self.correct_count()
    }
}

/// Trim surrounding whitespace and lower-case.
///
/// Whitespace around a `/` is dropped too, so `"was / were"` and
/// `"was/were"` normalize to the same text.
#[must_use]
pub fn normalize_answer(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    if !lowered.contains('/') {
        return lowered;
    }
    lowered.split('/').map(str::trim).collect::<Vec<_>>().join("/")
}

/// Compare a normalized answer against an expected dictionary value.
///
/// `expected` may list alternatives separated by `/`. Empty alternatives
/// never match.
#[must_use]
pub fn matches_expected(expected: &str, normalized: &str) -> bool {
    if normalized.is_empty() {
        return false;
    }
    expected == normalized
        || (expected.contains('/')
            && expected
                .split('/')
                .map(str::trim)
                .filter(|variant| !variant.is_empty())
                .any(|variant| variant == normalized))
}

/// Grade every submission against the dictionary.
///
/// Blank answers are left out of the result. Submissions whose entry is
/// missing from the dictionary keep their slot with no outcomes, so
/// positions line up with the input.
#[must_use]
pub fn grade(dictionary: &Dictionary, submissions: &[Submission]) -> SubmissionResult {
    let words = submissions
        .iter()
        .map(|submission| {
            let mut outcomes = FieldOutcomes::default();
            let Some(entry) = dictionary.get(submission.entry_id()) else {
                return outcomes;
            };
            for form in VerbForm::ALL {
                let Some(answer) = submission.answer(form).filter(|text| !text.is_empty()) else {
                    continue;
                };
                let correct = matches_expected(entry.expected(form), &normalize_answer(answer));
                outcomes.set(form, correct);
            }
            outcomes
        })
        .collect();

    SubmissionResult { words }
}
