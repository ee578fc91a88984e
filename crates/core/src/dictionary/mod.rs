mod builtin;

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{DictionaryEntry, EntryId, Level};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DictionaryError {
    #[error("dictionary has no entries")]
    Empty,

    #[error("entry {position} has an empty {field}")]
    BlankField {
        position: usize,
        field: &'static str,
    },

    #[error("entry {position} has an empty alternative in {field}")]
    EmptyAlternative {
        position: usize,
        field: &'static str,
    },

    #[error("duplicate infinitive: {infinitive}")]
    DuplicateInfinitive { infinitive: String },
}

/// Ordered, read-only table of irregular verbs indexed by `EntryId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
}

impl Dictionary {
    /// Build a dictionary from caller-supplied entries.
    ///
    /// Fields are trimmed and the infinitive and both forms are lower-cased
    /// so grading can compare normalized answers directly.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` for an empty list,
    /// `DictionaryError::BlankField` when any field is blank,
    /// `DictionaryError::EmptyAlternative` when a form such as `"was/"` lists
    /// an empty alternative, and
    /// `DictionaryError::DuplicateInfinitive` when a verb appears twice.
    pub fn new(entries: Vec<DictionaryEntry>) -> Result<Self, DictionaryError> {
        if entries.is_empty() {
            return Err(DictionaryError::Empty);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        let mut normalized = Vec::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            let entry = entry.normalized();
            let fields = [
                ("infinitive", entry.infinitive()),
                ("simple", entry.simple()),
                ("participle", entry.participle()),
                ("translation", entry.translation()),
            ];
            if let Some(&(field, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
                return Err(DictionaryError::BlankField { position, field });
            }
            if let Some(&(field, _)) = fields[1..=2]
                .iter()
                .find(|(_, value)| value.split('/').any(str::is_empty))
            {
                return Err(DictionaryError::EmptyAlternative { position, field });
            }
            if !seen.insert(entry.infinitive().to_string()) {
                return Err(DictionaryError::DuplicateInfinitive {
                    infinitive: entry.infinitive().to_string(),
                });
            }
            normalized.push(entry);
        }

        Ok(Self {
            entries: normalized,
        })
    }

    /// The bundled table, ordered from the most to the least common verb.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = builtin::IRREGULAR_VERBS
            .iter()
            .map(|&(infinitive, simple, participle, translation)| {
                DictionaryEntry::new(infinitive, simple, participle, translation)
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry; `None` when the id is outside the table.
    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&DictionaryEntry> {
        self.entries.get(id.index())
    }

    #[must_use]
    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &DictionaryEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (EntryId::new(index), entry))
    }

    /// Every id in the table.
    #[must_use]
    pub fn ids(&self) -> Vec<EntryId> {
        (0..self.entries.len()).map(EntryId::new).collect()
    }

    /// Ids a session at `level` may draw from.
    #[must_use]
    pub fn eligible(&self, level: Level) -> Vec<EntryId> {
        level.eligible(self.entries.len())
    }
}
