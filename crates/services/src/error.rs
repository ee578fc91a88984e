//! Shared error types for the services crate.

use thiserror::Error;

use drill_core::{DictionaryError, VerbForm};

/// Errors emitted by `QuizSession` edits.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no drawn word at position {position}")]
    UnknownWord { position: usize },
    #[error("{form} of word {position} is already correct")]
    FieldLocked { position: usize, form: VerbForm },
}

/// Errors emitted while loading a dictionary file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DictionaryLoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] DictionaryError),
}
