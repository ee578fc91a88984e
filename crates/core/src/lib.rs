#![forbid(unsafe_code)]

pub mod dictionary;
pub mod error;
pub mod grader;
pub mod model;
pub mod sampler;

pub use dictionary::{Dictionary, DictionaryError};
pub use error::Error;
pub use grader::{
    FieldOutcomes, Submission, SubmissionResult, grade, matches_expected, normalize_answer,
};
pub use model::{DictionaryEntry, EntryId, Level, LevelError, VerbForm};
pub use sampler::Sampler;
