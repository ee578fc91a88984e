#![forbid(unsafe_code)]

pub mod dictionary_loader;
pub mod error;
pub mod quiz;
pub mod settings;

pub use dictionary_loader::{load_dictionary, parse_dictionary};
pub use error::{DictionaryLoadError, SessionError};
pub use quiz::{DrawnWord, QuizPhase, QuizProgress, QuizService, QuizSession};
pub use settings::QuizSettings;
