mod entry;
mod ids;
mod level;

pub use entry::{DictionaryEntry, VerbForm};
pub use ids::{EntryId, ParseIdError};
pub use level::{Level, LevelError};
