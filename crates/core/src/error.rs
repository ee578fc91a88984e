use thiserror::Error;

use crate::dictionary::DictionaryError;
use crate::model::LevelError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    #[error(transparent)]
    Level(#[from] LevelError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_lower_level_errors_transparently() {
        let err: Error = DictionaryError::Empty.into();
        assert_eq!(err.to_string(), "dictionary has no entries");

        let err: Error = "7".parse::<crate::model::Level>().unwrap_err().into();
        assert!(matches!(err, Error::Level(LevelError::Unknown { .. })));
    }
}
