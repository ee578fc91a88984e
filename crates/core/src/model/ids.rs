use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position of an entry in the verb dictionary.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(usize);

impl EntryId {
    /// Creates a new `EntryId`
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying dictionary index
    #[must_use]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntryId({})", self.0)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} format", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for EntryId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .map(Self)
            .map_err(|_| ParseIdError { kind: "EntryId" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_id_parses_and_displays() {
        let id: EntryId = " 12 ".parse().unwrap();
        assert_eq!(id, EntryId::new(12));
        assert_eq!(id.to_string(), "12");
        assert_eq!(format!("{id:?}"), "EntryId(12)");
    }

    #[test]
    fn entry_id_rejects_garbage() {
        let err = "twelve".parse::<EntryId>().unwrap_err();
        assert_eq!(err.to_string(), "invalid EntryId format");
    }
}
