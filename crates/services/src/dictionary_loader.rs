use std::path::Path;

use drill_core::{Dictionary, DictionaryEntry};

use crate::error::DictionaryLoadError;

/// Parse a JSON array of `{infinitive, simple, participle, translation}`.
///
/// # Errors
///
/// Returns `DictionaryLoadError::Json` for malformed JSON and
/// `DictionaryLoadError::Invalid` when the entries fail validation.
pub fn parse_dictionary(json: &str) -> Result<Dictionary, DictionaryLoadError> {
    let entries: Vec<DictionaryEntry> = serde_json::from_str(json)?;
    let dictionary = Dictionary::new(entries)?;
    tracing::debug!(entries = dictionary.len(), "parsed dictionary");
    Ok(dictionary)
}

/// Read and parse a dictionary file.
///
/// # Errors
///
/// Returns `DictionaryLoadError::Io` if the file cannot be read, otherwise
/// the errors of [`parse_dictionary`].
pub fn load_dictionary(path: &Path) -> Result<Dictionary, DictionaryLoadError> {
    let raw = std::fs::read_to_string(path)?;
    let dictionary = parse_dictionary(&raw)?;
    tracing::info!(path = %path.display(), entries = dictionary.len(), "loaded dictionary");
    Ok(dictionary)
}
