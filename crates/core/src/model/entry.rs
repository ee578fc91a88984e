use serde::{Deserialize, Serialize};
use std::fmt;

use crate::grader::normalize_answer;

/// The two conjugated forms a learner has to type for each verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbForm {
    /// Past simple ("went").
    Simple,
    /// Past participle ("gone").
    Participle,
}

impl VerbForm {
    /// Both forms in the order they are shown and graded.
    pub const ALL: [VerbForm; 2] = [VerbForm::Simple, VerbForm::Participle];

    /// Field name used in submissions and results.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            VerbForm::Simple => "simple",
            VerbForm::Participle => "participle",
        }
    }

    /// Human-readable column heading.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            VerbForm::Simple => "Past simple",
            VerbForm::Participle => "Past participle",
        }
    }
}

impl fmt::Display for VerbForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One irregular verb with its forms and a translation shown as a hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    infinitive: String,
    simple: String,
    participle: String,
    translation: String,
}

impl DictionaryEntry {
    #[must_use]
    pub fn new(
        infinitive: impl Into<String>,
        simple: impl Into<String>,
        participle: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            infinitive: infinitive.into(),
            simple: simple.into(),
            participle: participle.into(),
            translation: translation.into(),
        }
    }

    #[must_use]
    pub fn infinitive(&self) -> &str {
        &self.infinitive
    }

    #[must_use]
    pub fn simple(&self) -> &str {
        &self.simple
    }

    #[must_use]
    pub fn participle(&self) -> &str {
        &self.participle
    }

    #[must_use]
    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Expected answer for the given form.
    #[must_use]
    pub fn expected(&self, form: VerbForm) -> &str {
        match form {
            VerbForm::Simple => &self.simple,
            VerbForm::Participle => &self.participle,
        }
    }

    /// Trims every field and lower-cases the gradable ones.
    pub(crate) fn normalized(&self) -> Self {
        Self {
            infinitive: self.infinitive.trim().to_lowercase(),
            simple: normalize_answer(&self.simple),
            participle: normalize_answer(&self.participle),
            translation: self.translation.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_picks_the_requested_form() {
        let entry = DictionaryEntry::new("go", "went", "gone", "идти");
        assert_eq!(entry.expected(VerbForm::Simple), "went");
        assert_eq!(entry.expected(VerbForm::Participle), "gone");
    }

    #[test]
    fn verb_form_serializes_as_field_name() {
        let json = serde_json::to_string(&VerbForm::Participle).unwrap();
        assert_eq!(json, "\"participle\"");
        assert_eq!(VerbForm::Simple.to_string(), "simple");
    }

    #[test]
    fn entry_deserializes_from_json_object() {
        let entry: DictionaryEntry = serde_json::from_str(
            r#"{"infinitive":"go","simple":"went","participle":"gone","translation":"идти"}"#,
        )
        .unwrap();
        assert_eq!(entry.infinitive(), "go");
        assert_eq!(entry.translation(), "идти");
    }
}
