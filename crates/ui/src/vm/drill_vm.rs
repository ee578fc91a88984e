use drill_core::{EntryId, Level, VerbForm};
use services::{QuizSession, SessionError};

/// User actions on the drill sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrillIntent {
    Edit {
        position: usize,
        form: VerbForm,
        text: String,
    },
    Check,
    Reset,
    AddWord,
    ChangeLevel(Level),
}

/// Apply one intent to the session.
///
/// # Errors
///
/// Returns the session error for edits of unknown or locked fields.
pub fn apply_drill_intent(
    session: &mut QuizSession,
    intent: DrillIntent,
) -> Result<(), SessionError> {
    match intent {
        DrillIntent::Edit {
            position,
            form,
            text,
        } => session.set_answer(position, form, text)?,
        DrillIntent::Check => {
            let _ = session.submit();
        }
        DrillIntent::Reset => session.reset(),
        DrillIntent::AddWord => {
            let _ = session.add_word();
        }
        DrillIntent::ChangeLevel(level) => {
            if level != session.level() {
                session.change_level(level);
            }
        }
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldStatus {
    Pending,
    Correct,
    Wrong,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrillFieldVm {
    pub form: VerbForm,
    pub value: String,
    pub status: FieldStatus,
    pub disabled: bool,
    /// Only the first field of a row carries the infinitive as its label.
    pub caption: Option<String>,
}

impl DrillFieldVm {
    #[must_use]
    pub fn input_class(&self) -> &'static str {
        match self.status {
            FieldStatus::Pending => "verbs-input",
            FieldStatus::Correct => "verbs-input verbs-input--correct",
            FieldStatus::Wrong => "verbs-input verbs-input--wrong",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrillRowVm {
    pub position: usize,
    pub entry_id: EntryId,
    pub infinitive: String,
    pub translation: String,
    pub fields: Vec<DrillFieldVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrillVm {
    pub rows: Vec<DrillRowVm>,
    pub can_add_word: bool,
    pub remaining_label: String,
    pub score_label: Option<String>,
}

#[must_use]
pub fn map_drill(session: &QuizSession) -> DrillVm {
    let rows = session
        .words()
        .iter()
        .enumerate()
        .filter_map(|(position, word)| {
            let entry = session.entry(position)?;
            let fields = VerbForm::ALL
                .iter()
                .enumerate()
                .map(|(index, form)| {
                    let status = match session.outcome(position, *form) {
                        Some(true) => FieldStatus::Correct,
                        Some(false) => FieldStatus::Wrong,
                        None => FieldStatus::Pending,
                    };
                    DrillFieldVm {
                        form: *form,
                        value: word.answer(*form).to_string(),
                        status,
                        disabled: word.is_locked(*form),
                        caption: (index == 0).then(|| entry.infinitive().to_string()),
                    }
                })
                .collect();
            Some(DrillRowVm {
                position,
                entry_id: word.entry_id(),
                infinitive: entry.infinitive().to_string(),
                translation: entry.translation().to_string(),
                fields,
            })
        })
        .collect();

    let remaining = session.remaining();
    let remaining_label = match remaining {
        0 => "No more verbs at this level".to_string(),
        1 => "1 verb left".to_string(),
        _ => format!("{remaining} verbs left"),
    };

    let score_label = session.result().map(|result| {
        format!(
            "{} of {} answers correct",
            result.correct_count(),
            result.attempted_count()
        )
    });

    DrillVm {
        rows,
        can_add_word: remaining > 0,
        remaining_label,
        score_label,
    }
}
