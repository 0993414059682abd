use crate::error::ValidationError;

/// Number of options on a multiple-choice answer.
pub const NUM_OPTIONS: usize = 4;

/// Letters the options are shown with, by position.
pub const OPTION_LABELS: [char; NUM_OPTIONS] = ['A', 'B', 'C', 'D'];

/// Letter for a 0-based option index, if it is one of the four.
pub fn option_label(index: usize) -> Option<char> {
    OPTION_LABELS.get(index).copied()
}

/// Which answer variant a question carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind {
    Classic,
    MultipleChoice,
}

impl AnswerKind {
    /// Discriminator written to bank files.
    pub fn as_str(self) -> &'static str {
        match self {
            AnswerKind::Classic => "classic",
            AnswerKind::MultipleChoice => "multiple-choice",
        }
    }

    /// Parses a stored discriminator.
    ///
    /// Accepts the Turkish labels older bank files were written with.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "classic" | "Klasik" => Some(AnswerKind::Classic),
            "multiple-choice" | "Çoktan Seçmeli" => Some(AnswerKind::MultipleChoice),
            _ => None,
        }
    }
}

/// The answer attached to a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Free-form answer text.
    Classic { text: String },

    /// Four options and the 0-based index of the correct one.
    MultipleChoice {
        options: [String; NUM_OPTIONS],
        correct: usize,
    },
}

impl Answer {
    /// Builds a free-form answer.
    pub fn classic(text: impl Into<String>) -> Result<Self, ValidationError> {
        let answer = Answer::Classic { text: text.into() };
        answer.validate()?;
        Ok(answer)
    }

    /// Builds a multiple-choice answer.
    ///
    /// `correct` is the 0-based index; `None` means the user never picked one.
    pub fn multiple_choice(
        options: [String; NUM_OPTIONS],
        correct: Option<usize>,
    ) -> Result<Self, ValidationError> {
        check_options(&options)?;
        let correct = correct.ok_or(ValidationError::NoCorrectSelected)?;
        let answer = Answer::MultipleChoice { options, correct };
        answer.validate()?;
        Ok(answer)
    }

    /// Maps a 1-based option button id (1..=4) to the 0-based index.
    pub fn option_index_from_button(id: usize) -> Option<usize> {
        (1..=NUM_OPTIONS).contains(&id).then(|| id - 1)
    }

    pub fn kind(&self) -> AnswerKind {
        match self {
            Answer::Classic { .. } => AnswerKind::Classic,
            Answer::MultipleChoice { .. } => AnswerKind::MultipleChoice,
        }
    }

    /// Letter of the correct option; `None` for classic answers.
    pub fn correct_label(&self) -> Option<char> {
        match self {
            Answer::Classic { .. } => None,
            Answer::MultipleChoice { correct, .. } => option_label(*correct),
        }
    }

    /// Checks the rules an answer must satisfy before it is stored.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Answer::Classic { text } => {
                if text.is_empty() {
                    return Err(ValidationError::EmptyAnswer);
                }
            }
            Answer::MultipleChoice { options, correct } => {
                check_options(options)?;
                if *correct >= NUM_OPTIONS {
                    return Err(ValidationError::CorrectOutOfRange { index: *correct });
                }
            }
        }
        Ok(())
    }
}

fn check_options(options: &[String; NUM_OPTIONS]) -> Result<(), ValidationError> {
    match options.iter().position(|option| option.is_empty()) {
        Some(index) => Err(ValidationError::EmptyOption { index }),
        None => Ok(()),
    }
}
