//! Error types for question bank operations.
//!
//! The core never logs or prompts; every failure is handed back to the
//! caller as one of these values.

use std::io;

use thiserror::Error;

/// A required field is missing or an answer has the wrong shape.
///
/// Raised before any mutation happens, so the store is left as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("category name must not be empty")]
    MissingCategoryName,

    #[error("question title must not be empty")]
    MissingTitle,

    #[error("question content must not be empty")]
    MissingContent,

    #[error("answer text must not be empty")]
    EmptyAnswer,

    /// `index` is the 0-based position of the first empty option.
    #[error("option {index} must not be empty")]
    EmptyOption { index: usize },

    #[error("no correct option selected")]
    NoCorrectSelected,

    #[error("correct option {index} is outside 0..=3")]
    CorrectOutOfRange { index: usize },

    #[error("category '{name}' already exists")]
    DuplicateCategory { name: String },
}

impl ValidationError {
    /// Stable, field-specific reason code for the presentation layer.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingCategoryName => "missing-category-name",
            Self::MissingTitle => "missing-title",
            Self::MissingContent => "missing-content",
            Self::EmptyAnswer => "empty-answer",
            Self::EmptyOption { .. } => "empty-option",
            Self::NoCorrectSelected => "no-correct-selected",
            Self::CorrectOutOfRange { .. } => "correct-out-of-range",
            Self::DuplicateCategory { .. } => "duplicate-category",
        }
    }
}

/// A category or question key that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    #[error("category '{name}' not found")]
    Category { name: String },

    #[error("question '{title}' not found in category '{category}'")]
    Question { category: String, title: String },
}

impl NotFoundError {
    pub(crate) fn category(name: &str) -> Self {
        Self::Category {
            name: name.to_string(),
        }
    }

    pub(crate) fn question(category: &str, title: &str) -> Self {
        Self::Question {
            category: category.to_string(),
            title: title.to_string(),
        }
    }
}

/// A persisted document that does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed question bank document: {message}")]
pub struct FormatError {
    message: String,
}

impl FormatError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Description of the first defect found, prefixed with its location.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Top-level error for question bank operations.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Format(#[from] FormatError),

    /// Export was asked for but there are no categories.
    #[error("question bank has no categories to export")]
    EmptyStore,

    #[error("failed to encode question bank: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
