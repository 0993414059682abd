use crate::error::ValidationError;

use super::Answer;

/// A titled question. The title is its key within a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub title: String,
    pub content: String,
    pub answer: Answer,
}

impl Question {
    pub fn new(title: impl Into<String>, content: impl Into<String>, answer: Answer) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            answer,
        }
    }

    /// Checks title, content, then the embedded answer.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.content.is_empty() {
            return Err(ValidationError::MissingContent);
        }
        self.answer.validate()
    }
}
