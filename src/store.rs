//! In-memory question bank.
//!
//! [`CategoryStore`] is the single source of truth for categories and their
//! questions. It owns every mutation rule; the codec and the exporter only
//! read from it.

use crate::error::{BankError, NotFoundError, ValidationError};
use crate::models::Question;

/// A named, ordered collection of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    questions: Vec<Question>,
}

impl Category {
    fn new(name: String) -> Self {
        Self {
            name,
            questions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Questions in listing order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    fn position(&self, title: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.title == title)
    }

    /// Appends without validation; used by the codec, which validates first.
    pub(crate) fn push_question(&mut self, question: Question) {
        self.questions.push(question);
    }

    pub(crate) fn contains_title(&self, title: &str) -> bool {
        self.position(title).is_some()
    }
}

/// Whether a save replaced an existing question or added a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Inserted,
    Updated,
}

/// Ordered mapping of category name to questions.
///
/// Not synchronised; a multi-threaded host wraps one store in one mutex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryStore {
    categories: Vec<Category>,
}

impl CategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of questions across all categories.
    pub fn question_count(&self) -> usize {
        self.categories.iter().map(|c| c.questions.len()).sum()
    }

    /// Categories in store order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    fn category_mut(&mut self, name: &str) -> Result<&mut Category, NotFoundError> {
        self.categories
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| NotFoundError::category(name))
    }

    fn category_index(&self, name: &str) -> Result<usize, NotFoundError> {
        self.categories
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| NotFoundError::category(name))
    }

    /// Adds an empty category.
    ///
    /// Returns `false` without touching anything if the name already exists.
    pub fn add_category(&mut self, name: &str) -> Result<bool, ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::MissingCategoryName);
        }
        if self.category(name).is_some() {
            return Ok(false);
        }
        self.categories.push(Category::new(name.to_string()));
        Ok(true)
    }

    /// Removes a category together with all of its questions.
    pub fn remove_category(&mut self, name: &str) -> Result<Category, NotFoundError> {
        let index = self.category_index(name)?;
        Ok(self.categories.remove(index))
    }

    /// Renames a category in place, keeping its position and questions.
    pub fn rename_category(&mut self, old: &str, new: &str) -> Result<(), BankError> {
        let index = self.category_index(old)?;
        if new.is_empty() {
            return Err(ValidationError::MissingCategoryName.into());
        }
        if old == new {
            return Ok(());
        }
        if self.category(new).is_some() {
            return Err(ValidationError::DuplicateCategory {
                name: new.to_string(),
            }
            .into());
        }
        self.categories[index].name = new.to_string();
        Ok(())
    }

    /// Titles of a category's questions in listing order.
    pub fn list_question_titles(&self, category: &str) -> Result<Vec<&str>, NotFoundError> {
        let category = self
            .category(category)
            .ok_or_else(|| NotFoundError::category(category))?;
        Ok(category.questions.iter().map(|q| q.title.as_str()).collect())
    }

    /// Stores a question.
    ///
    /// A question with the same title is replaced at its current position;
    /// a new title is appended.
    pub fn save_question(
        &mut self,
        category: &str,
        question: Question,
    ) -> Result<SaveOutcome, BankError> {
        let category = self.category_mut(category)?;
        question.validate()?;

        match category.position(&question.title) {
            Some(index) => {
                category.questions[index] = question;
                Ok(SaveOutcome::Updated)
            }
            None => {
                category.questions.push(question);
                Ok(SaveOutcome::Inserted)
            }
        }
    }

    /// Removes exactly one question, matched by title.
    pub fn delete_question(
        &mut self,
        category: &str,
        title: &str,
    ) -> Result<Question, NotFoundError> {
        let entry = self.category_mut(category)?;
        let index = entry
            .position(title)
            .ok_or_else(|| NotFoundError::question(category, title))?;
        Ok(entry.questions.remove(index))
    }

    pub fn get_question(&self, category: &str, title: &str) -> Result<&Question, NotFoundError> {
        let entry = self
            .category(category)
            .ok_or_else(|| NotFoundError::category(category))?;
        entry
            .questions
            .iter()
            .find(|q| q.title == title)
            .ok_or_else(|| NotFoundError::question(category, title))
    }

    /// Replaces the whole store with the one decoded from `document`.
    ///
    /// On error the current contents are left as they were.
    pub fn load_document(&mut self, document: &serde_json::Value) -> Result<(), BankError> {
        let loaded = crate::data::deserialize(document)?;
        *self = loaded;
        Ok(())
    }

    /// Appends a category without the duplicate check; used by the codec.
    pub(crate) fn push_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    pub(crate) fn new_category(name: &str) -> Category {
        Category::new(name.to_string())
    }
}
