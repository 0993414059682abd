//! Renders a question bank as a linear, printable document.
//!
//! The document is a title block followed by one section per non-empty
//! category: an upper-cased heading and the category's questions numbered
//! from 1. Rendering only reads the store.

mod blocks;

use std::fmt;

pub use blocks::{AnswerBlock, Block, QuestionBlock};

use crate::error::BankError;
use crate::store::{Category, CategoryStore};

pub const DOCUMENT_TITLE: &str = "Question Bank";

/// Prepares the export of `store`.
///
/// Fails only when the store has no categories at all.
pub fn render(store: &CategoryStore) -> Result<Document<'_>, BankError> {
    if store.is_empty() {
        return Err(BankError::EmptyStore);
    }
    Ok(Document { store })
}

/// A rendered view over a store.
///
/// Every call to [`Document::blocks`] starts a fresh pass that yields the
/// same blocks.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    store: &'a CategoryStore,
}

impl<'a> Document<'a> {
    pub fn blocks(&self) -> Blocks<'a> {
        Blocks {
            categories: self.store.categories(),
            title_done: false,
            category: 0,
            question: None,
        }
    }
}

impl<'a> IntoIterator for &Document<'a> {
    type Item = Block;
    type IntoIter = Blocks<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks()
    }
}

/// Plain-text rendering, blocks separated by blank lines.
impl fmt::Display for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, block) in self.blocks().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", block)?;
        }
        Ok(())
    }
}

/// Lazy iterator over the blocks of a [`Document`].
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    categories: &'a [Category],
    title_done: bool,
    category: usize,
    /// `None` until the current category's heading has been emitted.
    question: Option<usize>,
}

impl Iterator for Blocks<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        if !self.title_done {
            self.title_done = true;
            return Some(Block::Title(DOCUMENT_TITLE.to_string()));
        }

        loop {
            let category = self.categories.get(self.category)?;
            match self.question {
                None if category.is_empty() => self.category += 1,
                None => {
                    self.question = Some(0);
                    return Some(Block::CategoryHeading(category.name().to_uppercase()));
                }
                Some(index) => match category.questions().get(index) {
                    Some(question) => {
                        self.question = Some(index + 1);
                        return Some(Block::Question(QuestionBlock::new(index + 1, question)));
                    }
                    None => {
                        self.category += 1;
                        self.question = None;
                    }
                },
            }
        }
    }
}

impl std::iter::FusedIterator for Blocks<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Answer, Question};

    fn store() -> CategoryStore {
        let mut store = CategoryStore::new();
        store.add_category("Empty").unwrap();
        store.add_category("Math").unwrap();
        store
            .save_question("Math", Question::new("Q1", "2+2", Answer::classic("4").unwrap()))
            .unwrap();
        store
    }

    #[test]
    fn test_classic_scenario() {
        let store = store();
        let document = render(&store).unwrap();
        let blocks: Vec<_> = document.blocks().collect();

        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], Block::Title("Question Bank".to_string()));
        assert_eq!(blocks[1], Block::CategoryHeading("MATH".to_string()));
        assert_eq!(
            blocks[2].lines(),
            vec!["1. Q1", "Question: 2+2", "Answer: 4"]
        );
    }

    #[test]
    fn test_multiple_choice_block() {
        let mut store = CategoryStore::new();
        store.add_category("Math").unwrap();
        let answer = Answer::multiple_choice(["1", "2", "3", "4"].map(String::from), Some(2)).unwrap();
        store
            .save_question("Math", Question::new("Q1", "Pick three", answer))
            .unwrap();

        let document = render(&store).unwrap();
        let last = document.blocks().last().unwrap();
        assert_eq!(
            last.lines(),
            vec![
                "1. Q1",
                "Question: Pick three",
                "Options:",
                "A. 1",
                "B. 2",
                "C. 3",
                "D. 4",
                "Correct answer: C",
            ]
        );
    }

    #[test]
    fn test_numbering_follows_sequence_order() {
        let mut store = store();
        for title in ["Q2", "Q3"] {
            store
                .save_question("Math", Question::new(title, "b", Answer::classic("a").unwrap()))
                .unwrap();
        }
        store.delete_question("Math", "Q1").unwrap();
        store.add_category("History").unwrap();
        store
            .save_question("History", Question::new("H1", "b", Answer::classic("a").unwrap()))
            .unwrap();

        let document = render(&store).unwrap();
        let headings: Vec<_> = document
            .blocks()
            .filter_map(|block| match block {
                Block::Question(question) => Some(question.heading()),
                Block::CategoryHeading(name) => Some(name),
                Block::Title(_) => None,
            })
            .collect();
        assert_eq!(headings, vec!["MATH", "1. Q2", "2. Q3", "HISTORY", "1. H1"]);
    }

    #[test]
    fn test_restartable() {
        let store = store();
        let document = render(&store).unwrap();
        let first: Vec<_> = document.blocks().collect();
        let second: Vec<_> = (&document).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_store() {
        let store = CategoryStore::new();
        assert!(matches!(render(&store), Err(BankError::EmptyStore)));

        let mut store = CategoryStore::new();
        store.add_category("Empty").unwrap();
        let document = render(&store).unwrap();
        assert_eq!(document.blocks().count(), 1);
    }

    #[test]
    fn test_text_rendering() {
        let store = store();
        let text = render(&store).unwrap().to_string();
        assert_eq!(
            text,
            "Question Bank\n\nMATH\n\n1. Q1\nQuestion: 2+2\nAnswer: 4\n"
        );
    }
}
