use std::fmt;

use crate::models::{option_label, Answer, Question, NUM_OPTIONS, OPTION_LABELS};

/// One unit of the exported document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Document heading.
    Title(String),
    /// Category name, upper-cased.
    CategoryHeading(String),
    Question(QuestionBlock),
}

impl Block {
    /// Text lines of the block, without styling.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Block::Title(text) | Block::CategoryHeading(text) => vec![text.clone()],
            Block::Question(question) => question.lines(),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

/// A numbered question entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBlock {
    /// 1-based position within its category.
    pub number: usize,
    pub title: String,
    pub content: String,
    pub answer: AnswerBlock,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerBlock {
    Classic(String),
    MultipleChoice {
        options: [String; NUM_OPTIONS],
        correct: char,
    },
}

impl QuestionBlock {
    pub(crate) fn new(number: usize, question: &Question) -> Self {
        let answer = match &question.answer {
            Answer::Classic { text } => AnswerBlock::Classic(text.clone()),
            Answer::MultipleChoice { options, correct } => AnswerBlock::MultipleChoice {
                options: options.clone(),
                // Stored answers are validated, the fallback is never hit.
                correct: option_label(*correct).unwrap_or('?'),
            },
        };

        Self {
            number,
            title: question.title.clone(),
            content: question.content.clone(),
            answer,
        }
    }

    /// `"1. Title"`
    pub fn heading(&self) -> String {
        format!("{}. {}", self.number, self.title)
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.heading(), format!("Question: {}", self.content)];

        match &self.answer {
            AnswerBlock::Classic(text) => lines.push(format!("Answer: {}", text)),
            AnswerBlock::MultipleChoice { options, correct } => {
                lines.push("Options:".to_string());
                for (label, option) in OPTION_LABELS.iter().zip(options) {
                    lines.push(format!("{}. {}", label, option));
                }
                lines.push(format!("Correct answer: {}", correct));
            }
        }

        lines
    }
}
