//! JSON codec for the question bank file.
//!
//! The document is an object mapping each category name to an array of
//! question records:
//!
//! ```json
//! {
//!     "Math": [
//!         { "title": "Q1", "content": "2+2", "type": "classic", "answer": "4" },
//!         {
//!             "title": "Q2",
//!             "content": "Pick three",
//!             "type": "multiple-choice",
//!             "answer": { "options": ["1", "2", "3", "4"], "correct": 2 }
//!         }
//!     ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{json, Map, Value};

use crate::error::FormatError;
use crate::models::{Answer, AnswerKind, Question, NUM_OPTIONS};
use crate::store::CategoryStore;

const INDENT: &[u8] = b"    ";

#[derive(Deserialize)]
struct QuestionRecord {
    title: String,
    content: String,
    #[serde(rename = "type")]
    kind: String,
    answer: Value,
}

#[derive(Deserialize)]
struct ChoiceRecord {
    options: Vec<String>,
    correct: i64,
}

/// Encodes the whole store, keeping category and question order.
pub fn serialize(store: &CategoryStore) -> Value {
    let mut document = Map::with_capacity(store.len());
    for category in store.categories() {
        let records = category.questions().iter().map(question_to_value).collect();
        document.insert(category.name().to_string(), Value::Array(records));
    }
    Value::Object(document)
}

fn question_to_value(question: &Question) -> Value {
    let answer = match &question.answer {
        Answer::Classic { text } => Value::String(text.clone()),
        Answer::MultipleChoice { options, correct } => json!({
            "options": options,
            "correct": correct,
        }),
    };

    json!({
        "title": question.title,
        "content": question.content,
        "type": question.answer.kind().as_str(),
        "answer": answer,
    })
}

/// Decodes a document into a fresh store.
///
/// Nothing is applied anywhere until the whole document has been checked.
pub fn deserialize(document: &Value) -> Result<CategoryStore, FormatError> {
    let categories = document
        .as_object()
        .ok_or_else(|| FormatError::new("top level must be an object of category arrays"))?;

    let mut store = CategoryStore::new();
    for (name, entries) in categories {
        if name.is_empty() {
            return Err(FormatError::new("category name must not be empty"));
        }
        let entries = entries
            .as_array()
            .ok_or_else(|| FormatError::new(format!("{name}: expected an array of questions")))?;

        let mut category = CategoryStore::new_category(name);
        for (index, entry) in entries.iter().enumerate() {
            let question = decode_question(entry)
                .map_err(|reason| FormatError::new(format!("{name}[{index}]: {reason}")))?;
            if category.contains_title(&question.title) {
                return Err(FormatError::new(format!(
                    "{name}[{index}]: duplicate title '{}'",
                    question.title
                )));
            }
            category.push_question(question);
        }
        store.push_category(category);
    }

    Ok(store)
}

fn decode_question(entry: &Value) -> Result<Question, String> {
    let record = QuestionRecord::deserialize(entry).map_err(|e| e.to_string())?;
    let kind = AnswerKind::parse(&record.kind)
        .ok_or_else(|| format!("unknown question type '{}'", record.kind))?;

    let answer = match kind {
        AnswerKind::Classic => match record.answer {
            Value::String(text) => Answer::Classic { text },
            _ => return Err("classic answer must be a string".to_string()),
        },
        AnswerKind::MultipleChoice => decode_choice(&record.answer)?,
    };

    let question = Question {
        title: record.title,
        content: record.content,
        answer,
    };
    question.validate().map_err(|e| e.to_string())?;
    Ok(question)
}

fn decode_choice(value: &Value) -> Result<Answer, String> {
    let record =
        ChoiceRecord::deserialize(value).map_err(|e| format!("multiple-choice answer: {e}"))?;

    let options: [String; NUM_OPTIONS] = record.options.try_into().map_err(|found: Vec<String>| {
        format!("expected {NUM_OPTIONS} options, found {}", found.len())
    })?;

    let correct = usize::try_from(record.correct)
        .ok()
        .filter(|index| *index < NUM_OPTIONS)
        .ok_or_else(|| format!("correct option {} is outside 0..=3", record.correct))?;

    Ok(Answer::MultipleChoice { options, correct })
}

/// Pretty JSON with a four-space indent; non-ASCII text is written as-is.
pub fn to_json_bytes(store: &CategoryStore) -> serde_json::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    serialize(store).serialize(&mut serializer)?;
    buffer.push(b'\n');
    Ok(buffer)
}

/// Parses raw file bytes and decodes them.
pub fn from_json_slice(bytes: &[u8]) -> Result<CategoryStore, FormatError> {
    let document: Value =
        serde_json::from_slice(bytes).map_err(|e| FormatError::new(format!("invalid JSON: {e}")))?;
    deserialize(&document)
}
