//! Command executor for the command-line front end.
//!
//! Each [`Command`] maps onto one store operation. Failures come back as
//! messages for the user; the caller decides whether to persist.

use crate::error::BankError;
use crate::models::{Answer, Question, NUM_OPTIONS};
use crate::store::{CategoryStore, SaveOutcome};

/// A single request against the question bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List categories with their question counts.
    Categories,
    AddCategory {
        name: String,
    },
    RenameCategory {
        old: String,
        new: String,
    },
    RemoveCategory {
        name: String,
        confirmed: bool,
    },
    /// List question titles of a category.
    List {
        category: String,
    },
    Show {
        category: String,
        title: String,
    },
    SaveClassic {
        category: String,
        title: String,
        content: String,
        answer: String,
    },
    /// `correct` is the 1-based option number the user typed.
    SaveChoice {
        category: String,
        title: String,
        content: String,
        options: Vec<String>,
        correct: Option<usize>,
    },
    DeleteQuestion {
        category: String,
        title: String,
        confirmed: bool,
    },
}

impl Command {
    /// Whether a successful run changes the store.
    pub fn mutates(&self) -> bool {
        !matches!(
            self,
            Command::Categories | Command::List { .. } | Command::Show { .. }
        )
    }
}

/// Result of executing a command.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// Command executed successfully with optional message.
    Ok(Option<String>),
    /// Command failed with an error message.
    Error(String),
}

/// Execute a command against the store.
pub fn execute_command(store: &mut CategoryStore, command: Command) -> CommandResult {
    let result = match command {
        Command::Categories => Ok(cmd_categories(store)),
        Command::AddCategory { name } => cmd_add_category(store, &name),
        Command::RenameCategory { old, new } => store
            .rename_category(&old, &new)
            .map(|()| Some(format!("Renamed '{}' to '{}'.", old, new))),
        Command::RemoveCategory { name, confirmed } => {
            if !confirmed {
                return unconfirmed(&format!("remove category '{}'", name));
            }
            cmd_remove_category(store, &name)
        }
        Command::List { category } => cmd_list(store, &category),
        Command::Show { category, title } => cmd_show(store, &category, &title),
        Command::SaveClassic {
            category,
            title,
            content,
            answer,
        } => Answer::classic(answer)
            .map_err(BankError::from)
            .and_then(|answer| save(store, &category, Question::new(title, content, answer))),
        Command::SaveChoice {
            category,
            title,
            content,
            options,
            correct,
        } => {
            let options: [String; NUM_OPTIONS] = match options.try_into() {
                Ok(options) => options,
                Err(found) => {
                    return CommandResult::Error(format!(
                        "Expected {} options, got {}.",
                        NUM_OPTIONS,
                        found.len()
                    ));
                }
            };
            let correct = match correct {
                Some(id) => match Answer::option_index_from_button(id) {
                    Some(index) => Some(index),
                    None => {
                        return CommandResult::Error(format!(
                            "Correct option must be between 1 and {}.",
                            NUM_OPTIONS
                        ));
                    }
                },
                None => None,
            };
            Answer::multiple_choice(options, correct)
                .map_err(BankError::from)
                .and_then(|answer| save(store, &category, Question::new(title, content, answer)))
        }
        Command::DeleteQuestion {
            category,
            title,
            confirmed,
        } => {
            if !confirmed {
                return unconfirmed(&format!("delete question '{}'", title));
            }
            store
                .delete_question(&category, &title)
                .map(|_| Some(format!("Deleted '{}' from '{}'.", title, category)))
                .map_err(BankError::from)
        }
    };

    match result {
        Ok(message) => CommandResult::Ok(message),
        Err(err) => CommandResult::Error(describe_error(&err)),
    }
}

fn unconfirmed(action: &str) -> CommandResult {
    CommandResult::Error(format!("Refusing to {} without --yes.", action))
}

fn describe_error(err: &BankError) -> String {
    match err {
        BankError::Validation(e) => format!("{} [{}]", e, e.reason()),
        other => other.to_string(),
    }
}

fn cmd_categories(store: &CategoryStore) -> Option<String> {
    if store.is_empty() {
        return Some("No categories yet.".to_string());
    }
    let lines: Vec<String> = store
        .categories()
        .iter()
        .map(|c| format!("{} ({})", c.name(), c.questions().len()))
        .collect();
    Some(lines.join("\n"))
}

fn cmd_add_category(store: &mut CategoryStore, name: &str) -> Result<Option<String>, BankError> {
    let message = if store.add_category(name)? {
        format!("Added category '{}'.", name)
    } else {
        format!("Category '{}' already exists.", name)
    };
    Ok(Some(message))
}

fn cmd_remove_category(store: &mut CategoryStore, name: &str) -> Result<Option<String>, BankError> {
    let removed = store.remove_category(name)?;
    Ok(Some(format!(
        "Removed category '{}' and {} question(s).",
        name,
        removed.questions().len()
    )))
}

fn cmd_list(store: &CategoryStore, category: &str) -> Result<Option<String>, BankError> {
    let titles = store.list_question_titles(category)?;
    if titles.is_empty() {
        return Ok(Some(format!("'{}' has no questions.", category)));
    }
    Ok(Some(titles.join("\n")))
}

fn cmd_show(store: &CategoryStore, category: &str, title: &str) -> Result<Option<String>, BankError> {
    let question = store.get_question(category, title)?;
    let mut lines = vec![
        format!("Title: {}", question.title),
        format!("Type: {}", question.answer.kind().as_str()),
        format!("Content: {}", question.content),
    ];
    match &question.answer {
        Answer::Classic { text } => lines.push(format!("Answer: {}", text)),
        Answer::MultipleChoice { options, .. } => {
            for (index, option) in options.iter().enumerate() {
                lines.push(format!("{}) {}", index + 1, option));
            }
            if let Some(label) = question.answer.correct_label() {
                lines.push(format!("Correct: {}", label));
            }
        }
    }
    Ok(Some(lines.join("\n")))
}

fn save(store: &mut CategoryStore, category: &str, question: Question) -> Result<Option<String>, BankError> {
    let title = question.title.clone();
    let verb = match store.save_question(category, question)? {
        SaveOutcome::Inserted => "Added",
        SaveOutcome::Updated => "Updated",
    };
    Ok(Some(format!("{} '{}' in '{}'.", verb, title, category)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(store: &mut CategoryStore, command: Command) -> CommandResult {
        execute_command(store, command)
    }

    fn add(name: &str) -> Command {
        Command::AddCategory {
            name: name.to_string(),
        }
    }

    fn save_classic(title: &str, answer: &str) -> Command {
        Command::SaveClassic {
            category: "Math".to_string(),
            title: title.to_string(),
            content: "2+2".to_string(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn test_add_category_twice() {
        let mut store = CategoryStore::new();
        assert_eq!(
            run(&mut store, add("Math")),
            CommandResult::Ok(Some("Added category 'Math'.".to_string()))
        );
        assert_eq!(
            run(&mut store, add("Math")),
            CommandResult::Ok(Some("Category 'Math' already exists.".to_string()))
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_save_reports_insert_and_update() {
        let mut store = CategoryStore::new();
        run(&mut store, add("Math"));

        assert_eq!(
            run(&mut store, save_classic("Q1", "4")),
            CommandResult::Ok(Some("Added 'Q1' in 'Math'.".to_string()))
        );
        assert_eq!(
            run(&mut store, save_classic("Q1", "four")),
            CommandResult::Ok(Some("Updated 'Q1' in 'Math'.".to_string()))
        );
        assert_eq!(
            run(&mut store, save_classic("Q2", "")),
            CommandResult::Error("answer text must not be empty [empty-answer]".to_string())
        );
    }

    #[test]
    fn test_save_choice_maps_button_ids() {
        let mut store = CategoryStore::new();
        run(&mut store, add("Math"));

        let command = |correct| Command::SaveChoice {
            category: "Math".to_string(),
            title: "Q1".to_string(),
            content: "Pick".to_string(),
            options: ["1", "2", "3", "4"].map(String::from).to_vec(),
            correct,
        };

        assert!(matches!(run(&mut store, command(Some(3))), CommandResult::Ok(_)));
        let question = store.get_question("Math", "Q1").unwrap();
        assert_eq!(question.answer.correct_label(), Some('C'));

        assert!(matches!(run(&mut store, command(Some(0))), CommandResult::Error(_)));
        assert!(matches!(run(&mut store, command(Some(5))), CommandResult::Error(_)));
        match run(&mut store, command(None)) {
            CommandResult::Error(message) => assert!(message.contains("no-correct-selected")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_save_choice_needs_four_options() {
        let mut store = CategoryStore::new();
        run(&mut store, add("Math"));
        let result = run(
            &mut store,
            Command::SaveChoice {
                category: "Math".to_string(),
                title: "Q1".to_string(),
                content: "Pick".to_string(),
                options: vec!["1".to_string(), "2".to_string()],
                correct: Some(1),
            },
        );
        assert_eq!(
            result,
            CommandResult::Error("Expected 4 options, got 2.".to_string())
        );
    }

    #[test]
    fn test_destructive_commands_need_confirmation() {
        let mut store = CategoryStore::new();
        run(&mut store, add("Math"));
        run(&mut store, save_classic("Q1", "4"));

        let delete = |confirmed| Command::DeleteQuestion {
            category: "Math".to_string(),
            title: "Q1".to_string(),
            confirmed,
        };
        assert!(matches!(run(&mut store, delete(false)), CommandResult::Error(_)));
        assert_eq!(store.question_count(), 1);
        assert!(matches!(run(&mut store, delete(true)), CommandResult::Ok(_)));
        assert_eq!(store.question_count(), 0);

        let remove = |confirmed| Command::RemoveCategory {
            name: "Math".to_string(),
            confirmed,
        };
        assert!(matches!(run(&mut store, remove(false)), CommandResult::Error(_)));
        assert_eq!(store.len(), 1);
        assert!(matches!(run(&mut store, remove(true)), CommandResult::Ok(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_list_and_show() {
        let mut store = CategoryStore::new();
        run(&mut store, add("Math"));
        run(&mut store, save_classic("Q1", "4"));
        run(&mut store, save_classic("Q2", "5"));

        let list = Command::List {
            category: "Math".to_string(),
        };
        assert_eq!(
            run(&mut store, list),
            CommandResult::Ok(Some("Q1\nQ2".to_string()))
        );

        let show = Command::Show {
            category: "Math".to_string(),
            title: "Q2".to_string(),
        };
        match run(&mut store, show) {
            CommandResult::Ok(Some(text)) => {
                assert!(text.contains("Type: classic"));
                assert!(text.contains("Answer: 5"));
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let missing = Command::List {
            category: "Physics".to_string(),
        };
        assert_eq!(
            run(&mut store, missing),
            CommandResult::Error("category 'Physics' not found".to_string())
        );
    }

    #[test]
    fn test_mutates() {
        assert!(!Command::Categories.mutates());
        assert!(add("Math").mutates());
        assert!(save_classic("Q1", "4").mutates());
    }
}
