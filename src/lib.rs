//! # question-bank
//!
//! Organises open-form and multiple-choice questions into named categories,
//! keeps them in a JSON file, and exports them as a printable document.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use question_bank::{export, Answer, BankError, CategoryStore, Question};
//!
//! fn main() -> Result<(), BankError> {
//!     let mut store = CategoryStore::new();
//!     store.add_category("Math")?;
//!     store.save_question("Math", Question::new("Q1", "2+2", Answer::classic("4")?))?;
//!
//!     question_bank::save_store(&store, "questions.json")?;
//!     print!("{}", export::render(&store)?);
//!     Ok(())
//! }
//! ```

mod app;
pub mod commands;
mod data;
mod error;
pub mod export;
mod models;
mod store;
pub mod terminal;
mod ui;

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::App;
pub use data::{
    deserialize, from_json_slice, load_store, load_store_or_default, save_store, serialize,
    to_json_bytes, DEFAULT_BANK_PATH,
};
pub use error::{BankError, FormatError, NotFoundError, ValidationError};
pub use models::{option_label, Answer, AnswerKind, Question, NUM_OPTIONS, OPTION_LABELS};
pub use store::{Category, CategoryStore, SaveOutcome};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Shows the exported document of `store` in a scrollable terminal view.
///
/// Takes over the terminal and returns when the user quits.
pub fn view(store: &CategoryStore) -> Result<(), BankError> {
    let document = export::render(store)?;
    let mut app = App::new(&document);

    terminal::with_terminal(|term| run_event_loop(term, &mut app))
}

fn run_event_loop(terminal: &mut terminal::ViewerTerminal, app: &mut App) -> Result<(), BankError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the viewer should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_up();
            false
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.scroll_to_top();
            false
        }
        KeyCode::End | KeyCode::Char('G') => {
            app.scroll_to_bottom();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}
