use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use log::{debug, error};
use question_bank::commands::{execute_command, Command, CommandResult};
use question_bank::{export, BankError, CategoryStore, DEFAULT_BANK_PATH};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file holding the question bank
    #[arg(short, long, env = "QUESTION_BANK_FILE", default_value = DEFAULT_BANK_PATH)]
    bank: PathBuf,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// List categories and their question counts
    Categories,
    /// Add an empty category
    AddCategory { name: String },
    /// Rename a category, keeping its questions
    RenameCategory { old: String, new: String },
    /// Remove a category and all of its questions
    RemoveCategory {
        name: String,
        /// Confirm the removal
        #[arg(short, long)]
        yes: bool,
    },
    /// List question titles of a category
    List { category: String },
    /// Show one question
    Show { category: String, title: String },
    /// Add or update an open-form question
    SaveClassic {
        category: String,
        title: String,
        content: String,
        answer: String,
    },
    /// Add or update a multiple-choice question
    SaveChoice {
        category: String,
        title: String,
        content: String,
        /// Option text; give exactly four, in A-D order
        #[arg(short, long = "option", num_args = 1)]
        options: Vec<String>,
        /// Number of the correct option (1-4)
        #[arg(short, long)]
        correct: Option<usize>,
    },
    /// Delete one question
    DeleteQuestion {
        category: String,
        title: String,
        /// Confirm the deletion
        #[arg(short, long)]
        yes: bool,
    },
    /// Export the bank as a plain-text document
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Browse the exported document in the terminal
    View,
}

impl Action {
    fn into_command(self) -> Option<Command> {
        let command = match self {
            Action::Categories => Command::Categories,
            Action::AddCategory { name } => Command::AddCategory { name },
            Action::RenameCategory { old, new } => Command::RenameCategory { old, new },
            Action::RemoveCategory { name, yes } => Command::RemoveCategory {
                name,
                confirmed: yes,
            },
            Action::List { category } => Command::List { category },
            Action::Show { category, title } => Command::Show { category, title },
            Action::SaveClassic {
                category,
                title,
                content,
                answer,
            } => Command::SaveClassic {
                category,
                title,
                content,
                answer,
            },
            Action::SaveChoice {
                category,
                title,
                content,
                options,
                correct,
            } => Command::SaveChoice {
                category,
                title,
                content,
                options,
                correct,
            },
            Action::DeleteQuestion {
                category,
                title,
                yes,
            } => Command::DeleteQuestion {
                category,
                title,
                confirmed: yes,
            },
            Action::Export { .. } | Action::View => return None,
        };
        Some(command)
    }
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();
    debug!("Using bank file {}", args.bank.display());

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), BankError> {
    let mut store = question_bank::load_store_or_default(&args.bank)?;

    match args.action {
        Action::Export { output } => export_document(&store, output),
        Action::View => question_bank::view(&store),
        action => {
            let Some(command) = action.into_command() else {
                return Ok(());
            };
            let mutates = command.mutates();

            match execute_command(&mut store, command) {
                CommandResult::Ok(message) => {
                    if let Some(message) = message {
                        println!("{}", message);
                    }
                    if mutates {
                        question_bank::save_store(&store, &args.bank)?;
                    }
                    Ok(())
                }
                CommandResult::Error(message) => {
                    eprintln!("{}", message);
                    process::exit(2);
                }
            }
        }
    }
}

fn export_document(store: &CategoryStore, output: Option<PathBuf>) -> Result<(), BankError> {
    let text = export::render(store)?.to_string();
    match output {
        Some(path) => {
            fs::write(&path, text)?;
            println!("Exported to {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}
