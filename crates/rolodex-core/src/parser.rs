//! Text-to-command parsing
//!
//! Pure functions of the input text and the fixed command-word registry.

pub mod arguments;
pub mod tokenizer;

use crate::commands::{add, clear, delete, edit, find, undo, view, ClearCommand, Command};
use crate::errors::{Result, RolodexError};

/// Every recognised command word
pub const COMMAND_WORDS: [&str; 10] = [
    add::COMMAND_WORD,
    edit::COMMAND_WORD,
    delete::COMMAND_WORD,
    clear::COMMAND_WORD,
    find::COMMAND_WORD,
    view::LIST_COMMAND_WORD,
    view::HISTORY_COMMAND_WORD,
    undo::COMMAND_WORD,
    view::HELP_COMMAND_WORD,
    view::EXIT_COMMAND_WORD,
];

/// Accepted answers that confirm a pending command
pub const AFFIRMATIVE_TOKENS: [&str; 2] = ["y", "yes"];
/// Accepted answers that abort a pending command
pub const NEGATIVE_TOKENS: [&str; 2] = ["n", "no"];

/// Parse a raw command line into a [`Command`]
///
/// # Errors
///
/// Returns `InvalidCommandFormat` for blank input, `UnknownCommand` for an
/// unrecognised leading word, or whatever the command's argument parser
/// reports.
pub fn parse_command(input: &str) -> Result<Command> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(RolodexError::invalid_format(view::HELP_USAGE));
    }
    let (word, args) = match trimmed.find(char::is_whitespace) {
        Some(split) => trimmed.split_at(split),
        None => (trimmed, ""),
    };

    match word {
        add::COMMAND_WORD => arguments::parse_add(args).map(Command::Add),
        edit::COMMAND_WORD => arguments::parse_edit(args).map(Command::Edit),
        delete::COMMAND_WORD => arguments::parse_delete(args).map(Command::Delete),
        clear::COMMAND_WORD => Ok(Command::Clear(ClearCommand::new())),
        find::COMMAND_WORD => arguments::parse_find(args).map(Command::Find),
        view::LIST_COMMAND_WORD => Ok(Command::List),
        view::HISTORY_COMMAND_WORD => Ok(Command::History),
        undo::COMMAND_WORD => Ok(Command::Undo),
        view::HELP_COMMAND_WORD => Ok(Command::Help),
        view::EXIT_COMMAND_WORD => Ok(Command::Exit),
        unknown => {
            tracing::debug!(command_word = unknown, "unknown command word");
            Err(RolodexError::UnknownCommand {
                word: unknown.to_string(),
            })
        }
    }
}

/// Resolve a yes/no answer
///
/// # Errors
///
/// Returns `InvalidConfirmation` when the trimmed, lower-cased input is
/// neither an affirmative nor a negative token.
pub fn parse_confirmation(input: &str) -> Result<bool> {
    let normalized = input.trim().to_lowercase();
    if AFFIRMATIVE_TOKENS.contains(&normalized.as_str()) {
        Ok(true)
    } else if NEGATIVE_TOKENS.contains(&normalized.as_str()) {
        Ok(false)
    } else {
        Err(RolodexError::InvalidConfirmation {
            input: input.to_string(),
        })
    }
}
