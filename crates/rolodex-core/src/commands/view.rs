//! Commands that only change what is displayed, or nothing at all

use crate::commands::{add, delete, edit, find, CommandResult};
use crate::model::PersonPredicate;
use crate::state::Model;

pub const LIST_COMMAND_WORD: &str = "list";
pub const HISTORY_COMMAND_WORD: &str = "history";
pub const HELP_COMMAND_WORD: &str = "help";
pub const EXIT_COMMAND_WORD: &str = "exit";

pub const HELP_USAGE: &str = "help: Shows program usage instructions.\nExample: help";

pub(crate) fn list(model: &mut Model) -> CommandResult {
    model.update_filtered_person_list(PersonPredicate::ShowAll);
    CommandResult::new("Listed all persons")
}

/// Previous commands, most recent first
pub(crate) fn history(model: &Model) -> CommandResult {
    let history = model.command_history();
    if history.is_empty() {
        return CommandResult::new("You have not yet entered any commands.");
    }
    let entries: Vec<&str> = history.entries().rev().collect();
    CommandResult::new(format!(
        "Entered commands (from most recent to earliest):\n{}",
        entries.join("\n")
    ))
}

pub(crate) fn help() -> CommandResult {
    CommandResult::new("Opened help window.").with_show_help()
}

pub(crate) fn exit() -> CommandResult {
    CommandResult::new("Exiting Address Book as requested ...").with_exit()
}

/// Usage text for every command, one block per command
pub fn help_text() -> String {
    [
        add::MESSAGE_USAGE,
        edit::MESSAGE_USAGE,
        delete::MESSAGE_USAGE,
        "clear: Clears the address book after confirmation.",
        find::MESSAGE_USAGE,
        "list: Lists all persons.",
        "history: Lists previously entered commands, most recent first.",
        "undo: Reverts the most recent add, edit, delete or clear.",
        HELP_USAGE,
        "exit: Exits the program.",
    ]
    .join("\n\n")
}
