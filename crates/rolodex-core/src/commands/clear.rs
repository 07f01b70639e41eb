use crate::commands::{CommandResult, ConfirmableCommand};
use crate::errors::Result;
use crate::model::AddressBook;
use crate::state::Model;

pub const COMMAND_WORD: &str = "clear";

pub const MESSAGE_CONFIRM: &str = "Are you sure you want to clear the address book? (y/n)";
pub const MESSAGE_SUCCESS: &str = "Address book has been cleared!";
pub const MESSAGE_ABORTED: &str = "Clear cancelled. The address book was not modified.";

/// Empties the address book after confirmation; undo restores the snapshot
/// taken at confirmation time
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClearCommand {
    previous: Option<AddressBook>,
}

impl ClearCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn execute(&self, _model: &mut Model) -> Result<CommandResult> {
        Ok(CommandResult::awaiting_confirmation(
            MESSAGE_CONFIRM,
            ConfirmableCommand::Clear(self.clone()),
        ))
    }

    pub(crate) fn execute_confirmed(&mut self, model: &mut Model) -> Result<CommandResult> {
        self.previous = Some(model.address_book().clone());
        model.set_address_book(&AddressBook::new());
        Ok(CommandResult::new(MESSAGE_SUCCESS))
    }

    pub(crate) fn execute_aborted(&self) -> CommandResult {
        CommandResult::new(MESSAGE_ABORTED)
    }

    pub(crate) fn undo(&self, model: &mut Model) -> Result<()> {
        if let Some(previous) = &self.previous {
            model.set_address_book(previous);
        }
        Ok(())
    }
}
