use crate::commands::CommandResult;
use crate::errors::{Result, RolodexError};
use crate::model::Person;
use crate::state::Model;

pub const COMMAND_WORD: &str = "add";

pub const MESSAGE_USAGE: &str = "add: Adds a person to the address book. Parameters: \
    n/NAME p/PHONE e/EMAIL a/ADDRESS [b/BIRTHDAY] [nn/NICKNAME] [r/RELATIONSHIP] [nt/NOTES] [t/TAG]...\n\
    Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 t/friends";

/// Adds a person; undo removes it again
#[derive(Debug, Clone, PartialEq)]
pub struct AddCommand {
    to_add: Person,
}

impl AddCommand {
    pub fn new(person: Person) -> Self {
        Self { to_add: person }
    }

    pub fn person(&self) -> &Person {
        &self.to_add
    }

    pub(crate) fn execute(&self, model: &mut Model) -> Result<CommandResult> {
        if model.has_person(&self.to_add) {
            return Err(RolodexError::DuplicatePerson {
                name: self.to_add.name.to_string(),
            });
        }
        model.add_person(self.to_add.clone())?;
        Ok(CommandResult::new(format!(
            "New person added: {}",
            self.to_add
        )))
    }

    pub(crate) fn undo(&self, model: &mut Model) -> Result<()> {
        model.delete_person(&self.to_add)?;
        Ok(())
    }
}
