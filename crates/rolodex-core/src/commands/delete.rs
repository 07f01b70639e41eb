use crate::commands::{CommandResult, ConfirmableCommand};
use crate::errors::{Result, RolodexError};
use crate::model::{Index, Person};
use crate::state::Model;

pub const COMMAND_WORD: &str = "delete";

pub const MESSAGE_USAGE: &str = "delete: Deletes the person(s) identified by the index \
    numbers used in the displayed person list.\n\
    Parameters: INDEX [MORE_INDICES]... (must be positive integers)\n\
    Example: delete 1 3";

pub const MESSAGE_CONFIRM: &str =
    "Are you sure you want to delete the following person(s)? (y/n)";
pub const MESSAGE_ABORTED: &str = "Deletion cancelled. No persons were deleted.";

/// Deletes one or more persons by displayed index
///
/// Indices resolve against the view as it is when the command runs, never
/// against the view left behind by earlier deletions in the same command.
/// Duplicate indices collapse to one.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteCommand {
    target_indices: Vec<Index>,
    /// Persons captured by `execute`, committed by `execute_confirmed`
    targets: Option<Vec<Person>>,
    /// (book position, person) in deletion order, for undo
    removed: Vec<(usize, Person)>,
}

impl DeleteCommand {
    pub fn new(target_indices: Vec<Index>) -> Self {
        let mut unique = Vec::with_capacity(target_indices.len());
        for index in target_indices {
            if !unique.contains(&index) {
                unique.push(index);
            }
        }
        Self {
            target_indices: unique,
            targets: None,
            removed: Vec::new(),
        }
    }

    pub fn target_indices(&self) -> &[Index] {
        &self.target_indices
    }

    fn resolve_targets(&self, model: &Model) -> Result<Vec<Person>> {
        let view = model.filtered_persons();
        self.target_indices
            .iter()
            .map(|index| {
                view.get(index.zero_based())
                    .map(|p| (*p).clone())
                    .ok_or(RolodexError::InvalidPersonDisplayedIndex {
                        index: index.one_based(),
                    })
            })
            .collect()
    }

    /// Validate every index and capture the targets; no mutation
    pub(crate) fn execute(&mut self, model: &mut Model) -> Result<CommandResult> {
        let targets = self.resolve_targets(model)?;
        let prompt = format!(
            "{}\n{}",
            MESSAGE_CONFIRM,
            targets
                .iter()
                .map(Person::to_string)
                .collect::<Vec<_>>()
                .join("\n")
        );
        self.targets = Some(targets);
        Ok(CommandResult::awaiting_confirmation(
            prompt,
            ConfirmableCommand::Delete(self.clone()),
        ))
    }

    pub(crate) fn execute_confirmed(&mut self, model: &mut Model) -> Result<CommandResult> {
        let targets = match &self.targets {
            Some(targets) => targets.clone(),
            None => self.resolve_targets(model)?,
        };

        // All-or-nothing: refuse before touching the book if any target is gone
        if let Some(missing) = targets
            .iter()
            .find(|p| model.address_book().position_of(p).is_none())
        {
            return Err(RolodexError::PersonNotFound {
                name: missing.name.to_string(),
            });
        }

        self.removed.clear();
        for person in &targets {
            let position = model.delete_person(person)?;
            self.removed.push((position, person.clone()));
        }

        let formatted: Vec<String> = targets.iter().map(Person::to_string).collect();
        Ok(CommandResult::new(format!(
            "Deleted Person(s): {}",
            formatted.join(",")
        )))
    }

    pub(crate) fn execute_aborted(&self) -> CommandResult {
        CommandResult::new(MESSAGE_ABORTED)
    }

    /// Re-insert in reverse deletion order so every position is valid again
    pub(crate) fn undo(&self, model: &mut Model) -> Result<()> {
        for (position, person) in self.removed.iter().rev() {
            model.insert_person(*position, person.clone())?;
        }
        Ok(())
    }
}
