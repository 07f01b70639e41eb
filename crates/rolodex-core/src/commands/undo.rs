use crate::commands::CommandResult;
use crate::errors::{Result, RolodexError};
use crate::model::PersonPredicate;
use crate::state::Model;
use crate::undo_tracker::UndoTracker;

pub const COMMAND_WORD: &str = "undo";

/// Revert the most recent undoable command
///
/// The tracker is only popped once the revert succeeded, so a failed undo
/// can be retried.
pub(crate) fn execute(model: &mut Model, tracker: &mut UndoTracker) -> Result<CommandResult> {
    let Some(command) = tracker.peek() else {
        return Err(RolodexError::NothingToUndo);
    };
    let word = command.command_word();
    command.undo(model)?;
    tracker.pop();
    model.update_filtered_person_list(PersonPredicate::ShowAll);

    tracing::debug!(command_word = word, undo_depth = tracker.len(), "undo applied");
    Ok(CommandResult::new(format!("Undo success! Reverted: {}", word)))
}
