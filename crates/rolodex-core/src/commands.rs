//! Command inventory and capability types
//!
//! A parsed [`Command`] is executed against the [`Model`]. Two optional
//! capabilities sit on top of plain execution:
//!
//! - **Confirmable** commands return a [`CommandResult`] carrying a pending
//!   [`ConfirmableCommand`] instead of mutating state; the engine later calls
//!   `execute_confirmed` or `execute_aborted` on it.
//! - **Undoable** commands can be converted into an [`UndoableCommand`] once
//!   they have run, and pushed onto the [`UndoTracker`].
//!
//! Both capabilities are decided by the variant, never by runtime probing.

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod find;
pub mod undo;
pub mod view;

pub use add::AddCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditPersonDescriptor};
pub use find::FindCommand;

use crate::errors::Result;
use crate::state::Model;
use crate::undo_tracker::UndoTracker;

/// Everything a command may touch while executing
pub struct CommandContext<'a> {
    pub model: &'a mut Model,
    pub undo_tracker: &'a mut UndoTracker,
}

/// A parsed, executable user action
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    Clear(ClearCommand),
    Find(FindCommand),
    List,
    History,
    Undo,
    Help,
    Exit,
}

impl Command {
    /// The word that selects this command in the parser
    pub fn command_word(&self) -> &'static str {
        match self {
            Command::Add(_) => add::COMMAND_WORD,
            Command::Edit(_) => edit::COMMAND_WORD,
            Command::Delete(_) => delete::COMMAND_WORD,
            Command::Clear(_) => clear::COMMAND_WORD,
            Command::Find(_) => find::COMMAND_WORD,
            Command::List => view::LIST_COMMAND_WORD,
            Command::History => view::HISTORY_COMMAND_WORD,
            Command::Undo => undo::COMMAND_WORD,
            Command::Help => view::HELP_COMMAND_WORD,
            Command::Exit => view::EXIT_COMMAND_WORD,
        }
    }

    /// Whether `execute` defers its mutation to a yes/no confirmation
    pub fn is_confirmable(&self) -> bool {
        matches!(self, Command::Delete(_) | Command::Clear(_))
    }

    /// Whether a completed execution can be reverted
    pub fn is_undoable(&self) -> bool {
        matches!(
            self,
            Command::Add(_) | Command::Edit(_) | Command::Delete(_) | Command::Clear(_)
        )
    }

    /// Execute the command
    ///
    /// Confirmable commands only validate here; their result carries the
    /// pending command and the model is left untouched.
    ///
    /// # Errors
    ///
    /// Returns a business-rule error (invalid index, duplicate person,
    /// nothing to undo); no mutation has happened in that case.
    pub fn execute(&mut self, ctx: CommandContext<'_>) -> Result<CommandResult> {
        match self {
            Command::Add(cmd) => cmd.execute(ctx.model),
            Command::Edit(cmd) => cmd.execute(ctx.model),
            Command::Delete(cmd) => cmd.execute(ctx.model),
            Command::Clear(cmd) => cmd.execute(ctx.model),
            Command::Find(cmd) => cmd.execute(ctx.model),
            Command::List => Ok(view::list(ctx.model)),
            Command::History => Ok(view::history(ctx.model)),
            Command::Undo => undo::execute(ctx.model, ctx.undo_tracker),
            Command::Help => Ok(view::help()),
            Command::Exit => Ok(view::exit()),
        }
    }

    /// Convert an executed command into its undoable form
    ///
    /// `None` for commands without the capability.
    pub fn into_undoable(self) -> Option<UndoableCommand> {
        match self {
            Command::Add(cmd) => Some(UndoableCommand::Add(cmd)),
            Command::Edit(cmd) => Some(UndoableCommand::Edit(cmd)),
            Command::Delete(cmd) => Some(UndoableCommand::Delete(cmd)),
            Command::Clear(cmd) => Some(UndoableCommand::Clear(cmd)),
            _ => None,
        }
    }
}

/// A command that is waiting on a yes/no answer
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmableCommand {
    Delete(DeleteCommand),
    Clear(ClearCommand),
}

impl ConfirmableCommand {
    /// Commit the deferred mutation
    ///
    /// # Errors
    ///
    /// Returns a business-rule error if the targets can no longer be
    /// resolved; the model is unchanged in that case.
    pub fn execute_confirmed(&mut self, model: &mut Model) -> Result<CommandResult> {
        match self {
            ConfirmableCommand::Delete(cmd) => cmd.execute_confirmed(model),
            ConfirmableCommand::Clear(cmd) => cmd.execute_confirmed(model),
        }
    }

    /// Drop the deferred mutation
    pub fn execute_aborted(&self) -> CommandResult {
        match self {
            ConfirmableCommand::Delete(cmd) => cmd.execute_aborted(),
            ConfirmableCommand::Clear(cmd) => cmd.execute_aborted(),
        }
    }

    pub fn into_undoable(self) -> Option<UndoableCommand> {
        match self {
            ConfirmableCommand::Delete(cmd) => Some(UndoableCommand::Delete(cmd)),
            ConfirmableCommand::Clear(cmd) => Some(UndoableCommand::Clear(cmd)),
        }
    }
}

/// A command that ran to completion and remembers how to revert itself
#[derive(Debug, Clone, PartialEq)]
pub enum UndoableCommand {
    Add(AddCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    Clear(ClearCommand),
}

impl UndoableCommand {
    /// Revert the command's effect on `model`
    ///
    /// # Errors
    ///
    /// Returns `PersonNotFound` or `DuplicatePerson` if the model no longer
    /// matches what the command left behind.
    pub fn undo(&self, model: &mut Model) -> Result<()> {
        match self {
            UndoableCommand::Add(cmd) => cmd.undo(model),
            UndoableCommand::Edit(cmd) => cmd.undo(model),
            UndoableCommand::Delete(cmd) => cmd.undo(model),
            UndoableCommand::Clear(cmd) => cmd.undo(model),
        }
    }

    pub fn command_word(&self) -> &'static str {
        match self {
            UndoableCommand::Add(_) => add::COMMAND_WORD,
            UndoableCommand::Edit(_) => edit::COMMAND_WORD,
            UndoableCommand::Delete(_) => delete::COMMAND_WORD,
            UndoableCommand::Clear(_) => clear::COMMAND_WORD,
        }
    }
}

/// Outcome of an execute call
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    feedback: String,
    show_help: bool,
    exit: bool,
    pending: Option<ConfirmableCommand>,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
            pending: None,
        }
    }

    /// A result whose action is not committed until `pending` is confirmed
    pub fn awaiting_confirmation(prompt: impl Into<String>, pending: ConfirmableCommand) -> Self {
        Self {
            pending: Some(pending),
            ..Self::new(prompt)
        }
    }

    pub fn with_show_help(mut self) -> Self {
        self.show_help = true;
        self
    }

    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn is_show_help(&self) -> bool {
        self.show_help
    }

    pub fn is_exit(&self) -> bool {
        self.exit
    }

    pub fn needs_confirmation(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&ConfirmableCommand> {
        self.pending.as_ref()
    }

    /// Move the pending command out, leaving the result as a plain message
    pub fn take_pending(&mut self) -> Option<ConfirmableCommand> {
        self.pending.take()
    }
}
