//! Interaction orchestration
//!
//! One call to [`LogicManager::execute`] is one top-level interaction:
//!
//! 1. If a confirmable command is pending, the text is read as a yes/no
//!    answer; otherwise it is parsed as a command.
//! 2. The command runs against the model. Confirmable commands park
//!    themselves in the pending slot instead of mutating.
//! 3. On success the address book is saved, the raw text is appended to the
//!    command history, and the history is saved, in that order.
//!
//! A parse or execution failure skips step 3 entirely.

use std::time::Instant;

use rolodex_core::core_types::{RequestId, SessionId};
use rolodex_core::{
    log_op_end, log_op_error, log_op_start, parse_command, parse_confirmation, CommandContext,
    CommandResult, ConfirmableCommand, Model, Person, Result, RolodexError, UndoTracker,
    UndoableCommand,
};
use rolodex_store::Storage;
use std::path::Path;

/// Owns the model, the storage and the per-session interaction state
///
/// At most one confirmable command is pending at any time. Not `Sync`;
/// share it through [`SharedLogic`](crate::SharedLogic).
pub struct LogicManager {
    model: Model,
    storage: Box<dyn Storage>,
    undo_tracker: UndoTracker,
    pending: Option<ConfirmableCommand>,
    session_id: SessionId,
}

impl LogicManager {
    pub fn new(model: Model, storage: Box<dyn Storage>) -> Self {
        Self::with_tracker(model, storage, UndoTracker::new())
    }

    /// Use an existing undo tracker instead of a fresh one
    pub fn with_tracker(
        model: Model,
        storage: Box<dyn Storage>,
        undo_tracker: UndoTracker,
    ) -> Self {
        Self {
            model,
            storage,
            undo_tracker,
            pending: None,
            session_id: SessionId::new(),
        }
    }

    /// Run one interaction
    ///
    /// # Errors
    ///
    /// Returns a parse error (nothing executed, pending slot untouched), an
    /// execution error (model unchanged), or a `FilePermission` / `FileOps`
    /// error when the result could not be saved.
    pub fn execute(&mut self, command_text: &str) -> Result<CommandResult> {
        let request_id = RequestId::new();
        let start = Instant::now();
        log_op_start!(
            "execute",
            request_id = request_id.as_str(),
            session_id = self.session_id.as_str(),
            command_text = command_text,
            awaiting_confirmation = self.pending.is_some()
        );

        let outcome = match self.pending.take() {
            Some(pending) => self.resolve_confirmation(pending, command_text),
            None => self.dispatch(command_text),
        }
        .and_then(|result| {
            self.persist(command_text)?;
            Ok(result)
        });

        let duration_ms = start.elapsed().as_millis() as u64;
        match &outcome {
            Ok(result) => {
                log_op_end!(
                    "execute",
                    duration_ms = duration_ms,
                    request_id = request_id.as_str(),
                    needs_confirmation = result.needs_confirmation(),
                    undo_depth = self.undo_tracker.len()
                );
            }
            Err(err) => {
                log_op_error!(
                    "execute",
                    err.clone(),
                    duration_ms = duration_ms,
                    request_id = request_id.as_str()
                );
            }
        }
        outcome
    }

    fn dispatch(&mut self, command_text: &str) -> Result<CommandResult> {
        let mut command = parse_command(command_text)?;
        let result = command.execute(CommandContext {
            model: &mut self.model,
            undo_tracker: &mut self.undo_tracker,
        })?;

        if let Some(pending) = result.pending() {
            tracing::debug!(command_word = command.command_word(), "awaiting confirmation");
            self.pending = Some(pending.clone());
        } else if let Some(undoable) = command.into_undoable() {
            self.record_undoable(undoable);
        }
        Ok(result)
    }

    fn resolve_confirmation(
        &mut self,
        mut pending: ConfirmableCommand,
        answer: &str,
    ) -> Result<CommandResult> {
        let confirmed = match parse_confirmation(answer) {
            Ok(confirmed) => confirmed,
            Err(err) => {
                self.pending = Some(pending);
                return Err(err);
            }
        };
        tracing::debug!(confirmed, "confirmation resolved");

        if !confirmed {
            return Ok(pending.execute_aborted());
        }
        let result = pending.execute_confirmed(&mut self.model)?;
        if let Some(undoable) = pending.into_undoable() {
            self.record_undoable(undoable);
        }
        Ok(result)
    }

    fn record_undoable(&mut self, undoable: UndoableCommand) {
        let command_word = undoable.command_word();
        self.undo_tracker.push(undoable);
        tracing::debug!(command_word, undo_depth = self.undo_tracker.len(), "undo recorded");
    }

    fn persist(&mut self, command_text: &str) -> Result<()> {
        self.storage
            .save_address_book(self.model.address_book())
            .map_err(RolodexError::from)?;
        self.model.add_to_command_history(command_text);
        self.storage
            .save_command_history(self.model.command_history())
            .map_err(RolodexError::from)?;
        Ok(())
    }

    // ===== Accessors =====

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.model.filtered_persons()
    }

    pub fn address_book_file_path(&self) -> &Path {
        self.storage.address_book_file_path()
    }

    pub fn is_awaiting_confirmation(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_confirmation(&self) -> Option<&ConfirmableCommand> {
        self.pending.as_ref()
    }

    pub fn undo_tracker(&self) -> &UndoTracker {
        &self.undo_tracker
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }
}

impl std::fmt::Debug for LogicManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogicManager")
            .field("model", &self.model)
            .field("address_book_file_path", &self.address_book_file_path())
            .field("undo_depth", &self.undo_tracker.len())
            .field("pending", &self.pending)
            .finish()
    }
}
