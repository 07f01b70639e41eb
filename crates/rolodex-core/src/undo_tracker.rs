//! Undo tracker
//!
//! LIFO record of executed undoable commands. One tracker belongs to one
//! engine instance; it is never persisted, so a restart starts empty.

use crate::commands::UndoableCommand;

#[derive(Debug, Default, Clone)]
pub struct UndoTracker {
    stack: Vec<UndoableCommand>,
}

impl UndoTracker {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, command: UndoableCommand) {
        self.stack.push(command);
    }

    pub fn pop(&mut self) -> Option<UndoableCommand> {
        self.stack.pop()
    }

    /// The command an `undo` would revert next
    pub fn peek(&self) -> Option<&UndoableCommand> {
        self.stack.last()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }
}
