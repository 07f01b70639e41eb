//! Rolodex Core - in-memory contact book kernel
//!
//! This crate holds everything that does not touch the disk:
//! - validated person records and the address book that owns them
//! - the filtered view and the bounded command history ([`Model`])
//! - the command inventory with its confirm and undo capabilities
//! - the text parser that turns a command line into a [`Command`]
//! - the error and logging facilities shared by the other crates

pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod parser;
pub mod state;
pub mod undo_tracker;

pub use rolodex_core_types as core_types;

// Re-export commonly used types
pub use commands::{Command, CommandContext, CommandResult, ConfirmableCommand, UndoableCommand};
pub use errors::{ExError, ExErrorKind, Result, RolodexError};
pub use model::{AddressBook, CommandHistory, Person, UserPrefs};
pub use parser::{parse_command, parse_confirmation};
pub use state::Model;
pub use undo_tracker::UndoTracker;
