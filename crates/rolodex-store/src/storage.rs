//! Storage boundary
//!
//! The engine persists through this trait only, so tests can substitute a
//! store that fails on demand.

use crate::errors::Result;
use rolodex_core::{AddressBook, CommandHistory};
use std::path::Path;

/// Persistence for the address book and the command history
///
/// Reads return `Ok(None)` when the file does not exist yet. Failures are
/// reported as `ExError` with kind `PermissionDenied` (carrying the path),
/// `Io` (carrying the underlying message) or `DataLoad`.
pub trait Storage: Send {
    fn address_book_file_path(&self) -> &Path;

    fn read_address_book(&self) -> Result<Option<AddressBook>>;

    fn save_address_book(&self, address_book: &AddressBook) -> Result<()>;

    fn command_history_file_path(&self) -> &Path;

    fn read_command_history(&self) -> Result<Option<CommandHistory>>;

    fn save_command_history(&self, history: &CommandHistory) -> Result<()>;
}
