//! JSON file storage
//!
//! One pretty-printed JSON document per file, written atomically.

use crate::atomic::atomic_write;
use crate::errors::{data_load, encode_error, io_error, Result};
use crate::storage::Storage;
use rolodex_core::{AddressBook, CommandHistory, UserPrefs};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File-backed [`Storage`] using one JSON file per collection
#[derive(Debug, Clone)]
pub struct JsonStorage {
    address_book_path: PathBuf,
    command_history_path: PathBuf,
}

impl JsonStorage {
    pub fn new(
        address_book_path: impl Into<PathBuf>,
        command_history_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            address_book_path: address_book_path.into(),
            command_history_path: command_history_path.into(),
        }
    }

    /// Storage at the locations named by the user's preferences
    pub fn from_prefs(prefs: &UserPrefs) -> Self {
        Self::new(
            prefs.address_book_file_path.clone(),
            prefs.command_history_file_path.clone(),
        )
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path, operation: &str) -> Result<Option<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(io_error(operation, path, e)),
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| data_load(operation, path, e))
}

pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T, operation: &str) -> Result<()> {
    let json = serde_json::to_vec_pretty(value).map_err(|e| encode_error(operation, path, e))?;
    atomic_write(path, &json, operation)?;
    tracing::debug!(op = operation, path = %path.display(), bytes = json.len(), "saved");
    Ok(())
}

impl Storage for JsonStorage {
    fn address_book_file_path(&self) -> &Path {
        &self.address_book_path
    }

    fn read_address_book(&self) -> Result<Option<AddressBook>> {
        read_json(&self.address_book_path, "read_address_book")
    }

    fn save_address_book(&self, address_book: &AddressBook) -> Result<()> {
        write_json(&self.address_book_path, address_book, "save_address_book")
    }

    fn command_history_file_path(&self) -> &Path {
        &self.command_history_path
    }

    fn read_command_history(&self) -> Result<Option<CommandHistory>> {
        read_json(&self.command_history_path, "read_command_history")
    }

    fn save_command_history(&self, history: &CommandHistory) -> Result<()> {
        write_json(&self.command_history_path, history, "save_command_history")
    }
}
