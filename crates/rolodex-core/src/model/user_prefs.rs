use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::command_history::DEFAULT_HISTORY_LIMIT;

/// User preferences: where data lives and how much history is kept
///
/// Unknown or missing keys fall back to their defaults so an older
/// preferences file keeps loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPrefs {
    pub address_book_file_path: PathBuf,
    pub command_history_file_path: PathBuf,
    pub history_limit: usize,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            address_book_file_path: PathBuf::from("data").join("addressbook.json"),
            command_history_file_path: PathBuf::from("data").join("commandhistory.json"),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl UserPrefs {
    /// Relocate both data files into `dir`, keeping their file names
    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        self.address_book_file_path = dir.join(file_name_or(
            &self.address_book_file_path,
            "addressbook.json",
        ));
        self.command_history_file_path = dir.join(file_name_or(
            &self.command_history_file_path,
            "commandhistory.json",
        ));
        self
    }
}

fn file_name_or(path: &Path, fallback: &str) -> PathBuf {
    path.file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(fallback))
}
