//! User preferences file

use crate::errors::Result;
use crate::json_storage::{read_json, write_json};
use rolodex_core::UserPrefs;
use std::path::Path;

/// Default location of the preferences file
pub const DEFAULT_PREFS_FILE: &str = "preferences.json";

/// Read preferences, or `None` if the file does not exist
///
/// Missing keys take their default values.
pub fn read_user_prefs(path: &Path) -> Result<Option<UserPrefs>> {
    read_json(path, "read_user_prefs")
}

pub fn save_user_prefs(path: &Path, prefs: &UserPrefs) -> Result<()> {
    write_json(path, prefs, "save_user_prefs")
}
