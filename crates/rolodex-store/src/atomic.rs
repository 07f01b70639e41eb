//! Atomic write primitives
//!
//! Uses temp→rename pattern to ensure no partial writes

use crate::errors::{io_error, Result};
use std::fs;
use std::path::{Path, PathBuf};

fn temp_path_for(target_path: &Path) -> PathBuf {
    let mut name = target_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    target_path.with_file_name(name)
}

/// Atomically write bytes to a file
///
/// Creates missing parent directories, writes a sibling temp file and
/// renames it over the target. A failed write never leaves the target
/// half-written.
pub fn atomic_write(target_path: &Path, content: &[u8], operation: &str) -> Result<()> {
    if let Some(parent) = target_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error(operation, parent, e))?;
    }

    let temp_path = temp_path_for(target_path);
    if let Err(e) = fs::write(&temp_path, content) {
        return Err(io_error(operation, target_path, e));
    }

    fs::rename(&temp_path, target_path).map_err(|e| {
        // Best effort; the rename error is what the caller needs to see
        let _ = fs::remove_file(&temp_path);
        io_error(operation, target_path, e)
    })
}
