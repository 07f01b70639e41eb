//! Error handling for rolodex-store
//!
//! Wraps rolodex-core ExError with store-specific helpers. Every failure
//! that crosses the storage boundary is classified here.

use rolodex_core::errors::{ExError, ExErrorKind};
use std::io;
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error, keeping permission denials distinguishable
///
/// A permission denial carries the offending path; any other failure
/// carries the underlying message.
pub fn io_error(operation: &str, path: &Path, err: io::Error) -> ExError {
    let kind = if err.kind() == io::ErrorKind::PermissionDenied {
        ExErrorKind::PermissionDenied
    } else {
        ExErrorKind::Io
    };
    ExError::new(kind)
        .with_op(operation.to_string())
        .with_path(path.display().to_string())
        .with_message(err.to_string())
}

/// Create a data load error for a file whose content cannot be used
pub fn data_load(operation: &str, path: &Path, reason: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::DataLoad)
        .with_op(operation.to_string())
        .with_path(path.display().to_string())
        .with_message(format!("{}: {}", path.display(), reason))
}

/// Create an error for a value that could not be encoded before a save
///
/// Reported as a generic I/O failure so it surfaces like any other failed
/// write.
pub fn encode_error(operation: &str, path: &Path, err: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_path(path.display().to_string())
        .with_message(err.to_string())
}

/// Create a seed validation error
pub fn seed_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::DataLoad)
        .with_op("seed_parse")
        .with_message(reason.to_string())
}
