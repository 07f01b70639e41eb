//! Save sequence and failure reporting

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{logic_with, MemoryStorage, SIX};
use rolodex_core::errors::{ErrorCategory, FILE_OPS_ERROR_FORMAT};
use rolodex_core::{ExErrorKind, RolodexError, UserPrefs};
use rolodex_engine::{init_logic, init_model, LogicManager};
use rolodex_store::{JsonStorage, Storage};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_permission_denied_names_the_file() {
    let (mut logic, storage) = logic_with(&SIX);
    storage.fail_book_with(ExErrorKind::PermissionDenied);

    let err = logic.execute("list").unwrap_err();

    assert_eq!(
        err.to_string(),
        "Could not save data to file /mem/addressbook.json due to insufficient \
         permissions to write to the file or the folder."
    );
    assert_eq!(err.category(), ErrorCategory::Execution);
}

#[test]
fn test_generic_failure_carries_message() {
    let (mut logic, storage) = logic_with(&SIX);
    storage.fail_book_with(ExErrorKind::Io);

    let err = logic.execute("list").unwrap_err();

    assert_eq!(
        err,
        RolodexError::FileOps {
            message: "disk full".to_string()
        }
    );
    assert_eq!(err.to_string(), FILE_OPS_ERROR_FORMAT.replace("{}", "disk full"));
}

#[test]
fn test_book_save_failure_skips_history() {
    let (mut logic, storage) = logic_with(&SIX);
    storage.fail_book_with(ExErrorKind::Io);

    assert!(logic.execute("list").is_err());

    assert!(logic.model().command_history().is_empty());
    assert_eq!(storage.save_counts(), (0, 0));
}

#[test]
fn test_history_save_failure_after_book_saved() {
    let (mut logic, storage) = logic_with(&SIX);
    storage.fail_history_with(ExErrorKind::PermissionDenied);

    let err = logic.execute("delete 1").unwrap_err();

    assert_eq!(
        err,
        RolodexError::FilePermission {
            path: "/mem/commandhistory.json".to_string()
        }
    );
    assert_eq!(storage.save_counts(), (1, 0));
    // The prompt itself was shown, so the confirmation is still pending
    assert!(logic.is_awaiting_confirmation());
}

#[test]
fn test_failed_book_save_keeps_confirmed_delete() {
    let (mut logic, storage) = logic_with(&SIX);
    logic.execute("delete 1").unwrap();
    storage.fail_book_with(ExErrorKind::PermissionDenied);

    let err = logic.execute("y").unwrap_err();

    assert_eq!(
        err,
        RolodexError::FilePermission {
            path: "/mem/addressbook.json".to_string()
        }
    );
    // The deletion already happened in memory and stays undoable
    assert_eq!(logic.model().address_book().len(), 5);
    assert!(!common::names(&logic).contains(&"Alice Pauline".to_string()));
    assert_eq!(logic.undo_tracker().len(), 1);
    assert!(!logic.is_awaiting_confirmation());
    // Only the prompt was ever written out
    assert_eq!(storage.saved_book().unwrap().len(), 6);
    assert_eq!(storage.saved_history(), ["delete 1"]);
}

#[test]
fn test_failed_history_save_keeps_added_person() {
    let (mut logic, storage) = logic_with(&SIX);
    storage.fail_history_with(ExErrorKind::Io);

    let err = logic
        .execute("add n/Amy Bee p/11111111 e/amy@example.com a/Block 312")
        .unwrap_err();

    assert_eq!(
        err,
        RolodexError::FileOps {
            message: "disk full".to_string()
        }
    );
    assert_eq!(logic.model().address_book().len(), 7);
    assert_eq!(logic.undo_tracker().len(), 1);
    assert_eq!(logic.model().command_history().len(), 1);
    assert_eq!(storage.saved_book().unwrap().len(), 7);
    assert_eq!(storage.save_counts(), (1, 0));

    // The change can still be reverted once the disk recovers
    storage.state.lock().unwrap().fail_history_save = None;
    logic.execute("undo").unwrap();
    assert_eq!(logic.model().address_book().len(), 6);
}

#[test]
fn test_restart_reads_back_what_was_saved() {
    let dir = TempDir::new().unwrap();
    let prefs = UserPrefs::default().with_data_dir(dir.path());

    {
        let mut logic = init_logic(prefs.clone(), false);
        logic
            .execute("add n/Amy Bee p/11111111 e/amy@example.com a/Block 312")
            .unwrap();
        logic.execute("history").unwrap();
    }

    let logic = init_logic(prefs.clone(), false);
    assert_eq!(logic.model().address_book().len(), 1);
    assert_eq!(
        logic
            .model()
            .command_history()
            .entries()
            .collect::<Vec<_>>(),
        [
            "add n/Amy Bee p/11111111 e/amy@example.com a/Block 312",
            "history"
        ]
    );
    assert_eq!(logic.address_book_file_path(), prefs.address_book_file_path);
    assert!(logic.undo_tracker().is_empty());
}

#[test]
fn test_missing_file_uses_sample_data() {
    let dir = TempDir::new().unwrap();
    let prefs = UserPrefs::default().with_data_dir(dir.path());
    let storage = JsonStorage::from_prefs(&prefs);

    let with_sample = init_model(&storage, prefs.clone(), true);
    let without_sample = init_model(&storage, prefs, false);

    assert!(!with_sample.address_book().is_empty());
    assert!(without_sample.address_book().is_empty());
}

#[test]
fn test_corrupt_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let prefs = UserPrefs::default().with_data_dir(dir.path());
    let storage = JsonStorage::from_prefs(&prefs);
    fs::write(storage.address_book_file_path(), "[[[").unwrap();
    fs::write(storage.command_history_file_path(), "nope").unwrap();

    let model = init_model(&storage, prefs, true);

    assert!(model.address_book().is_empty());
    assert!(model.command_history().is_empty());
}

#[test]
fn test_history_bound_applies_to_loaded_history() {
    let storage = MemoryStorage::new();
    let prefs = UserPrefs {
        history_limit: 2,
        ..UserPrefs::default()
    };
    let mut logic = LogicManager::new(
        init_model(&storage, prefs, false),
        Box::new(storage.clone()),
    );

    for cmd in ["list", "history", "list"] {
        logic.execute(cmd).unwrap();
    }

    assert_eq!(storage.saved_history(), ["history", "list"]);
}
