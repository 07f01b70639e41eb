#![allow(clippy::unwrap_used, clippy::expect_used)]

use rolodex_core::errors::{
    ErrorCategory, ExError, ExErrorKind, RolodexError, FILE_OPS_ERROR_FORMAT,
};

#[test]
fn test_invalid_index_verifiable_by_kind() {
    let ex_err: ExError = RolodexError::InvalidIndex {
        input: "0".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidIndex);
    assert_eq!(ex_err.code(), "ERR_INVALID_INDEX");
    assert_eq!(ex_err.message(), "Index is not a non-zero unsigned integer.");
}

#[test]
fn test_displayed_index_distinct_from_malformed_index() {
    let ex_err: ExError = RolodexError::InvalidPersonDisplayedIndex { index: 9 }.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidDisplayedIndex);
    assert_ne!(ex_err.kind(), ExErrorKind::InvalidIndex);
}

#[test]
fn test_permission_round_trip_keeps_path() {
    let ex_err = ExError::new(ExErrorKind::PermissionDenied)
        .with_op("save_address_book")
        .with_path("/read-only/addressbook.json");

    let err: RolodexError = ex_err.into();

    assert_eq!(
        err.to_string(),
        "Could not save data to file /read-only/addressbook.json due to insufficient \
         permissions to write to the file or the folder."
    );
    assert_eq!(err.category(), ErrorCategory::Execution);
}

#[test]
fn test_io_round_trip_uses_generic_template() {
    let ex_err = ExError::new(ExErrorKind::Io).with_message("disk full");

    let err: RolodexError = ex_err.into();

    assert_eq!(
        err.to_string(),
        FILE_OPS_ERROR_FORMAT.replace("{}", "disk full")
    );
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::UnknownCommand, "ERR_UNKNOWN_COMMAND"),
        (ExErrorKind::InvalidConfirmation, "ERR_INVALID_CONFIRMATION"),
        (ExErrorKind::DuplicateRecord, "ERR_DUPLICATE_RECORD"),
        (ExErrorKind::NothingToUndo, "ERR_NOTHING_TO_UNDO"),
        (ExErrorKind::PermissionDenied, "ERR_PERMISSION_DENIED"),
        (ExErrorKind::Io, "ERR_IO"),
    ];

    for (kind, expected) in kinds {
        assert_eq!(kind.code(), expected, "Code mismatch for {:?}", kind);
    }
}

#[test]
fn test_display_includes_op_and_path() {
    let ex_err = ExError::new(ExErrorKind::Io)
        .with_op("save_command_history")
        .with_path("data/commandhistory.json")
        .with_message("boom");

    let rendered = ex_err.to_string();
    assert!(rendered.contains("ERR_IO"));
    assert!(rendered.contains("save_command_history"));
    assert!(rendered.contains("data/commandhistory.json"));
}

#[test]
fn test_parse_errors_are_classified() {
    assert!(RolodexError::UnknownCommand {
        word: "x".to_string()
    }
    .is_parse_error());
    assert!(!RolodexError::NothingToUndo.is_parse_error());
    assert!(!RolodexError::DuplicatePerson {
        name: "Amy".to_string()
    }
    .is_parse_error());
}
