#![allow(clippy::unwrap_used, clippy::expect_used)]

use rolodex_core::errors::RolodexError;
use rolodex_core::logging_facility::test_capture::init_test_capture;
use rolodex_core::logging_facility::Profile;
use rolodex_core::{log_op_end, log_op_error, log_op_start};
use rolodex_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, command_text = "list");

    let start_events = capture.find(op_name, EVENT_START);
    assert_eq!(start_events.len(), 1);
    assert_eq!(start_events[0].field("command_text"), Some("list"));
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events = capture.find(op_name, EVENT_END);
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    log_op_error!(op_name, RolodexError::NothingToUndo, duration_ms = 10);

    let error_events = capture.find(op_name, EVENT_END_ERROR);
    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(error_events[0].field("err.code"), Some("ERR_NOTHING_TO_UNDO"));
    assert_eq!(error_events[0].field("err.kind"), Some("NothingToUndo"));
}

#[test]
fn test_log_op_error_with_extra_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_4";

    let err = RolodexError::FilePermission {
        path: "data/addressbook.json".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 1, confirmed = true);

    capture.assert_event_exists(op_name, EVENT_END_ERROR);
    let event = &capture.find(op_name, EVENT_END_ERROR)[0];
    assert_eq!(event.field("err.code"), Some("ERR_PERMISSION_DENIED"));
    assert_eq!(event.field("confirmed"), Some("true"));
}

#[test]
fn test_component_is_recorded() {
    let capture = init_test_capture();
    let op_name = "test_component_unique_5";

    log_op_start!(op_name);

    let event = &capture.find(op_name, EVENT_START)[0];
    assert_eq!(event.component.as_deref(), Some(module_path!()));
}

#[test]
fn test_profile_names() {
    assert_eq!("dev".parse::<Profile>().unwrap(), Profile::Development);
    assert_eq!("Production".parse::<Profile>().unwrap(), Profile::Production);
    assert_eq!("test".parse::<Profile>().unwrap(), Profile::Test);
    assert!("verbose".parse::<Profile>().is_err());
}
