//! Canonical event names for structured logging
//!
//! Every `log_op_*!` event carries one of these as its `event` field.

pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
