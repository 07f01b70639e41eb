//! Rolodex Engine - Orchestration layer
//!
//! Coordinates parsing, execution, the confirmation state machine, undo
//! bookkeeping and persistence for each user interaction.

pub mod bootstrap;
pub mod logic_manager;
pub mod shared;

pub use bootstrap::{init_logic, init_model};
pub use logic_manager::LogicManager;
pub use shared::SharedLogic;
