//! Rolodex Store - Persistence layer with atomic JSON files and seed data
//!
//! Provides:
//! - The [`Storage`] trait the engine persists through
//! - [`JsonStorage`], one JSON document per collection, written atomically
//! - User preferences file handling
//! - Bundled YAML sample data for first launch

pub mod atomic;
pub mod errors;
pub mod json_storage;
pub mod prefs;
pub mod seed;
pub mod storage;

// Re-export key types
pub use errors::Result;
pub use json_storage::JsonStorage;
pub use storage::Storage;
