//! Core task-list logic for qklist.
//! This crate owns item invariants, the record store contract and its
//! file and in-memory backends.

pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use config::{AppConfig, ConfigError, ConfigResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{normalize_description, Item, ItemValidationError, DEFAULT_PRIORITY};
pub use service::list_manager::{ErrorKind, ListError, ListManager, ListResult};
pub use store::{
    JsonFileStore, MemoryRecordStore, RecordStore, StoreError, StoreFailure, StoreResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
