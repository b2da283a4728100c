//! Record store contract and backends.
//!
//! # Responsibility
//! - Define the whole-list read/write contract used by the list manager.
//! - Keep the file format behind that contract.
//!
//! # Invariants
//! - `read_all` returns items in stored order.
//! - `write_all` replaces the entire persisted list or fails without a
//!   partial update.
//! - Read failures and write failures stay distinguishable.

use crate::model::item::Item;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod json_store;
pub mod memory_store;

pub use json_store::JsonFileStore;
pub use memory_store::MemoryRecordStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Whole-list persistence collaborator.
pub trait RecordStore {
    /// Loads every persisted item in stored order.
    fn read_all(&self) -> StoreResult<Vec<Item>>;
    /// Replaces the persisted contents with `items`.
    fn write_all(&mut self, items: &[Item]) -> StoreResult<()>;
}

impl<S: RecordStore + ?Sized> RecordStore for Box<S> {
    fn read_all(&self) -> StoreResult<Vec<Item>> {
        (**self).read_all()
    }

    fn write_all(&mut self, items: &[Item]) -> StoreResult<()> {
        (**self).write_all(items)
    }
}

/// Store failure tagged with the direction that failed.
#[derive(Debug)]
pub enum StoreError {
    Read(StoreFailure),
    Write(StoreFailure),
}

impl StoreError {
    pub fn is_read(&self) -> bool {
        matches!(self, Self::Read(_))
    }

    pub fn is_write(&self) -> bool {
        matches!(self, Self::Write(_))
    }

    pub fn failure(&self) -> &StoreFailure {
        match self {
            Self::Read(failure) | Self::Write(failure) => failure,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read(failure) => write!(f, "failed to read item store: {failure}"),
            Self::Write(failure) => write!(f, "failed to write item store: {failure}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.failure())
    }
}

/// Underlying cause of a store failure.
#[derive(Debug)]
pub enum StoreFailure {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// Backend refused the call without a lower-level cause.
    Unavailable(String),
}

impl Display for StoreFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "{err}"),
            Self::Unavailable(message) => write!(f, "store unavailable: {message}"),
        }
    }
}

impl Error for StoreFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreFailure {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreFailure {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
