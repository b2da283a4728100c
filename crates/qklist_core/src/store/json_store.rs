//! JSON file record store.
//!
//! # Responsibility
//! - Persist the item list as one pretty-printed JSON array.
//! - Replace the file atomically on every write.
//!
//! # Invariants
//! - A missing file is a read failure; `init` is the only path that creates it.
//! - Writes go through a sibling temp file that is renamed over the target.

use super::{RecordStore, StoreError, StoreFailure, StoreResult};
use crate::model::item::Item;
use log::{debug, error};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const JSON_INDENT: &[u8] = b"    ";

/// Item store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Binds a store to `path` without touching the file system.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates parent directories and an empty list file when missing.
    ///
    /// Existing files are left untouched.
    pub fn init(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let mut store = Self::new(path);
        if let Some(parent) = parent_dir(&store.path) {
            std::fs::create_dir_all(parent).map_err(|err| StoreError::Write(err.into()))?;
        }
        if !store.path.exists() {
            store.write_all(&[])?;
        }
        Ok(store)
    }

    fn replace_file(&self, items: &[Item]) -> Result<(), StoreFailure> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        items.serialize(&mut serializer)?;
        buffer.push(b'\n');

        let dir = parent_dir(&self.path).unwrap_or_else(|| Path::new("."));
        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(&buffer)?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn read_all(&self) -> StoreResult<Vec<Item>> {
        let result = std::fs::read_to_string(&self.path)
            .map_err(StoreFailure::from)
            .and_then(|content| serde_json::from_str::<Vec<Item>>(&content).map_err(Into::into));

        match result {
            Ok(items) => {
                debug!(
                    "event=store_read module=store status=ok backend=json count={}",
                    items.len()
                );
                Ok(items)
            }
            Err(err) => {
                error!(
                    "event=store_read module=store status=error backend=json error={}",
                    err
                );
                Err(StoreError::Read(err))
            }
        }
    }

    fn write_all(&mut self, items: &[Item]) -> StoreResult<()> {
        match self.replace_file(items) {
            Ok(()) => {
                debug!(
                    "event=store_write module=store status=ok backend=json count={}",
                    items.len()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_write module=store status=error backend=json error={}",
                    err
                );
                Err(StoreError::Write(err))
            }
        }
    }
}

fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|parent| !parent.as_os_str().is_empty())
}
