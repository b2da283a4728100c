//! Task list use-case service.
//!
//! # Responsibility
//! - Provide add/list/complete/remove/clear entry points for list callers.
//! - Run every mutation as one read, validate, mutate, write cycle.
//!
//! # Invariants
//! - Nothing is cached between calls; each call reads the store afresh.
//! - Validation finishes before `write_all`; rejected calls never write.
//! - Identifiers are 1-based positions in the list read by that call.
//! - `remove_all` never reads, so an unreadable store can always be cleared.

use crate::model::item::{Item, ItemValidationError, DEFAULT_PRIORITY};
use crate::store::{RecordStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ListResult<T> = Result<T, ListError>;

/// Stable error category surfaced to presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DbRead,
    DbWrite,
    Id,
    Validation,
}

impl ErrorKind {
    /// Process exit code for a successful command.
    pub const SUCCESS: i32 = 0;

    /// Numeric code used as the CLI exit status.
    pub fn code(self) -> i32 {
        match self {
            Self::DbRead => 3,
            Self::DbWrite => 4,
            Self::Id => 6,
            Self::Validation => 7,
        }
    }
}

/// Error returned by list manager operations.
#[derive(Debug)]
pub enum ListError {
    /// Store could not be read. `item` holds the unsaved item for `add`.
    DbRead {
        item: Option<Item>,
        source: StoreError,
    },
    /// Store could not be written after a valid in-memory mutation.
    /// `item` is what the call would have returned; `None` for `remove_all`.
    DbWrite {
        item: Option<Item>,
        source: StoreError,
    },
    /// Identifier outside `[1, len]`.
    InvalidId { id: i64, len: usize },
    /// Description rejected before touching the store.
    Validation(ItemValidationError),
}

impl ListError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DbRead { .. } => ErrorKind::DbRead,
            Self::DbWrite { .. } => ErrorKind::DbWrite,
            Self::InvalidId { .. } => ErrorKind::Id,
            Self::Validation(_) => ErrorKind::Validation,
        }
    }

    /// Item the failed call was working on, when there is one.
    pub fn item(&self) -> Option<&Item> {
        match self {
            Self::DbRead { item, .. } | Self::DbWrite { item, .. } => item.as_ref(),
            Self::InvalidId { .. } | Self::Validation(_) => None,
        }
    }
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DbRead { source, .. } => write!(f, "{source}"),
            Self::DbWrite { source, .. } => write!(f, "{source}"),
            Self::InvalidId { id, len } => {
                write!(f, "invalid item id {id}; expected a value in 1..={len}")
            }
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DbRead { source, .. } | Self::DbWrite { source, .. } => Some(source),
            Self::Validation(err) => Some(err),
            Self::InvalidId { .. } => None,
        }
    }
}

impl From<ItemValidationError> for ListError {
    fn from(value: ItemValidationError) -> Self {
        Self::Validation(value)
    }
}

/// CRUD facade over an injected record store.
pub struct ListManager<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> ListManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Appends a new item built from `words`.
    ///
    /// # Contract
    /// - Description is joined with single spaces and ends with one `.`.
    /// - Read failure returns the unsaved item inside `ListError::DbRead`.
    /// - Write failure returns the appended item inside `ListError::DbWrite`.
    pub fn add<W: AsRef<str>>(&mut self, words: &[W], priority: i64) -> ListResult<Item> {
        let item = Item::new(words, priority)?;

        let mut items = match self.store.read_all() {
            Ok(items) => items,
            Err(source) => {
                warn!("event=item_add module=list status=error error_code=db_read_error");
                return Err(ListError::DbRead {
                    item: Some(item),
                    source,
                });
            }
        };

        items.push(item.clone());
        self.persist(&items, "item_add", item)
    }

    /// Same as `add` with the default priority.
    pub fn add_default_priority<W: AsRef<str>>(&mut self, words: &[W]) -> ListResult<Item> {
        self.add(words, DEFAULT_PRIORITY)
    }

    /// Returns the current list unmodified.
    pub fn list(&self) -> ListResult<Vec<Item>> {
        self.store
            .read_all()
            .map_err(|source| ListError::DbRead { item: None, source })
    }

    /// Marks the item at 1-based position `id` as done.
    ///
    /// Repeating the call on a done item succeeds and rewrites the same list.
    pub fn set_done(&mut self, id: i64) -> ListResult<Item> {
        let mut items = self.read_for("item_done")?;
        let index = resolve_index(id, items.len())?;

        let item = &mut items[index];
        item.mark_done();
        let updated = item.clone();
        self.persist(&items, "item_done", updated)
    }

    /// Removes and returns the item at 1-based position `id`.
    ///
    /// Every later item moves down one position.
    pub fn remove(&mut self, id: i64) -> ListResult<Item> {
        let mut items = self.read_for("item_remove")?;
        let index = resolve_index(id, items.len())?;

        let removed = items.remove(index);
        self.persist(&items, "item_remove", removed)
    }

    /// Replaces the stored list with an empty one without reading it first.
    pub fn remove_all(&mut self) -> ListResult<()> {
        match self.store.write_all(&[]) {
            Ok(()) => {
                info!("event=item_clear module=list status=ok");
                Ok(())
            }
            Err(source) => {
                warn!("event=item_clear module=list status=error error_code=db_write_error");
                Err(ListError::DbWrite { item: None, source })
            }
        }
    }

    fn read_for(&self, event: &str) -> ListResult<Vec<Item>> {
        self.store.read_all().map_err(|source| {
            warn!("event={event} module=list status=error error_code=db_read_error");
            ListError::DbRead { item: None, source }
        })
    }

    fn persist(&mut self, items: &[Item], event: &str, item: Item) -> ListResult<Item> {
        match self.store.write_all(items) {
            Ok(()) => {
                info!(
                    "event={event} module=list status=ok count={}",
                    items.len()
                );
                Ok(item)
            }
            Err(source) => {
                warn!("event={event} module=list status=error error_code=db_write_error");
                Err(ListError::DbWrite {
                    item: Some(item),
                    source,
                })
            }
        }
    }
}

/// Maps a 1-based identifier to a vector index.
fn resolve_index(id: i64, len: usize) -> ListResult<usize> {
    usize::try_from(id)
        .ok()
        .and_then(|position| position.checked_sub(1))
        .filter(|index| *index < len)
        .ok_or_else(|| {
            warn!("event=item_lookup module=list status=error error_code=id_error len={len}");
            ListError::InvalidId { id, len }
        })
}

#[cfg(test)]
mod tests {
    use super::{resolve_index, ErrorKind, ListError};

    #[test]
    fn resolve_index_accepts_positions_in_range() {
        assert_eq!(resolve_index(1, 3).unwrap(), 0);
        assert_eq!(resolve_index(3, 3).unwrap(), 2);
    }

    #[test]
    fn resolve_index_rejects_zero_negative_and_past_end() {
        for id in [0, -1, 4, i64::MIN] {
            let err = resolve_index(id, 3).unwrap_err();
            assert!(matches!(err, ListError::InvalidId { id: got, len: 3 } if got == id));
        }
    }

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(ErrorKind::DbRead.code(), 3);
        assert_eq!(ErrorKind::DbWrite.code(), 4);
        assert_eq!(ErrorKind::Id.code(), 6);
        assert_ne!(ErrorKind::Validation.code(), ErrorKind::SUCCESS);
    }
}
