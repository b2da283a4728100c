//! Task item domain model.
//!
//! # Responsibility
//! - Define the canonical record persisted by every record store.
//! - Normalize free-form description words into one display sentence.
//!
//! # Invariants
//! - Items built from words never have a blank description.
//! - Persisted items are read back as written, without re-validation.
//! - `description` ends with `.`; an existing trailing period is never doubled.
//! - Items carry no identity; their position in the list is the identifier.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Priority assigned when the caller does not provide one.
pub const DEFAULT_PRIORITY: i64 = 2;

/// Validation errors for item invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Description was empty after joining and trimming.
    EmptyDescription,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "item description must not be empty"),
        }
    }
}

impl Error for ItemValidationError {}

/// One task record.
///
/// Field names are capitalized on the wire to stay readable by existing list files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Priority", default = "default_priority")]
    pub priority: i64,
    #[serde(rename = "Done", default)]
    pub done: bool,
}

fn default_priority() -> i64 {
    DEFAULT_PRIORITY
}

impl Item {
    /// Builds a pending item from description words.
    ///
    /// # Invariants
    /// - Words are joined with single spaces and terminated with `.`.
    /// - `done` starts as `false`.
    ///
    /// # Errors
    /// - Returns `EmptyDescription` when the joined words are blank before
    ///   the period is appended.
    pub fn new<W: AsRef<str>>(words: &[W], priority: i64) -> Result<Self, ItemValidationError> {
        if words.iter().all(|word| word.as_ref().trim().is_empty()) {
            return Err(ItemValidationError::EmptyDescription);
        }
        Ok(Self {
            description: normalize_description(words),
            priority,
            done: false,
        })
    }

    /// Marks this item as completed. Calling it twice is a no-op.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

/// Joins description words and guarantees a single trailing period.
pub fn normalize_description<W: AsRef<str>>(words: &[W]) -> String {
    let mut text = words
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ");
    if !text.ends_with('.') {
        text.push('.');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::{normalize_description, Item, ItemValidationError, DEFAULT_PRIORITY};

    #[test]
    fn normalize_appends_period_once() {
        assert_eq!(normalize_description(&["Buy", "milk"]), "Buy milk.");
        assert_eq!(normalize_description(&["Buy", "milk."]), "Buy milk.");
    }

    #[test]
    fn normalize_keeps_inner_spacing_of_words() {
        assert_eq!(normalize_description(&["a  b", "c"]), "a  b c.");
    }

    #[test]
    fn new_rejects_blank_descriptions() {
        let empty: [&str; 0] = [];
        assert_eq!(
            Item::new(&empty, DEFAULT_PRIORITY).unwrap_err(),
            ItemValidationError::EmptyDescription
        );
        assert_eq!(
            Item::new(&[" ", "\t"], DEFAULT_PRIORITY).unwrap_err(),
            ItemValidationError::EmptyDescription
        );
    }

    #[test]
    fn new_accepts_punctuation_only_descriptions() {
        assert_eq!(Item::new(&["..."], DEFAULT_PRIORITY).unwrap().description, "...");
        assert_eq!(Item::new(&["."], DEFAULT_PRIORITY).unwrap().description, ".");
        assert_eq!(Item::new(&["?"], DEFAULT_PRIORITY).unwrap().description, "?.");
    }

    #[test]
    fn mark_done_is_idempotent() {
        let mut item = Item::new(&["Call", "Bob"], 1).unwrap();
        assert!(!item.is_done());
        item.mark_done();
        item.mark_done();
        assert!(item.is_done());
    }
}
