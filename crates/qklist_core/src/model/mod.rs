//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the item record shared by the list manager and every store.
//!
//! # Invariants
//! - Items have no persistent key; identifiers are 1-based list positions.

pub mod item;
