//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate record store calls into list-level APIs.
//! - Keep the CLI decoupled from storage details.

pub mod list_manager;
