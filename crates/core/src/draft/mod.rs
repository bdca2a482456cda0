//! Draft records, version log entries, and budget items.
//!
//! A draft is a budget planning document with one mutable lifecycle
//! status and an append-only history of versions. Each version is an
//! immutable snapshot of the draft's line items.
//!
//! # Modules
//!
//! - `types` - Domain types (`Draft`, `VersionEntry`, `BudgetItem`)
//! - `error` - Validation error types

pub mod error;
pub mod types;

pub use error::DraftError;
pub use types::{BudgetItem, Draft, VersionEntry, validate_items};
