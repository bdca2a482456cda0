//! Structural comparison between two versions of a draft.
//!
//! Given two version log entries, the engine aligns their item lists by
//! natural key and emits one comparison row per key in the union. Pure
//! and synchronous; safe to call from anywhere.
//!
//! # Modules
//!
//! - `types` - Comparison row type
//! - `engine` - The diff algorithm

pub mod engine;
pub mod types;

#[cfg(test)]
mod engine_props;

pub use engine::diff_versions;
pub use types::DiffRow;
