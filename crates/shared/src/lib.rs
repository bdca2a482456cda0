//! Shared types and configuration for the APBD draft lifecycle core.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Actor identity supplied by the sign-in layer
//! - Application configuration management

pub mod config;
pub mod types;

pub use config::{AppConfig, StoreConfig};
pub use types::{Actor, DraftId, VersionId};
