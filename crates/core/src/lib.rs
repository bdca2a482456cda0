//! Core business logic for the APBD draft lifecycle.
//!
//! This crate contains pure business logic with ZERO I/O dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `draft` - Draft records, version log entries, and budget items
//! - `workflow` - Draft approval state machine
//! - `permission` - Role-based permission gate
//! - `diff` - Structural comparison between two versions

pub mod diff;
pub mod draft;
pub mod permission;
pub mod workflow;
