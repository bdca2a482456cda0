//! Draft approval workflow.
//!
//! This module implements the draft lifecycle state machine for the
//! single-level approval gate.
//!
//! # Modules
//!
//! - `types` - Workflow domain types (`DraftStatus`, `WorkflowAction`)
//! - `error` - Workflow-specific error types
//! - `service` - State transition logic

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::WorkflowError;
pub use service::ApprovalService;
pub use types::{DraftStatus, WorkflowAction};
