//! Workflow error types for the draft lifecycle.

use thiserror::Error;

use crate::workflow::types::DraftStatus;

/// Errors that can occur during workflow transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowError {
    /// Attempted an invalid status transition.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: DraftStatus,
        /// The attempted target status.
        to: DraftStatus,
    },
}
