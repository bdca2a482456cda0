//! Store error types.
//!
//! Every failure class of a mutation surfaces here as a typed variant.
//! A failed write never corrupts the last-known-good projection.

use thiserror::Error;

use apbd_core::draft::DraftError;
use apbd_core::permission::PermissionError;
use apbd_core::workflow::WorkflowError;
use apbd_shared::DraftId;

use crate::ports::TransportError;

/// Errors that can occur during draft store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The permission gate denied the action for the current role.
    #[error(transparent)]
    Forbidden(#[from] PermissionError),

    /// The state machine rejected the transition.
    #[error(transparent)]
    Transition(#[from] WorkflowError),

    /// Item data failed validation; nothing was sent to the write port.
    #[error(transparent)]
    Validation(#[from] DraftError),

    /// The target draft is absent from the current projection.
    #[error("Draft {0} not found")]
    NotFound(DraftId),

    /// The optimistic-concurrency token did not match the projection.
    #[error("Version conflict: expected {expected} versions, found {actual}")]
    VersionConflict {
        /// The caller's expected version count.
        expected: usize,
        /// The version count in the current projection.
        actual: usize,
    },

    /// The write port or change feed failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl StoreError {
    /// Returns true if retrying the same call can reasonably succeed.
    ///
    /// Only transport failures are retryable. A retried `add_version`
    /// must pass the same `version_id` it used the first time; the store
    /// then recognizes an already-landed append and does not duplicate
    /// it. Without that key, only the `expected_versions` token guards
    /// against a double append.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_retryable(),
            _ => false,
        }
    }
}
