//! Approval service for draft state transitions.
//!
//! This module implements the core state machine logic for moving
//! drafts through the single-level approval gate. The service validates
//! state legality only; role authorization is a separate guard handled
//! by the permission gate before any transition is attempted.

use chrono::Utc;

use crate::workflow::error::WorkflowError;
use crate::workflow::types::{DraftStatus, WorkflowAction};

/// Stateless service for managing draft workflow transitions.
///
/// All methods are associated functions that validate and execute
/// state transitions, returning the appropriate `WorkflowAction`
/// with the timestamp side effect the transition produces.
pub struct ApprovalService;

impl ApprovalService {
    /// Submit a draft for approval.
    ///
    /// This transition is only ever fired by an explicit caller action;
    /// nothing in the lifecycle enters `Pending` automatically.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::InvalidTransition` unless the draft is in
    /// `Draft` status.
    pub fn submit(current_status: DraftStatus) -> Result<WorkflowAction, WorkflowError> {
        match current_status {
            DraftStatus::Draft => Ok(WorkflowAction::Submit {
                new_status: DraftStatus::Pending,
                submitted_at: Utc::now(),
            }),
            _ => Err(WorkflowError::InvalidTransition {
                from: current_status,
                to: DraftStatus::Pending,
            }),
        }
    }

    /// Approve a draft awaiting review.
    ///
    /// Sets `approved_at` as a side effect; the resulting status is
    /// terminal.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::InvalidTransition` unless the draft is in
    /// `Draft` or `Pending` status. Approving an already approved draft
    /// is rejected, never silently re-applied.
    pub fn approve(current_status: DraftStatus) -> Result<WorkflowAction, WorkflowError> {
        match current_status {
            DraftStatus::Draft | DraftStatus::Pending => Ok(WorkflowAction::Approve {
                new_status: DraftStatus::Approved,
                approved_at: Utc::now(),
            }),
            _ => Err(WorkflowError::InvalidTransition {
                from: current_status,
                to: DraftStatus::Approved,
            }),
        }
    }

    /// Send a draft awaiting review back for changes.
    ///
    /// Does not alter `approved_at`.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::InvalidTransition` unless the draft is in
    /// `Draft` or `Pending` status.
    pub fn request_changes(current_status: DraftStatus) -> Result<WorkflowAction, WorkflowError> {
        match current_status {
            DraftStatus::Draft | DraftStatus::Pending => Ok(WorkflowAction::RequestChanges {
                new_status: DraftStatus::NeedsChanges,
                requested_at: Utc::now(),
            }),
            _ => Err(WorkflowError::InvalidTransition {
                from: current_status,
                to: DraftStatus::NeedsChanges,
            }),
        }
    }

    /// Check if a status transition is valid.
    ///
    /// Valid transitions:
    /// - Draft → Pending (submit)
    /// - Draft → Approved (approve)
    /// - Draft → NeedsChanges (request changes)
    /// - Pending → Approved (approve)
    /// - Pending → NeedsChanges (request changes)
    #[must_use]
    pub fn is_valid_transition(from: DraftStatus, to: DraftStatus) -> bool {
        matches!(
            (from, to),
            (
                DraftStatus::Draft,
                DraftStatus::Pending | DraftStatus::Approved | DraftStatus::NeedsChanges
            ) | (
                DraftStatus::Pending,
                DraftStatus::Approved | DraftStatus::NeedsChanges
            )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_from_draft() {
        let action = ApprovalService::submit(DraftStatus::Draft).unwrap();
        assert_eq!(action.new_status(), DraftStatus::Pending);
    }

    #[test]
    fn test_submit_from_non_draft_fails() {
        for status in [
            DraftStatus::Pending,
            DraftStatus::Approved,
            DraftStatus::NeedsChanges,
        ] {
            assert!(matches!(
                ApprovalService::submit(status),
                Err(WorkflowError::InvalidTransition { .. })
            ));
        }
    }

    #[test]
    fn test_approve_from_draft() {
        let action = ApprovalService::approve(DraftStatus::Draft).unwrap();
        assert_eq!(action.new_status(), DraftStatus::Approved);
        assert!(matches!(action, WorkflowAction::Approve { .. }));
    }

    #[test]
    fn test_approve_from_pending() {
        let action = ApprovalService::approve(DraftStatus::Pending).unwrap();
        assert_eq!(action.new_status(), DraftStatus::Approved);
    }

    #[test]
    fn test_approve_from_approved_fails() {
        assert_eq!(
            ApprovalService::approve(DraftStatus::Approved),
            Err(WorkflowError::InvalidTransition {
                from: DraftStatus::Approved,
                to: DraftStatus::Approved,
            })
        );
    }

    #[test]
    fn test_approve_from_needs_changes_fails() {
        assert!(matches!(
            ApprovalService::approve(DraftStatus::NeedsChanges),
            Err(WorkflowError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_request_changes_from_draft_and_pending() {
        for status in [DraftStatus::Draft, DraftStatus::Pending] {
            let action = ApprovalService::request_changes(status).unwrap();
            assert_eq!(action.new_status(), DraftStatus::NeedsChanges);
        }
    }

    #[test]
    fn test_request_changes_from_approved_fails() {
        assert!(matches!(
            ApprovalService::request_changes(DraftStatus::Approved),
            Err(WorkflowError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_is_valid_transition() {
        assert!(ApprovalService::is_valid_transition(
            DraftStatus::Draft,
            DraftStatus::Pending
        ));
        assert!(ApprovalService::is_valid_transition(
            DraftStatus::Pending,
            DraftStatus::Approved
        ));
        assert!(ApprovalService::is_valid_transition(
            DraftStatus::Draft,
            DraftStatus::NeedsChanges
        ));

        assert!(!ApprovalService::is_valid_transition(
            DraftStatus::Approved,
            DraftStatus::Draft
        ));
        assert!(!ApprovalService::is_valid_transition(
            DraftStatus::NeedsChanges,
            DraftStatus::Approved
        ));
        assert!(!ApprovalService::is_valid_transition(
            DraftStatus::Pending,
            DraftStatus::Draft
        ));
    }
}
