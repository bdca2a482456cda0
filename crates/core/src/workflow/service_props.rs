//! Property-based tests for ApprovalService.
//!
//! These tests validate the state machine over randomized statuses
//! using proptest for input generation.

use proptest::prelude::*;

use crate::workflow::error::WorkflowError;
use crate::workflow::service::ApprovalService;
use crate::workflow::types::{DraftStatus, WorkflowAction};

/// Strategy for generating random DraftStatus values.
fn arb_status() -> impl Strategy<Value = DraftStatus> {
    prop_oneof![
        Just(DraftStatus::Draft),
        Just(DraftStatus::Pending),
        Just(DraftStatus::Approved),
        Just(DraftStatus::NeedsChanges),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Approve succeeds exactly when the draft awaits review, and the
    /// resulting action always carries the approval timestamp.
    #[test]
    fn prop_approve_matches_awaiting_review(status in arb_status()) {
        let result = ApprovalService::approve(status);
        if status.is_awaiting_review() {
            let action = result.unwrap();
            prop_assert_eq!(action.new_status(), DraftStatus::Approved);
            prop_assert!(
                matches!(action, WorkflowAction::Approve { .. }),
                "expected WorkflowAction::Approve, got {:?}",
                action
            );
        } else {
            prop_assert_eq!(
                result,
                Err(WorkflowError::InvalidTransition {
                    from: status,
                    to: DraftStatus::Approved,
                })
            );
        }
    }

    /// Request-changes succeeds exactly when the draft awaits review.
    #[test]
    fn prop_request_changes_matches_awaiting_review(status in arb_status()) {
        let result = ApprovalService::request_changes(status);
        if status.is_awaiting_review() {
            prop_assert_eq!(result.unwrap().new_status(), DraftStatus::NeedsChanges);
        } else {
            prop_assert!(result.is_err());
        }
    }

    /// A terminal status rejects every transition.
    #[test]
    fn prop_terminal_status_absorbs_everything(target in arb_status()) {
        prop_assert!(!ApprovalService::is_valid_transition(DraftStatus::Approved, target));
    }

    /// Every transition the service executes is also reported valid by
    /// the transition predicate.
    #[test]
    fn prop_executed_transitions_are_valid(status in arb_status()) {
        for result in [
            ApprovalService::submit(status),
            ApprovalService::approve(status),
            ApprovalService::request_changes(status),
        ] {
            if let Ok(action) = result {
                prop_assert!(ApprovalService::is_valid_transition(status, action.new_status()));
            }
        }
    }
}
