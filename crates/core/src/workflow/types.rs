//! Workflow domain types for the draft lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Draft status in the approval workflow.
///
/// The valid transitions are:
/// - Draft → Pending (submit for review)
/// - Draft → Approved (approve)
/// - Draft → NeedsChanges (request changes)
/// - Pending → Approved (approve)
/// - Pending → NeedsChanges (request changes)
///
/// `Approved` is terminal: there is no unapprove transition. Appending a
/// version is legal in any status and never changes the status.
///
/// Serde values match the strings the external document store holds
/// (`"Draft"`, `"Pending"`, `"Approved"`, `"Needs Changes"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftStatus {
    /// Draft is being edited and has not been submitted.
    Draft,
    /// Draft has been submitted for approval.
    Pending,
    /// Draft has been approved (terminal).
    Approved,
    /// A reviewer has asked for changes.
    #[serde(rename = "Needs Changes")]
    NeedsChanges,
}

impl DraftStatus {
    /// Returns the wire string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::NeedsChanges => "Needs Changes",
        }
    }

    /// Parses a status from a string, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "needs changes" | "needs_changes" => Some(Self::NeedsChanges),
            _ => None,
        }
    }

    /// Returns true if the draft sits in the approval queue.
    #[must_use]
    pub fn is_awaiting_review(&self) -> bool {
        matches!(self, Self::Draft | Self::Pending)
    }

    /// Returns true if no further status transition is possible.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl fmt::Display for DraftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Workflow action representing a validated state transition.
///
/// Each variant captures the resulting status plus the timestamp side
/// effect the transition produces, ready to be turned into a write-port
/// patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowAction {
    /// Submit a draft for approval.
    Submit {
        /// The new status after submission (`Pending`).
        new_status: DraftStatus,
        /// When the draft was submitted.
        submitted_at: DateTime<Utc>,
    },
    /// Approve a draft.
    Approve {
        /// The new status after approval (`Approved`).
        new_status: DraftStatus,
        /// When the draft was approved. Stamped onto `approved_at`.
        approved_at: DateTime<Utc>,
    },
    /// Send a draft back for changes.
    RequestChanges {
        /// The new status (`NeedsChanges`). `approved_at` is untouched.
        new_status: DraftStatus,
        /// When the changes were requested.
        requested_at: DateTime<Utc>,
    },
}

impl WorkflowAction {
    /// Returns the new status resulting from this action.
    #[must_use]
    pub fn new_status(&self) -> DraftStatus {
        match self {
            Self::Submit { new_status, .. }
            | Self::Approve { new_status, .. }
            | Self::RequestChanges { new_status, .. } => *new_status,
        }
    }
}
