//! Roles and gated actions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Village office role of the current actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System administrator. Full access.
    Admin,
    /// Village secretary. Prepares and edits drafts.
    Secretary,
    /// Village head (kepala desa). Reviews and approves.
    Kades,
    /// Any other signed-in user. Read-only access.
    Other,
}

impl Role {
    /// Parses a role from a claim string, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "secretary" => Some(Self::Secretary),
            "kades" => Some(Self::Kades),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Maps an optional claim to a role.
    ///
    /// Unknown or absent claims become `Other`, the most restrictive
    /// role.
    #[must_use]
    pub fn from_claim(claim: Option<&str>) -> Self {
        claim.and_then(Self::parse).unwrap_or(Self::Other)
    }

    /// Returns the string representation of the role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Secretary => "secretary",
            Self::Kades => "kades",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Actions the permission gate answers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// Create a new draft.
    CreateDraft,
    /// Append a version to an existing draft.
    EditDraft,
    /// Submit a draft for approval.
    SubmitDraft,
    /// Approve a draft awaiting review.
    ApproveDraft,
    /// Send a draft back for changes.
    RequestChanges,
    /// Delete a draft. Gate surface only; deletion itself is an
    /// external-collaborator operation.
    DeleteDraft,
    /// View a draft.
    ViewDraft,
    /// Audit a draft's version history (read-only).
    AuditDraft,
}

impl Action {
    /// All gated actions, for exhaustive enumeration.
    pub const ALL: [Self; 8] = [
        Self::CreateDraft,
        Self::EditDraft,
        Self::SubmitDraft,
        Self::ApproveDraft,
        Self::RequestChanges,
        Self::DeleteDraft,
        Self::ViewDraft,
        Self::AuditDraft,
    ];

    /// Returns the string representation of the action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateDraft => "createDraft",
            Self::EditDraft => "editDraft",
            Self::SubmitDraft => "submitDraft",
            Self::ApproveDraft => "approveDraft",
            Self::RequestChanges => "requestChanges",
            Self::DeleteDraft => "deleteDraft",
            Self::ViewDraft => "viewDraft",
            Self::AuditDraft => "auditDraft",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("SECRETARY"), Some(Role::Secretary));
        assert_eq!(Role::parse("Kades"), Some(Role::Kades));
        assert_eq!(Role::parse("other"), Some(Role::Other));
        assert_eq!(Role::parse("bendahara"), None);
    }

    #[test]
    fn test_unknown_claim_falls_back_to_other() {
        assert_eq!(Role::from_claim(None), Role::Other);
        assert_eq!(Role::from_claim(Some("")), Role::Other);
        assert_eq!(Role::from_claim(Some("superuser")), Role::Other);
        assert_eq!(Role::from_claim(Some("kades")), Role::Kades);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Kades.to_string(), "kades");
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::CreateDraft.to_string(), "createDraft");
        assert_eq!(Action::RequestChanges.to_string(), "requestChanges");
    }
}
