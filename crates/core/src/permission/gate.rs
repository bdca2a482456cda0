//! The permission rule table and check helpers.

use crate::permission::error::PermissionError;
use crate::permission::types::{Action, Role};

impl Role {
    /// Returns true if this role may perform the given action.
    ///
    /// Rule table:
    ///
    /// | action | admin | secretary | kades | other |
    /// |---|---|---|---|---|
    /// | create / edit / submit / delete | ✓ | ✓ | ✗ | ✗ |
    /// | approve / request changes | ✓ | ✓ | ✓ | ✗ |
    /// | view / audit | ✓ | ✓ | ✓ | ✓ |
    #[must_use]
    pub fn allows(&self, action: Action) -> bool {
        match action {
            Action::CreateDraft
            | Action::EditDraft
            | Action::SubmitDraft
            | Action::DeleteDraft => matches!(self, Self::Admin | Self::Secretary),
            Action::ApproveDraft | Action::RequestChanges => {
                matches!(self, Self::Admin | Self::Secretary | Self::Kades)
            }
            Action::ViewDraft | Action::AuditDraft => true,
        }
    }
}

/// Checks the gate, turning a denial into a typed authorization error.
///
/// # Errors
///
/// Returns `PermissionError::Denied` when the role may not perform the
/// action.
pub fn check(role: Role, action: Action) -> Result<(), PermissionError> {
    if role.allows(action) {
        Ok(())
    } else {
        Err(PermissionError::Denied { role, action })
    }
}
