//! Authorization error types.

use thiserror::Error;

use crate::permission::types::{Action, Role};

/// Errors raised by the permission gate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PermissionError {
    /// The current role is not allowed to perform the action.
    #[error("Role {role} is not allowed to {action}")]
    Denied {
        /// The actor's effective role.
        role: Role,
        /// The denied action.
        action: Action,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denied_message_names_role_and_action() {
        let err = PermissionError::Denied {
            role: Role::Kades,
            action: Action::CreateDraft,
        };
        assert_eq!(err.to_string(), "Role kades is not allowed to createDraft");
    }
}
