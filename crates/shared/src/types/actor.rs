//! Actor identity supplied by the sign-in layer.
//!
//! The core treats this as read-only input: it feeds the permission gate
//! and the `created_by` / `created_at` stamping on mutations. How the
//! identity is authenticated is outside this crate's scope.

use serde::{Deserialize, Serialize};

/// The current actor as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Display name, if the provider has one.
    pub display_name: Option<String>,
    /// Email address, if the provider has one.
    pub email: Option<String>,
    /// Raw role claim. Unknown or absent roles fall back to the most
    /// restrictive role at the permission gate.
    pub role: Option<String>,
}

impl Actor {
    /// Creates an actor with a display name and role.
    #[must_use]
    pub fn new(display_name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            email: None,
            role: Some(role.into()),
        }
    }

    /// Returns the string used for `created_by` stamping.
    ///
    /// Falls back from display name to email to a fixed placeholder,
    /// matching what the document store already contains.
    #[must_use]
    pub fn stamp(&self) -> String {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Unknown User")
            .to_string()
    }

    /// Returns the role claim as a string slice, if present.
    #[must_use]
    pub fn role_claim(&self) -> Option<&str> {
        self.role.as_deref()
    }
}
