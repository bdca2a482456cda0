//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `VersionId` where a
//! `DraftId` is expected. Both are opaque strings on the wire: draft IDs
//! are assigned by the external document store, version IDs are
//! generated client-side when a version is appended.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a draft document.
///
/// Assigned by the external document store on creation. The core never
/// synthesizes one of these; it only carries them around.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftId(pub String);

impl DraftId {
    /// Creates an ID from an existing backend identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DraftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DraftId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DraftId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Unique identifier for a version log entry.
///
/// Generated client-side when a version is appended. A caller that
/// retries a failed append passes the same id again, so the store can
/// recognize an already-landed version (idempotency key). Legacy
/// documents carry short non-UUID values; the type stays an opaque
/// string to round-trip them unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionId(pub String);

impl VersionId {
    /// Generates a new random version ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Creates an ID from an existing value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VersionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VersionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for VersionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_id_display() {
        let id = DraftId::new("d1");
        assert_eq!(id.to_string(), "d1");
        assert_eq!(id.as_str(), "d1");
    }

    #[test]
    fn test_draft_id_serde_transparent() {
        let id = DraftId::new("abc123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc123\"");
        let back: DraftId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_version_id_generate_is_unique() {
        assert_ne!(VersionId::generate(), VersionId::generate());
    }

    #[test]
    fn test_version_id_round_trips_legacy_values() {
        let id = VersionId::new("v1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"v1\"");
        assert_eq!(serde_json::from_str::<VersionId>(&json).unwrap(), id);
    }
}
