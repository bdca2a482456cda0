//! Write port contract to the external document store.
//!
//! The port exposes field-level partial updates: supplying `versions`
//! replaces the entire array. There is no array-append primitive at
//! this boundary, so an append always resends the full history.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use apbd_core::draft::{Draft, VersionEntry};
use apbd_core::workflow::DraftStatus;
use apbd_shared::DraftId;

/// A draft as handed to the write port on creation, before the backend
/// has assigned it an identifier.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDraftDocument {
    /// Draft title.
    pub title: String,
    /// Who created the draft.
    pub created_by: String,
    /// When the draft was created.
    pub created_at: DateTime<Utc>,
    /// Initial lifecycle status.
    pub status: DraftStatus,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
    /// Seeded version history (exactly one entry at creation).
    pub versions: Vec<VersionEntry>,
}

impl NewDraftDocument {
    /// Attaches the backend-assigned identifier, producing a full draft
    /// record.
    #[must_use]
    pub fn into_draft(self, id: DraftId) -> Draft {
        Draft {
            id,
            title: self.title,
            created_by: self.created_by,
            created_at: self.created_at,
            status: self.status,
            approved_at: None,
            updated_at: self.updated_at,
            versions: self.versions,
        }
    }
}

/// Field-level partial update for an existing draft document.
///
/// Unset fields are left untouched by the backend; `updated_at` is
/// always stamped.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPatch {
    /// New lifecycle status, if the mutation changes it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DraftStatus>,
    /// Approval timestamp; only ever set alongside `Approved`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
    /// Replacement version history, if the mutation appends a version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<VersionEntry>>,
    /// Stamped on every write.
    pub updated_at: DateTime<Utc>,
}

impl DraftPatch {
    /// An empty patch carrying only the update stamp.
    #[must_use]
    pub fn stamped(updated_at: DateTime<Utc>) -> Self {
        Self {
            status: None,
            approved_at: None,
            versions: None,
            updated_at,
        }
    }
}

/// Transport failures from the write port or change feed.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    /// The backend reported a failure.
    #[error("Backend error: {0}")]
    Backend(String),

    /// The write did not acknowledge within the configured timeout.
    #[error("Write timed out after {0:?}")]
    Timeout(std::time::Duration),
}

impl TransportError {
    /// Transport failures are retryable; the caller decides whether the
    /// mutation itself is safe to retry.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Backend(_) | Self::Timeout(_))
    }
}

/// Asynchronous write access to the external document store.
#[async_trait]
pub trait DraftWritePort: Send + Sync {
    /// Creates a new draft document and returns the assigned identifier.
    async fn create(&self, draft: NewDraftDocument) -> Result<DraftId, TransportError>;

    /// Applies a field-level partial update to an existing document.
    async fn update(&self, id: &DraftId, patch: DraftPatch) -> Result<(), TransportError>;
}

#[async_trait]
impl<T: DraftWritePort + ?Sized> DraftWritePort for std::sync::Arc<T> {
    async fn create(&self, draft: NewDraftDocument) -> Result<DraftId, TransportError> {
        (**self).create(draft).await
    }

    async fn update(&self, id: &DraftId, patch: DraftPatch) -> Result<(), TransportError> {
        (**self).update(id, patch).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_skips_unset_fields_on_the_wire() {
        let patch = DraftPatch::stamped(Utc::now());
        let json = serde_json::to_value(&patch).unwrap();
        assert!(json.get("status").is_none());
        assert!(json.get("approvedAt").is_none());
        assert!(json.get("versions").is_none());
        assert!(json.get("updatedAt").is_some());
    }

    #[test]
    fn test_new_document_into_draft_keeps_fields() {
        let now = Utc::now();
        let doc = NewDraftDocument {
            title: "Road Project".to_string(),
            created_by: "Kaur Keuangan".to_string(),
            created_at: now,
            status: DraftStatus::Draft,
            updated_at: now,
            versions: vec![],
        };
        let draft = doc.into_draft(DraftId::new("d1"));
        assert_eq!(draft.id.as_str(), "d1");
        assert_eq!(draft.title, "Road Project");
        assert_eq!(draft.status, DraftStatus::Draft);
        assert!(draft.approved_at.is_none());
    }

    #[test]
    fn test_transport_errors_are_retryable() {
        assert!(TransportError::Backend("down".into()).is_retryable());
        assert!(TransportError::Timeout(std::time::Duration::from_secs(10)).is_retryable());
    }
}
