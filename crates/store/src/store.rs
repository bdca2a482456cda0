//! The draft store projection and its mutation operations.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;
use tracing::{debug, info, warn};

use apbd_core::draft::{self, BudgetItem, Draft, VersionEntry};
use apbd_core::permission::{self, Action, Role};
use apbd_core::workflow::{ApprovalService, WorkflowAction};
use apbd_shared::{Actor, DraftId, StoreConfig, VersionId};

use crate::error::StoreError;
use crate::ports::{DraftPatch, DraftWritePort, NewDraftDocument, TransportError};

/// The in-memory projection of all draft records.
///
/// The store exclusively owns the canonical draft collection. Every
/// change-feed delivery replaces it wholesale; mutations only touch the
/// external store through the write port and become visible when the
/// feed echoes them back. A failed write therefore never corrupts the
/// last-known-good projection.
pub struct DraftStore<P> {
    port: P,
    config: StoreConfig,
    projection: RwLock<Arc<Vec<Draft>>>,
}

impl<P: DraftWritePort> DraftStore<P> {
    /// Creates a store over a write port.
    pub fn new(port: P, config: StoreConfig) -> Self {
        Self {
            port,
            config,
            projection: RwLock::new(Arc::new(Vec::new())),
        }
    }

    // ------------------------------------------------------------------
    // Projection
    // ------------------------------------------------------------------

    /// Replaces the entire projected collection atomically.
    ///
    /// Called on every feed delivery, including re-deliveries of a
    /// client's own just-issued write. No partial merge: the delivery is
    /// authoritative, which also makes re-delivering the same snapshot a
    /// no-op for observers.
    pub fn apply_snapshot(&self, mut drafts: Vec<Draft>) {
        if self.config.newest_first {
            drafts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        debug!(count = drafts.len(), "Projected change feed delivery");
        let mut guard = self
            .projection
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(drafts);
    }

    /// Returns the current read-only snapshot of all drafts.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<Draft>> {
        Arc::clone(
            &self
                .projection
                .read()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }

    /// Looks up a single draft in the current snapshot.
    #[must_use]
    pub fn find(&self, id: &DraftId) -> Option<Draft> {
        self.snapshot().iter().find(|d| &d.id == id).cloned()
    }

    /// Returns the drafts sitting in the approval queue.
    #[must_use]
    pub fn awaiting_review(&self) -> Vec<Draft> {
        self.snapshot()
            .iter()
            .filter(|d| d.status.is_awaiting_review())
            .cloned()
            .collect()
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Creates a new draft with a seeded first version.
    ///
    /// An empty title becomes `"Untitled Draft"`. The returned record
    /// carries the backend-assigned identifier but is not yet part of
    /// the snapshot; the feed echo is authoritative.
    ///
    /// # Errors
    ///
    /// `StoreError::Forbidden` when the role may not create drafts,
    /// `StoreError::Validation` for malformed items,
    /// `StoreError::Transport` when the external write fails.
    pub async fn create_draft(
        &self,
        actor: &Actor,
        title: Option<String>,
        items: Vec<BudgetItem>,
    ) -> Result<Draft, StoreError> {
        permission::check(self.role_of(actor), Action::CreateDraft)?;
        draft::validate_items(&items)?;

        let now = Utc::now();
        let author = actor.stamp();
        let doc = NewDraftDocument {
            title: title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| "Untitled Draft".to_string()),
            created_by: author.clone(),
            created_at: now,
            status: apbd_core::workflow::DraftStatus::Draft,
            updated_at: now,
            versions: vec![VersionEntry {
                id: VersionId::generate(),
                summary: "Initial".to_string(),
                created_at: now,
                created_by: author,
                items,
            }],
        };

        let id = self.write(self.port.create(doc.clone())).await?;
        info!(draft_id = %id, title = %doc.title, "Draft created");
        Ok(doc.into_draft(id))
    }

    /// Submits a draft for approval (`Draft` → `Pending`).
    ///
    /// This is the only way a draft enters `Pending`; nothing fires it
    /// automatically.
    ///
    /// # Errors
    ///
    /// `StoreError::Forbidden`, `StoreError::NotFound`,
    /// `StoreError::Transition`, or `StoreError::Transport`.
    pub async fn submit_for_review(&self, actor: &Actor, id: &DraftId) -> Result<(), StoreError> {
        permission::check(self.role_of(actor), Action::SubmitDraft)?;
        let draft = self.get(id)?;
        let action = ApprovalService::submit(draft.status)?;
        self.apply_transition(id, action).await
    }

    /// Approves a draft awaiting review and stamps `approved_at`.
    ///
    /// # Errors
    ///
    /// `StoreError::Forbidden`, `StoreError::NotFound`,
    /// `StoreError::Transition` (including approving an already approved
    /// draft), or `StoreError::Transport`.
    pub async fn approve_draft(&self, actor: &Actor, id: &DraftId) -> Result<(), StoreError> {
        permission::check(self.role_of(actor), Action::ApproveDraft)?;
        let draft = self.get(id)?;
        let action = ApprovalService::approve(draft.status)?;
        self.apply_transition(id, action).await
    }

    /// Sends a draft awaiting review back for changes.
    ///
    /// # Errors
    ///
    /// `StoreError::Forbidden`, `StoreError::NotFound`,
    /// `StoreError::Transition`, or `StoreError::Transport`.
    pub async fn request_changes(&self, actor: &Actor, id: &DraftId) -> Result<(), StoreError> {
        permission::check(self.role_of(actor), Action::RequestChanges)?;
        let draft = self.get(id)?;
        let action = ApprovalService::request_changes(draft.status)?;
        self.apply_transition(id, action).await
    }

    /// Appends a version to a draft's history.
    ///
    /// Legal in any status and never changes the status. An empty
    /// summary becomes `"Perubahan"`. The write resends the full
    /// versions array; concurrent appends race last-write-wins unless
    /// the caller passes `expected_versions`, in which case a mismatch
    /// with the current projection is rejected before the write.
    ///
    /// `version_id` is the idempotency key: a caller retrying a failed
    /// append passes the same id, and if that version already landed the
    /// existing entry is returned without a second write. When `None`, a
    /// fresh id is minted and the append is not retry-safe.
    ///
    /// # Errors
    ///
    /// `StoreError::Forbidden`, `StoreError::Validation`,
    /// `StoreError::NotFound`, `StoreError::VersionConflict`, or
    /// `StoreError::Transport`.
    pub async fn add_version(
        &self,
        actor: &Actor,
        id: &DraftId,
        summary: &str,
        items: Vec<BudgetItem>,
        version_id: Option<VersionId>,
        expected_versions: Option<usize>,
    ) -> Result<VersionEntry, StoreError> {
        permission::check(self.role_of(actor), Action::EditDraft)?;
        draft::validate_items(&items)?;
        let draft = self.get(id)?;

        // A replay whose version already landed is answered from the
        // projection; nothing is written twice.
        if let Some(vid) = &version_id {
            if let Some(existing) = draft.find_version(vid) {
                debug!(draft_id = %id, version_id = %vid, "Append replayed; version already present");
                return Ok(existing.clone());
            }
        }

        if let Some(expected) = expected_versions {
            let actual = draft.version_count();
            if expected != actual {
                warn!(draft_id = %id, expected, actual, "Version conflict detected");
                return Err(StoreError::VersionConflict { expected, actual });
            }
        }

        let now = Utc::now();
        let version = VersionEntry {
            id: version_id.unwrap_or_else(VersionId::generate),
            summary: if summary.trim().is_empty() {
                "Perubahan".to_string()
            } else {
                summary.to_string()
            },
            created_at: now,
            created_by: actor.stamp(),
            items,
        };

        let mut versions = draft.versions;
        versions.push(version.clone());

        let patch = DraftPatch {
            versions: Some(versions),
            ..DraftPatch::stamped(now)
        };
        self.write(self.port.update(id, patch)).await?;
        info!(draft_id = %id, version_id = %version.id, "Version appended");
        Ok(version)
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn role_of(&self, actor: &Actor) -> Role {
        Role::from_claim(actor.role_claim())
    }

    fn get(&self, id: &DraftId) -> Result<Draft, StoreError> {
        self.find(id).ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    async fn apply_transition(&self, id: &DraftId, action: WorkflowAction) -> Result<(), StoreError> {
        let patch = match action {
            WorkflowAction::Submit {
                new_status,
                submitted_at,
            } => DraftPatch {
                status: Some(new_status),
                ..DraftPatch::stamped(submitted_at)
            },
            WorkflowAction::Approve {
                new_status,
                approved_at,
            } => DraftPatch {
                status: Some(new_status),
                approved_at: Some(approved_at),
                ..DraftPatch::stamped(approved_at)
            },
            WorkflowAction::RequestChanges {
                new_status,
                requested_at,
            } => DraftPatch {
                status: Some(new_status),
                ..DraftPatch::stamped(requested_at)
            },
        };

        let status = patch.status;
        self.write(self.port.update(id, patch)).await?;
        info!(draft_id = %id, new_status = ?status, "Status transition written");
        Ok(())
    }

    /// Runs an external write under the configured timeout.
    async fn write<T>(
        &self,
        fut: impl std::future::Future<Output = Result<T, TransportError>>,
    ) -> Result<T, StoreError> {
        let timeout = self.config.write_timeout();
        match tokio::time::timeout(timeout, fut).await {
            Ok(result) => result.map_err(StoreError::from),
            Err(_) => {
                warn!(?timeout, "External write timed out");
                Err(StoreError::Transport(TransportError::Timeout(timeout)))
            }
        }
    }
}
