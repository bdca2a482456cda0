//! In-memory backend for tests and development.
//!
//! Behaves like the real document store: it assigns identifiers,
//! applies field-level patches, and publishes the full collection over
//! a watch channel after every change (the change feed contract,
//! including echoing a client's own just-issued write).

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::debug;

use apbd_core::draft::Draft;
use apbd_shared::DraftId;

use crate::ports::{DraftPatch, DraftWritePort, NewDraftDocument, TransportError};

/// A document store holding drafts in memory.
pub struct InMemoryBackend {
    docs: Mutex<Vec<Draft>>,
    next_id: AtomicU64,
    fail_writes: AtomicBool,
    feed: watch::Sender<Vec<Draft>>,
}

impl InMemoryBackend {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        let (feed, _) = watch::channel(Vec::new());
        Self {
            docs: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
            fail_writes: AtomicBool::new(false),
            feed,
        }
    }

    /// Subscribes to the change feed.
    ///
    /// Every write publishes the full current collection; the receiver
    /// also holds the latest delivery immediately.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Draft>> {
        self.feed.subscribe()
    }

    /// Makes subsequent writes fail with a transport error, for testing
    /// failure paths. Reset with `false`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Re-publishes the current collection unchanged, simulating a
    /// duplicate feed delivery.
    pub fn redeliver(&self) {
        let docs = self
            .docs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let _ = self.feed.send(docs);
    }

    fn check_available(&self) -> Result<(), TransportError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(TransportError::Backend(
                "backend unavailable (injected)".to_string(),
            ));
        }
        Ok(())
    }

    fn publish(&self, docs: Vec<Draft>) {
        debug!(count = docs.len(), "Publishing feed delivery");
        let _ = self.feed.send(docs);
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DraftWritePort for InMemoryBackend {
    async fn create(&self, draft: NewDraftDocument) -> Result<DraftId, TransportError> {
        self.check_available()?;

        let id = DraftId::new(format!("doc-{}", self.next_id.fetch_add(1, Ordering::SeqCst)));
        let snapshot = {
            let mut docs = self.docs.lock().unwrap_or_else(PoisonError::into_inner);
            docs.push(draft.into_draft(id.clone()));
            docs.clone()
        };
        self.publish(snapshot);
        Ok(id)
    }

    async fn update(&self, id: &DraftId, patch: DraftPatch) -> Result<(), TransportError> {
        self.check_available()?;

        let snapshot = {
            let mut docs = self.docs.lock().unwrap_or_else(PoisonError::into_inner);
            let doc = docs
                .iter_mut()
                .find(|d| &d.id == id)
                .ok_or_else(|| TransportError::Backend(format!("document {id} not found")))?;

            if let Some(status) = patch.status {
                doc.status = status;
            }
            if let Some(approved_at) = patch.approved_at {
                doc.approved_at = Some(approved_at);
            }
            if let Some(versions) = patch.versions {
                doc.versions = versions;
            }
            doc.updated_at = patch.updated_at;
            docs.clone()
        };
        self.publish(snapshot);
        Ok(())
    }
}
