//! Change feed to store glue.
//!
//! The subscription is long-lived: each delivery replaces the store's
//! entire projection. Raw backend documents are normalized here, at the
//! boundary, before the store ever sees them.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use apbd_core::draft::Draft;

use crate::feed;
use crate::ports::DraftWritePort;
use crate::store::DraftStore;

/// Projects every feed delivery into the store until the feed closes.
///
/// The receiver's current value is projected immediately, so a store
/// attached to an already-populated backend starts consistent.
pub async fn run_projector<P: DraftWritePort>(
    store: Arc<DraftStore<P>>,
    mut feed: watch::Receiver<Vec<Draft>>,
) {
    store.apply_snapshot(feed.borrow_and_update().clone());

    while feed.changed().await.is_ok() {
        let delivery = feed.borrow_and_update().clone();
        store.apply_snapshot(delivery);
    }
    info!("Change feed closed; projector stopping");
}

/// Normalizes one raw delivery and projects it into the store.
///
/// Documents that fail normalization are logged and skipped; one bad
/// document never drops the whole delivery.
pub fn project_raw<P: DraftWritePort>(store: &DraftStore<P>, documents: Vec<serde_json::Value>) {
    let drafts: Vec<Draft> = documents
        .into_iter()
        .filter_map(|doc| match feed::normalize_value(doc) {
            Ok(draft) => Some(draft),
            Err(err) => {
                warn!(error = %err, "Skipping malformed feed document");
                None
            }
        })
        .collect();
    store.apply_snapshot(drafts);
}

#[cfg(test)]
mod tests {
    use super::*;
    use apbd_shared::StoreConfig;
    use serde_json::json;

    use crate::memory::InMemoryBackend;

    #[test]
    fn test_project_raw_skips_malformed_documents() {
        let store = DraftStore::new(InMemoryBackend::new(), StoreConfig::default());

        project_raw(
            &store,
            vec![
                json!({
                    "id": "good",
                    "title": "Good",
                    "status": "Draft",
                    "createdAt": "2025-10-01T09:00:00Z",
                    "versions": [{ "vid": "v1", "items": [] }]
                }),
                json!({ "id": "bad", "status": "Archived", "versions": [{}] }),
                json!("not even an object"),
            ],
        );

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id.as_str(), "good");
    }
}
