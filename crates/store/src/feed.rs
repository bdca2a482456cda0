//! Change feed boundary normalization.
//!
//! The external store delivers "whatever shape the backend returns":
//! timestamps as RFC 3339 strings or `{seconds, nanos}` objects, figures
//! as numbers or numeric strings, legacy documents with missing fields.
//! Everything is validated and normalized exactly once here, so the rest
//! of the core only ever sees well-typed values.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use apbd_core::draft::{BudgetItem, Draft, VersionEntry};
use apbd_core::workflow::DraftStatus;
use apbd_shared::{DraftId, VersionId};

/// Errors raised while normalizing a feed document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeedError {
    /// The document could not be deserialized at all.
    #[error("Malformed document: {0}")]
    Deserialize(String),

    /// The document carries no status field.
    #[error("Document {0} has no status")]
    MissingStatus(String),

    /// The document's status string is not a known lifecycle status.
    #[error("Document {id} has unknown status '{status}'")]
    UnknownStatus {
        /// The document identifier.
        id: String,
        /// The unrecognized status value.
        status: String,
    },

    /// The document has an empty version history.
    #[error("Document {0} has no versions")]
    NoVersions(String),

    /// A timestamp could not be interpreted.
    #[error("Document {id} has a bad timestamp: {value}")]
    BadTimestamp {
        /// The document identifier.
        id: String,
        /// The offending value.
        value: String,
    },
}

/// A backend timestamp: either an RFC 3339 string or a Firestore-style
/// seconds/nanos pair.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    /// ISO-8601 / RFC 3339 text.
    Text(String),
    /// Epoch seconds plus nanoseconds.
    Epoch {
        /// Seconds since the Unix epoch.
        seconds: i64,
        /// Nanosecond component.
        #[serde(default)]
        nanos: u32,
    },
}

impl RawTimestamp {
    fn to_utc(&self, doc_id: &str) -> Result<DateTime<Utc>, FeedError> {
        match self {
            Self::Text(s) => DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|_| FeedError::BadTimestamp {
                    id: doc_id.to_string(),
                    value: s.clone(),
                }),
            Self::Epoch { seconds, nanos } => DateTime::from_timestamp(*seconds, *nanos)
                .ok_or_else(|| FeedError::BadTimestamp {
                    id: doc_id.to_string(),
                    value: format!("{seconds}s {nanos}ns"),
                }),
        }
    }
}

/// A budget item as delivered by the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBudgetItem {
    /// Account code.
    #[serde(default)]
    pub code: String,
    /// Item name.
    #[serde(default)]
    pub name: String,
    /// Quantity; number or numeric string.
    #[serde(default, rename = "qty")]
    pub quantity: Decimal,
    /// Unit of measure.
    #[serde(default)]
    pub unit: String,
    /// Unit price; number or numeric string.
    #[serde(default, rename = "unitPrice")]
    pub unit_price: Decimal,
}

/// A version log entry as delivered by the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct RawVersionEntry {
    /// Version identifier; legacy documents may omit it.
    #[serde(default)]
    pub vid: Option<String>,
    /// Change summary.
    #[serde(default)]
    pub summary: String,
    /// Append timestamp.
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<RawTimestamp>,
    /// Author.
    #[serde(default, rename = "createdBy")]
    pub created_by: Option<String>,
    /// Line items.
    #[serde(default)]
    pub items: Vec<RawBudgetItem>,
}

/// A draft document as delivered by the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDraftDocument {
    /// Backend document identifier.
    pub id: String,
    /// Draft title.
    #[serde(default)]
    pub title: Option<String>,
    /// Author.
    #[serde(default, rename = "createdBy")]
    pub created_by: Option<String>,
    /// Creation timestamp.
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<RawTimestamp>,
    /// Lifecycle status string.
    #[serde(default)]
    pub status: Option<String>,
    /// Approval timestamp.
    #[serde(default, rename = "approvedAt")]
    pub approved_at: Option<RawTimestamp>,
    /// Last modification timestamp.
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<RawTimestamp>,
    /// Version history.
    #[serde(default)]
    pub versions: Vec<RawVersionEntry>,
}

/// Deserializes and normalizes one raw JSON document.
///
/// # Errors
///
/// Returns a `FeedError` when the document cannot be turned into a
/// well-typed draft. Callers skip (and log) such documents; one bad
/// document never poisons the whole delivery.
pub fn normalize_value(value: serde_json::Value) -> Result<Draft, FeedError> {
    let raw: RawDraftDocument =
        serde_json::from_value(value).map_err(|e| FeedError::Deserialize(e.to_string()))?;
    normalize(raw)
}

/// Normalizes a raw feed document into a well-typed draft record.
///
/// Missing timestamps fall back to the Unix epoch (legacy documents
/// predate server stamping); a missing `updatedAt` falls back to
/// `createdAt`. `approvedAt` is cleared unless the status is `Approved`,
/// restoring the iff invariant at the boundary.
///
/// # Errors
///
/// Returns a `FeedError` for a missing or unknown status, or an empty
/// version history.
pub fn normalize(raw: RawDraftDocument) -> Result<Draft, FeedError> {
    let doc_id = raw.id.clone();

    let status_str = raw
        .status
        .ok_or_else(|| FeedError::MissingStatus(doc_id.clone()))?;
    let status = DraftStatus::parse(&status_str).ok_or_else(|| FeedError::UnknownStatus {
        id: doc_id.clone(),
        status: status_str,
    })?;

    if raw.versions.is_empty() {
        return Err(FeedError::NoVersions(doc_id));
    }

    let created_at = normalize_timestamp(raw.created_at.as_ref(), &doc_id)?;
    let updated_at = match raw.updated_at.as_ref() {
        Some(ts) => ts.to_utc(&doc_id)?,
        None => created_at,
    };
    let approved_at = if status == DraftStatus::Approved {
        raw.approved_at
            .as_ref()
            .map(|ts| ts.to_utc(&doc_id))
            .transpose()?
    } else {
        None
    };

    let versions = raw
        .versions
        .into_iter()
        .enumerate()
        .map(|(index, v)| normalize_version(v, index, &doc_id))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Draft {
        id: DraftId::new(doc_id),
        title: non_empty_or(raw.title, "Untitled Draft"),
        created_by: non_empty_or(raw.created_by, "Unknown User"),
        created_at,
        status,
        approved_at,
        updated_at,
        versions,
    })
}

fn normalize_version(
    raw: RawVersionEntry,
    index: usize,
    doc_id: &str,
) -> Result<VersionEntry, FeedError> {
    // A missing vid gets a positional identifier so that re-delivering
    // the same snapshot projects to identical state.
    let id = match raw.vid {
        Some(vid) if !vid.is_empty() => VersionId::new(vid),
        _ => VersionId::new(format!("v{}", index + 1)),
    };

    Ok(VersionEntry {
        id,
        summary: raw.summary,
        created_at: normalize_timestamp(raw.created_at.as_ref(), doc_id)?,
        created_by: non_empty_or(raw.created_by, "Unknown User"),
        items: raw.items.into_iter().map(normalize_item).collect(),
    })
}

fn normalize_item(raw: RawBudgetItem) -> BudgetItem {
    BudgetItem {
        code: raw.code,
        name: raw.name,
        quantity: raw.quantity,
        unit: raw.unit,
        unit_price: raw.unit_price,
    }
}

fn normalize_timestamp(
    ts: Option<&RawTimestamp>,
    doc_id: &str,
) -> Result<DateTime<Utc>, FeedError> {
    ts.map_or(Ok(DateTime::UNIX_EPOCH), |ts| ts.to_utc(doc_id))
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s,
        _ => fallback.to_string(),
    }
}
