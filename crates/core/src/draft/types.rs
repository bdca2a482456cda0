//! Draft domain types.
//!
//! Serde renames follow the field names the external document store
//! already contains (`qty`, `unitPrice`, `vid`, camelCase timestamps),
//! so a projected document round-trips unchanged.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use apbd_shared::{DraftId, VersionId};

use crate::draft::error::DraftError;
use crate::workflow::DraftStatus;

/// A single budget line entry.
///
/// Pure value type; `subtotal` is derived and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Account code. May be empty; the item name is the key then.
    #[serde(default)]
    pub code: String,
    /// Item name. Non-empty for a saved item.
    pub name: String,
    /// Quantity, zero or more.
    #[serde(rename = "qty")]
    pub quantity: Decimal,
    /// Unit of measure (e.g., "m3", "hari").
    #[serde(default)]
    pub unit: String,
    /// Price per unit, zero or more.
    #[serde(rename = "unitPrice")]
    pub unit_price: Decimal,
}

impl BudgetItem {
    /// Computes the line subtotal (`quantity * unit_price`).
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.quantity * self.unit_price
    }

    /// Returns the natural key used for version comparison.
    ///
    /// The code when non-empty, else the name. The key must be unique
    /// within one version's item list; a duplicate silently collapses
    /// entries under diffing.
    #[must_use]
    pub fn natural_key(&self) -> &str {
        if self.code.is_empty() {
            &self.name
        } else {
            &self.code
        }
    }

    /// Validates a single item.
    ///
    /// # Errors
    ///
    /// Returns `DraftError::ItemNameRequired` for a blank name,
    /// `DraftError::NegativeQuantity` or `DraftError::NegativeUnitPrice`
    /// for figures below zero.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::ItemNameRequired);
        }
        if self.quantity < Decimal::ZERO {
            return Err(DraftError::NegativeQuantity {
                name: self.name.clone(),
            });
        }
        if self.unit_price < Decimal::ZERO {
            return Err(DraftError::NegativeUnitPrice {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// Validates a full item list before it is issued to the write port.
///
/// # Errors
///
/// Returns the first item validation failure encountered.
pub fn validate_items(items: &[BudgetItem]) -> Result<(), DraftError> {
    items.iter().try_for_each(BudgetItem::validate)
}

/// An immutable snapshot of a draft's items plus provenance metadata.
///
/// Existing entries are never edited or removed, only new ones appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionEntry {
    /// Client-generated version identifier.
    #[serde(rename = "vid")]
    pub id: VersionId,
    /// Free-text summary of what changed.
    pub summary: String,
    /// When the version was appended.
    pub created_at: DateTime<Utc>,
    /// Who appended the version.
    pub created_by: String,
    /// Ordered line items at this point in time.
    pub items: Vec<BudgetItem>,
}

impl VersionEntry {
    /// Sums all item subtotals.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(BudgetItem::subtotal).sum()
    }
}

/// A budget planning document with an append-only version history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    /// Backend-assigned document identifier.
    pub id: DraftId,
    /// Draft title.
    pub title: String,
    /// Who created the draft.
    pub created_by: String,
    /// When the draft was created.
    pub created_at: DateTime<Utc>,
    /// Current lifecycle status.
    pub status: DraftStatus,
    /// Set if and only if the status is `Approved`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
    /// Last modification timestamp, stamped by the store on every write.
    pub updated_at: DateTime<Utc>,
    /// Append-only version history. Never empty: creation seeds version 1.
    pub versions: Vec<VersionEntry>,
}

impl Draft {
    /// Returns the current (latest) version.
    ///
    /// # Errors
    ///
    /// Returns `DraftError::NoVersions` if the history is empty, which a
    /// well-formed draft never is.
    pub fn latest_version(&self) -> Result<&VersionEntry, DraftError> {
        self.versions.last().ok_or(DraftError::NoVersions)
    }

    /// Returns the number of versions in the history.
    #[must_use]
    pub fn version_count(&self) -> usize {
        self.versions.len()
    }

    /// Looks up a version by its identifier.
    #[must_use]
    pub fn find_version(&self, id: &VersionId) -> Option<&VersionEntry> {
        self.versions.iter().find(|v| &v.id == id)
    }
}
