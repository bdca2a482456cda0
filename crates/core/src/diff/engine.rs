//! The version diff algorithm.

use std::collections::BTreeMap;

use crate::diff::types::DiffRow;
use crate::draft::types::{BudgetItem, VersionEntry};

/// Compares two versions item-by-item, keyed by natural key.
///
/// Emits one row per key in the union of both sides, sorted ascending
/// by key. The sort order is a documented contract; callers may rely on
/// it for reproducible output.
///
/// The two entries are expected to belong to the same draft, but this
/// is not validated: comparing versions of different drafts is
/// permitted and meaningless. A duplicate natural key within one side
/// collapses to the last occurrence.
#[must_use]
pub fn diff_versions(left: &VersionEntry, right: &VersionEntry) -> Vec<DiffRow> {
    let left_map = key_map(&left.items);
    let mut right_map = key_map(&right.items);

    let mut rows: Vec<DiffRow> = left_map
        .into_iter()
        .map(|(key, item)| {
            let right_item = right_map.remove(key);
            DiffRow {
                key: key.to_string(),
                left: Some(item.clone()),
                right: right_item.cloned(),
            }
        })
        .collect();

    // Keys only present on the right.
    rows.extend(right_map.into_iter().map(|(key, item)| DiffRow {
        key: key.to_string(),
        left: None,
        right: Some(item.clone()),
    }));

    rows.sort_by(|a, b| a.key.cmp(&b.key));
    rows
}

fn key_map(items: &[BudgetItem]) -> BTreeMap<&str, &BudgetItem> {
    items.iter().map(|it| (it.natural_key(), it)).collect()
}
