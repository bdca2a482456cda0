//! Property-based tests for the diff engine.

use std::collections::BTreeSet;

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;

use apbd_shared::VersionId;

use crate::diff::engine::diff_versions;
use crate::draft::types::{BudgetItem, VersionEntry};

fn arb_item() -> impl Strategy<Value = BudgetItem> {
    (
        "[A-E]?",
        "[a-z]{1,6}",
        0u64..1000,
        0u64..100_000,
    )
        .prop_map(|(code, name, qty, price)| BudgetItem {
            code,
            name,
            quantity: Decimal::from(qty),
            unit: String::new(),
            unit_price: Decimal::from(price),
        })
}

fn arb_version() -> impl Strategy<Value = VersionEntry> {
    proptest::collection::vec(arb_item(), 0..8).prop_map(|items| VersionEntry {
        id: VersionId::generate(),
        summary: "generated".to_string(),
        created_at: Utc::now(),
        created_by: "proptest".to_string(),
        items,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Diffing a version against itself never yields a nonzero delta.
    #[test]
    fn prop_self_diff_is_all_zero(v in arb_version()) {
        for row in diff_versions(&v, &v) {
            prop_assert_eq!(row.delta(), Decimal::ZERO);
            prop_assert!(row.is_unchanged());
        }
    }

    /// The row count equals the size of the key union, and every key
    /// appears exactly once, in ascending order.
    #[test]
    fn prop_rows_cover_key_union_once(left in arb_version(), right in arb_version()) {
        let union: BTreeSet<String> = left
            .items
            .iter()
            .chain(right.items.iter())
            .map(|it| it.natural_key().to_string())
            .collect();

        let rows = diff_versions(&left, &right);
        prop_assert_eq!(rows.len(), union.len());

        let keys: Vec<&String> = rows.iter().map(|r| &r.key).collect();
        let expected: Vec<&String> = union.iter().collect();
        prop_assert_eq!(keys, expected);
    }

    /// Swapping the sides negates every delta.
    #[test]
    fn prop_diff_is_antisymmetric(left in arb_version(), right in arb_version()) {
        let forward = diff_versions(&left, &right);
        let backward = diff_versions(&right, &left);
        prop_assert_eq!(forward.len(), backward.len());
        for (f, b) in forward.iter().zip(backward.iter()) {
            prop_assert_eq!(&f.key, &b.key);
            prop_assert_eq!(f.delta(), -b.delta());
        }
    }
}
