//! Comparison row types for version diffing.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::draft::types::BudgetItem;

/// One natural-key-aligned comparison unit between two versions.
///
/// A side is `None` when the key only exists in the other version; its
/// subtotal then counts as zero, so added and removed items appear as
/// full-magnitude differences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffRow {
    /// The natural key (item code, or name if the code is empty).
    pub key: String,
    /// The item as it appears in the left version, if present.
    pub left: Option<BudgetItem>,
    /// The item as it appears in the right version, if present.
    pub right: Option<BudgetItem>,
}

impl DiffRow {
    /// Subtotal on the left side; zero when absent.
    #[must_use]
    pub fn left_subtotal(&self) -> Decimal {
        self.left.as_ref().map_or(Decimal::ZERO, BudgetItem::subtotal)
    }

    /// Subtotal on the right side; zero when absent.
    #[must_use]
    pub fn right_subtotal(&self) -> Decimal {
        self.right
            .as_ref()
            .map_or(Decimal::ZERO, BudgetItem::subtotal)
    }

    /// Numeric comparison for presentation: `right - left`.
    #[must_use]
    pub fn delta(&self) -> Decimal {
        self.right_subtotal() - self.left_subtotal()
    }

    /// Returns true if both sides are present and identical.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.left.is_some() && self.left == self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(qty: Decimal, price: Decimal) -> BudgetItem {
        BudgetItem {
            code: "A".to_string(),
            name: "Item".to_string(),
            quantity: qty,
            unit: String::new(),
            unit_price: price,
        }
    }

    #[test]
    fn test_absent_side_counts_as_zero() {
        let row = DiffRow {
            key: "A".to_string(),
            left: None,
            right: Some(item(dec!(2), dec!(100))),
        };
        assert_eq!(row.left_subtotal(), dec!(0));
        assert_eq!(row.delta(), dec!(200));
        assert!(!row.is_unchanged());
    }

    #[test]
    fn test_removed_item_has_negative_delta() {
        let row = DiffRow {
            key: "A".to_string(),
            left: Some(item(dec!(2), dec!(100))),
            right: None,
        };
        assert_eq!(row.delta(), dec!(-200));
    }

    #[test]
    fn test_unchanged_row_has_zero_delta() {
        let it = item(dec!(2), dec!(100));
        let row = DiffRow {
            key: "A".to_string(),
            left: Some(it.clone()),
            right: Some(it),
        };
        assert!(row.is_unchanged());
        assert_eq!(row.delta(), dec!(0));
    }
}
