//! Validation error types for draft data.
//!
//! These errors are raised before a mutation is issued; malformed item
//! data is never sent to the write port.

use thiserror::Error;

/// Errors that can occur when validating draft data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DraftError {
    /// A budget item was submitted without a name.
    #[error("Budget item name is required")]
    ItemNameRequired,

    /// A budget item carries a negative quantity.
    #[error("Quantity for item '{name}' cannot be negative")]
    NegativeQuantity {
        /// The offending item's name.
        name: String,
    },

    /// A budget item carries a negative unit price.
    #[error("Unit price for item '{name}' cannot be negative")]
    NegativeUnitPrice {
        /// The offending item's name.
        name: String,
    },

    /// A draft must always hold at least one version.
    #[error("A draft must contain at least one version")]
    NoVersions,
}
