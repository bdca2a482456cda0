//! Role-based permission gate.
//!
//! A pure, stateless mapping from (role, action) to allowed/denied.
//! Every mutating entry point consults the gate before issuing a
//! mutation; a denial surfaces as an authorization failure, never as a
//! silent no-op, and is distinguishable from a data-validity failure.
//!
//! # Modules
//!
//! - `types` - Roles and gated actions
//! - `gate` - The rule table and check helpers
//! - `error` - Authorization error types

pub mod error;
pub mod gate;
pub mod types;

#[cfg(test)]
mod gate_props;

pub use error::PermissionError;
pub use gate::check;
pub use types::{Action, Role};
