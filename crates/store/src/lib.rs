//! Draft store projection and external-store glue.
//!
//! The store owns the canonical in-memory set of draft records. It is
//! rebuilt wholesale from the external change feed on every delivery;
//! mutations go out through the write port and only become visible once
//! the feed echoes them back. No local-only divergent state survives a
//! round trip.
//!
//! # Modules
//!
//! - `ports` - Write port trait and partial-update patch types
//! - `feed` - Raw document shapes and boundary normalization
//! - `store` - The `DraftStore` projection and its mutation operations
//! - `projector` - Change feed to store glue
//! - `memory` - In-memory backend for tests and development

pub mod error;
pub mod feed;
pub mod memory;
pub mod ports;
pub mod projector;
pub mod store;

pub use error::StoreError;
pub use feed::{FeedError, RawDraftDocument};
pub use memory::InMemoryBackend;
pub use ports::{DraftPatch, DraftWritePort, NewDraftDocument, TransportError};
pub use projector::run_projector;
pub use store::DraftStore;
