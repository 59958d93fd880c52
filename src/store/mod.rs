//! Payload storage.
//!
//! # Data Flow
//! ```text
//! initial fetch → PayloadStore::new (generation 0)
//! refresh ok    → PayloadStore::replace (whole-value swap)
//! unmarshal     → PayloadStore::load → Snapshot::decode
//! ```
//!
//! # Design Decisions
//! - Snapshots are immutable; refresh swaps the `Arc`, never the bytes
//! - Failed fetches never reach the store

pub mod payload;
pub mod snapshot;

pub use payload::PayloadStore;
pub use snapshot::Snapshot;
