//! Background refresh subsystem.
//!
//! # Data Flow
//! ```text
//! tick (fixed interval)
//!     → Fetch::fetch()
//!     → Ok:  PayloadStore::replace, log, sink Refreshed
//!     → Err: keep payload, log warning, sink Failed
//!     → wait for next tick
//! ```
//!
//! # Design Decisions
//! - Exactly one loop per handle, so fetches never overlap
//! - Missed ticks are delayed, not queued
//! - Failures never end the loop; only shutdown does

pub mod refresher;

pub use refresher::Refresher;
