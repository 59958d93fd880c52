//! Lifecycle management.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Initial fetch → seed store → spawn refresh task
//!
//! Shutdown (shutdown.rs):
//!     close() → signal → task leaves loop → join
//!     drop    → signal → task leaves loop
//! ```
//!
//! # Design Decisions
//! - The refresh task never outlives its handle
//! - An in-flight fetch is abandoned on shutdown, not awaited

pub mod shutdown;

pub use shutdown::BackgroundTask;
