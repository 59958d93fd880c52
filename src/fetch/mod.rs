//! Fetcher subsystem.
//!
//! # Data Flow
//! ```text
//! Fetch::fetch()
//!     → HTTP GET (client.rs)
//!     → status check (< 300)
//!     → full body read
//!     → Vec<u8> or FetchError
//! ```
//!
//! # Design Decisions
//! - One attempt per call; the refresh loop owns retrying
//! - No timeout unless one is configured
//! - `Fetch` is the seam tests use to script outcomes

pub mod client;
pub mod types;

pub use client::HttpFetcher;
pub use types::{Fetch, FetchError, FetchResult};
