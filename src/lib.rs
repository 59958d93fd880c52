//! JSON configuration fetched from a public URL and kept fresh in the background.
//!
//! ```text
//!   RemoteConfig::new(url) ──▶ fetch ──▶ PayloadStore ◀── unmarshal::<T>()
//!                                           ▲
//!                      Refresher (every interval) ── fetch ──┘
//! ```
//!
//! Only public, non-secret documents are supported: there is no
//! authentication and nothing is persisted between runs.

pub mod config;
pub mod error;
pub mod fetch;
pub mod handle;
pub mod lifecycle;
pub mod observability;
pub mod refresh;
pub mod store;

pub use config::{RefreshOptions, DEFAULT_REFRESH_INTERVAL};
pub use error::{DecodeError, Error, Result};
pub use fetch::{Fetch, FetchError, HttpFetcher};
pub use handle::{RemoteConfig, RemoteConfigBuilder};
pub use observability::{NoopSink, RefreshEvent, RefreshSink};
pub use store::Snapshot;
