//! Config handle and construction.
//!
//! # Data Flow
//! ```text
//! RemoteConfig::new(url) / builder(url).build()
//!     → validate options
//!     → initial fetch (caller waits; failure = no handle)
//!     → PayloadStore seeded
//!     → refresh task spawned
//!
//! unmarshal::<T>() → current Snapshot → serde_json
//! ```

pub mod builder;
pub mod remote;

pub use builder::RemoteConfigBuilder;
pub use remote::RemoteConfig;
