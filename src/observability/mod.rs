//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Refresh cycle produces:
//!     → tracing events (logging.rs installs the subscriber)
//!     → metrics.rs (counters, gauges, histograms)
//!     → events.rs (RefreshEvent to the handle's sink)
//! ```
//!
//! # Design Decisions
//! - tracing is always on; the sink is an extra, injectable channel
//! - Metrics are cheap no-ops until a recorder is installed

pub mod events;
pub mod logging;
pub mod metrics;

pub use events::{NoopSink, RefreshEvent, RefreshSink};
