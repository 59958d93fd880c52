//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for binaries
//! - Honour `RUST_LOG`, falling back to a caller-supplied filter
//!
//! # Design Decisions
//! - The library only emits events; installing a subscriber is the binary's call

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global fmt subscriber filtered by `RUST_LOG` or `default_filter`.
pub fn init_logging(default_filter: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
