//! Refresh option definitions.
//!
//! All fields have defaults so an empty document (or `RefreshOptions::default()`)
//! reproduces the classic behavior: one-minute refresh, no request timeout.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Interval between background refreshes when none is configured.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Options controlling how a remote config is fetched and refreshed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RefreshOptions {
    /// Milliseconds between background refreshes.
    pub interval_ms: u64,

    /// Optional per-request timeout in milliseconds. `None` waits indefinitely.
    pub request_timeout_ms: Option<u64>,

    /// User-Agent header sent with every fetch.
    pub user_agent: String,
}

impl Default for RefreshOptions {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_REFRESH_INTERVAL.as_millis() as u64,
            request_timeout_ms: None,
            user_agent: default_user_agent(),
        }
    }
}

impl RefreshOptions {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

fn default_user_agent() -> String {
    concat!("remote-config/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Convert a duration to milliseconds, rounding any fraction up and
/// saturating on overflow. A non-zero duration never maps to 0.
pub(crate) fn duration_to_ms(duration: Duration) -> u64 {
    let partial = u128::from(duration.subsec_nanos() % 1_000_000 != 0);
    u64::try_from(duration.as_millis() + partial).unwrap_or(u64::MAX)
}
