//! Refresh events and injectable sinks.

/// Outcome of one background refresh cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshEvent {
    /// A new payload was stored.
    Refreshed { bytes: usize, generation: u64 },
    /// The fetch failed; the previous payload was kept.
    Failed {
        error: String,
        consecutive_failures: u32,
    },
}

impl RefreshEvent {
    pub fn is_success(&self) -> bool {
        matches!(self, RefreshEvent::Refreshed { .. })
    }
}

/// Receives every refresh event emitted by a handle.
///
/// Called from the refresh task, so implementations should return quickly.
pub trait RefreshSink: Send + Sync {
    fn on_event(&self, event: &RefreshEvent);
}

impl<F> RefreshSink for F
where
    F: Fn(&RefreshEvent) + Send + Sync,
{
    fn on_event(&self, event: &RefreshEvent) {
        self(event)
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl RefreshSink for NoopSink {
    fn on_event(&self, _event: &RefreshEvent) {}
}
