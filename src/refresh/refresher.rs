//! Periodic background refresh.
//!
//! # Responsibilities
//! - Re-fetch the source on a fixed interval
//! - Swap successful payloads into the store
//! - Log, count and report failures without stopping

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::broadcast;
use tokio::time::{self, MissedTickBehavior};

use crate::config::options::duration_to_ms;
use crate::fetch::{Fetch, FetchResult};
use crate::observability::metrics;
use crate::observability::{RefreshEvent, RefreshSink};
use crate::store::PayloadStore;

pub struct Refresher<F> {
    fetcher: F,
    store: PayloadStore,
    interval: Duration,
    sink: Arc<dyn RefreshSink>,
    source: String,
    consecutive_failures: u32,
}

impl<F: Fetch> Refresher<F> {
    pub fn new(
        fetcher: F,
        store: PayloadStore,
        interval: Duration,
        sink: Arc<dyn RefreshSink>,
        source: String,
    ) -> Self {
        Self {
            fetcher,
            store,
            interval,
            sink,
            source,
            consecutive_failures: 0,
        }
    }

    /// Run until `shutdown` fires or its sender goes away.
    ///
    /// Fetches never overlap. The next fetch starts one full interval after
    /// the previous one finished, so a slow fetch pushes the schedule back
    /// instead of triggering an immediate catch-up fetch.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            source = %self.source,
            interval_ms = duration_to_ms(self.interval),
            "Remote config refresher starting"
        );

        let mut ticker = time::interval_at(time::Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = shutdown.recv() => break,
            }

            let started = Instant::now();
            let outcome = tokio::select! {
                outcome = self.fetcher.fetch() => outcome,
                _ = shutdown.recv() => break,
            };
            self.apply(outcome, started);
            ticker.reset();
        }

        tracing::info!(source = %self.source, "Remote config refresher stopped");
    }

    fn apply(&mut self, outcome: FetchResult<Vec<u8>>, started: Instant) {
        let event = match outcome {
            Ok(bytes) => {
                let len = bytes.len();
                let snapshot = self.store.replace(bytes);
                self.consecutive_failures = 0;

                tracing::info!(
                    source = %self.source,
                    bytes = len,
                    generation = snapshot.generation(),
                    "Fetched remote config"
                );
                metrics::record_refresh(true, started);
                metrics::record_payload_size(len);

                RefreshEvent::Refreshed {
                    bytes: len,
                    generation: snapshot.generation(),
                }
            }
            Err(e) => {
                self.consecutive_failures = self.consecutive_failures.saturating_add(1);

                tracing::warn!(
                    source = %self.source,
                    error = %e,
                    consecutive_failures = self.consecutive_failures,
                    "Error fetching remote config, keeping last known good payload"
                );
                metrics::record_refresh(false, started);

                RefreshEvent::Failed {
                    error: e.to_string(),
                    consecutive_failures: self.consecutive_failures,
                }
            }
        };

        self.sink.on_event(&event);
    }
}
