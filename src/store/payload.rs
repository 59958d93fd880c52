//! Lock-free holder for the current snapshot.

use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::store::snapshot::Snapshot;

/// Shared slot holding the last successfully fetched payload.
///
/// Cloning is cheap and every clone observes the same slot. Readers load an
/// `Arc<Snapshot>` without locking; the refresh task is the only writer.
#[derive(Clone)]
pub struct PayloadStore {
    inner: Arc<ArcSwap<Snapshot>>,
}

impl PayloadStore {
    /// Create a store seeded with the initial fetch (generation 0).
    pub fn new(initial: Vec<u8>) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(Snapshot::new(initial, 0))),
        }
    }

    pub fn load(&self) -> Arc<Snapshot> {
        self.inner.load_full()
    }

    /// Swap in a new payload and return the snapshot that now holds it.
    pub fn replace(&self, bytes: Vec<u8>) -> Arc<Snapshot> {
        // Single writer, so load-then-store cannot lose a generation.
        let generation = self.inner.load().generation() + 1;
        let next = Arc::new(Snapshot::new(bytes, generation));
        self.inner.store(Arc::clone(&next));
        next
    }
}
