//! Background task ownership and shutdown signalling.

use std::future::Future;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// A spawned task bound to the lifetime of its owner.
///
/// The task receives a broadcast receiver at spawn time and is expected to
/// exit when it fires (or when the sender is dropped). Dropping the
/// `BackgroundTask` signals the task without waiting for it.
pub struct BackgroundTask {
    name: &'static str,
    /// Broadcast channel sender.
    tx: broadcast::Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl BackgroundTask {
    /// Spawn `task` on the current tokio runtime.
    pub fn spawn<F, Fut>(name: &'static str, task: F) -> Self
    where
        F: FnOnce(broadcast::Receiver<()>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (tx, rx) = broadcast::channel(1);
        let handle = tokio::spawn(task(rx));
        Self {
            name,
            tx,
            handle: Some(handle),
        }
    }

    /// Whether the task is still alive.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Send the shutdown signal without waiting.
    pub fn signal(&self) {
        let _ = self.tx.send(());
    }

    /// Signal the task and wait for it to exit.
    pub async fn stop(&mut self) {
        self.signal();
        if let Some(handle) = self.handle.take() {
            match handle.await {
                Ok(()) => tracing::debug!(task = self.name, "Background task stopped"),
                Err(e) => tracing::error!(task = self.name, error = %e, "Background task ended abnormally"),
            }
        }
    }
}

impl Drop for BackgroundTask {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.signal();
        }
    }
}
