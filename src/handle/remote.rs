//! The caller-facing config handle.

use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{DecodeError, Result};
use crate::handle::builder::RemoteConfigBuilder;
use crate::lifecycle::BackgroundTask;
use crate::store::{PayloadStore, Snapshot};

/// JSON configuration fetched from a URL and refreshed in the background.
///
/// Decoding always reads the last successfully fetched payload; failed
/// refreshes are logged and otherwise invisible. The refresh task stops when
/// the handle is closed or dropped. Share a handle across tasks with `Arc`.
pub struct RemoteConfig {
    source: String,
    refresh_interval: Duration,
    store: PayloadStore,
    task: BackgroundTask,
}

impl RemoteConfig {
    /// Fetch `source` once and start refreshing it every minute.
    ///
    /// Fails if the initial fetch fails; no background task is started then.
    pub async fn new(source: impl Into<String>) -> Result<Self> {
        Self::builder(source).build().await
    }

    pub fn builder(source: impl Into<String>) -> RemoteConfigBuilder {
        RemoteConfigBuilder::new(source)
    }

    pub(crate) fn from_parts(
        source: String,
        refresh_interval: Duration,
        store: PayloadStore,
        task: BackgroundTask,
    ) -> Self {
        Self {
            source,
            refresh_interval,
            store,
            task,
        }
    }

    /// Decode the current payload into `T`.
    pub fn unmarshal<T: DeserializeOwned>(&self) -> std::result::Result<T, DecodeError> {
        self.store.load().decode()
    }

    /// Decode the current payload into an existing value.
    ///
    /// `target` is left untouched when decoding fails.
    pub fn unmarshal_into<T: DeserializeOwned>(
        &self,
        target: &mut T,
    ) -> std::result::Result<(), DecodeError> {
        *target = self.unmarshal()?;
        Ok(())
    }

    /// The snapshot currently served to decoders.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.store.load()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    pub fn is_refreshing(&self) -> bool {
        self.task.is_running()
    }

    /// Stop the background refresh and wait for it to finish.
    pub async fn close(mut self) {
        tracing::debug!(source = %self.source, "Closing remote config");
        self.task.stop().await;
    }
}

impl std::fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("source", &self.source)
            .field("refresh_interval", &self.refresh_interval)
            .field("generation", &self.store.load().generation())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::fetch::{Fetch, FetchError, FetchResult};
    use crate::observability::RefreshEvent;
    use serde::Deserialize;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Flags {
        a: i64,
    }

    #[derive(Clone)]
    struct Scripted {
        outcomes: Arc<Mutex<VecDeque<FetchResult<Vec<u8>>>>>,
        calls: Arc<AtomicUsize>,
    }

    impl Scripted {
        fn new(outcomes: Vec<FetchResult<Vec<u8>>>) -> Self {
            Self {
                outcomes: Arc::new(Mutex::new(outcomes.into())),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn push(&self, outcome: FetchResult<Vec<u8>>) {
            self.outcomes.lock().unwrap().push_back(outcome);
        }
    }

    impl Fetch for Scripted {
        async fn fetch(&self) -> FetchResult<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(FetchError::BadStatus(503)))
        }
    }

    const INTERVAL: Duration = Duration::from_secs(60);

    async fn build(fetcher: Scripted) -> Result<RemoteConfig> {
        RemoteConfig::builder("scripted://config")
            .refresh_interval(INTERVAL)
            .build_with_fetcher(fetcher)
            .await
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_failure_produces_no_handle() {
        let fetcher = Scripted::new(vec![Err(FetchError::BadStatus(404))]);
        let err = build(fetcher.clone()).await.unwrap_err();
        assert!(matches!(err, Error::Fetch(FetchError::BadStatus(404))));

        tokio::time::sleep(INTERVAL * 3).await;
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_refresh_keeps_last_good_payload() {
        let fetcher = Scripted::new(vec![Ok(br#"{"a":1}"#.to_vec())]);
        let config = build(fetcher.clone()).await.unwrap();
        assert_eq!(config.unmarshal::<Flags>().unwrap(), Flags { a: 1 });

        // Queue is empty, so the next tick fails.
        tokio::time::sleep(INTERVAL + Duration::from_secs(1)).await;
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
        assert_eq!(config.unmarshal::<Flags>().unwrap(), Flags { a: 1 });
        assert!(config.is_refreshing());

        fetcher.push(Ok(br#"{"a":2}"#.to_vec()));
        tokio::time::sleep(INTERVAL).await;
        assert_eq!(config.unmarshal::<Flags>().unwrap(), Flags { a: 2 });
        assert_eq!(config.snapshot().generation(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_recovers_after_many_failures() {
        let fetcher = Scripted::new(vec![Ok(br#"{"a":1}"#.to_vec())]);
        let events = Arc::new(Mutex::new(Vec::new()));
        let seen = events.clone();
        let config = RemoteConfig::builder("scripted://config")
            .refresh_interval(INTERVAL)
            .sink(move |event: &RefreshEvent| seen.lock().unwrap().push(event.clone()))
            .build_with_fetcher(fetcher.clone())
            .await
            .unwrap();

        tokio::time::sleep(INTERVAL * 5 + Duration::from_secs(1)).await;
        assert_eq!(config.unmarshal::<Flags>().unwrap(), Flags { a: 1 });

        fetcher.push(Ok(br#"{"a":9}"#.to_vec()));
        tokio::time::sleep(INTERVAL).await;
        assert_eq!(config.unmarshal::<Flags>().unwrap(), Flags { a: 9 });

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 6);
        assert!(matches!(
            events[4],
            RefreshEvent::Failed { consecutive_failures: 5, .. }
        ));
        assert!(events[5].is_success());
    }

    #[tokio::test(start_paused = true)]
    async fn test_decode_mismatch_does_not_touch_payload() {
        let fetcher = Scripted::new(vec![Ok(br#""not an object""#.to_vec())]);
        let config = build(fetcher).await.unwrap();

        assert!(config.unmarshal::<Flags>().is_err());
        let mut existing = Flags { a: 42 };
        assert!(config.unmarshal_into(&mut existing).is_err());
        assert_eq!(existing, Flags { a: 42 });

        assert_eq!(config.unmarshal::<String>().unwrap(), "not an object");
        assert_eq!(config.snapshot().bytes(), br#""not an object""#);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmarshal_into_overwrites_on_success() {
        let fetcher = Scripted::new(vec![Ok(br#"{"a":5}"#.to_vec())]);
        let config = build(fetcher).await.unwrap();

        let mut target = Flags { a: 0 };
        config.unmarshal_into(&mut target).unwrap();
        assert_eq!(target, Flags { a: 5 });
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_stops_refreshing() {
        let fetcher = Scripted::new(vec![Ok(b"{}".to_vec())]);
        let config = build(fetcher.clone()).await.unwrap();
        assert!(config.is_refreshing());

        config.close().await;
        tokio::time::sleep(INTERVAL * 3).await;
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_refreshing() {
        let fetcher = Scripted::new(vec![Ok(b"{}".to_vec())]);
        let config = build(fetcher.clone()).await.unwrap();

        drop(config);
        tokio::time::sleep(INTERVAL * 3).await;
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_options_fail_before_fetching() {
        let fetcher = Scripted::new(vec![Ok(b"{}".to_vec())]);
        let err = RemoteConfig::builder("scripted://config")
            .refresh_interval(Duration::ZERO)
            .build_with_fetcher(fetcher.clone())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidOptions(_)));
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sub_millisecond_interval_is_kept_exactly() {
        let fetcher = Scripted::new(vec![Ok(b"{}".to_vec()), Ok(b"{}".to_vec())]);
        let config = RemoteConfig::builder("scripted://config")
            .refresh_interval(Duration::from_micros(500))
            .build_with_fetcher(fetcher.clone())
            .await
            .unwrap();
        assert_eq!(config.refresh_interval(), Duration::from_micros(500));

        tokio::time::sleep(Duration::from_millis(5)).await;
        assert!(fetcher.calls.load(Ordering::SeqCst) >= 2);
        config.close().await;

        let config = RemoteConfig::builder("scripted://config")
            .refresh_interval(Duration::from_micros(1900))
            .build_with_fetcher(Scripted::new(vec![Ok(b"{}".to_vec())]))
            .await
            .unwrap();
        assert_eq!(config.refresh_interval(), Duration::from_micros(1900));
        config.close().await;
    }
}
