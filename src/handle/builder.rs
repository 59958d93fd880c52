//! Builder for [`RemoteConfig`] handles.

use std::sync::Arc;
use std::time::Duration;

use crate::config::options::duration_to_ms;
use crate::config::{validate_options, RefreshOptions};
use crate::error::{Error, Result};
use crate::fetch::{Fetch, HttpFetcher};
use crate::handle::remote::RemoteConfig;
use crate::lifecycle::BackgroundTask;
use crate::observability::metrics;
use crate::observability::{NoopSink, RefreshSink};
use crate::refresh::Refresher;
use crate::store::PayloadStore;

/// Configures and constructs a [`RemoteConfig`].
///
/// ```no_run
/// # async fn demo() -> remote_config::Result<()> {
/// use std::time::Duration;
///
/// let config = remote_config::RemoteConfig::builder("https://example.com/config.json")
///     .refresh_interval(Duration::from_secs(30))
///     .request_timeout(Duration::from_secs(10))
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct RemoteConfigBuilder {
    source: String,
    options: RefreshOptions,
    /// Exact interval; `options.interval_ms` only mirrors it for validation.
    interval: Duration,
    sink: Arc<dyn RefreshSink>,
}

impl RemoteConfigBuilder {
    pub fn new(source: impl Into<String>) -> Self {
        let options = RefreshOptions::default();
        Self {
            source: source.into(),
            interval: options.interval(),
            options,
            sink: Arc::new(NoopSink),
        }
    }

    /// Replace every option at once, e.g. with a deserialized document.
    pub fn options(mut self, options: RefreshOptions) -> Self {
        self.interval = options.interval();
        self.options = options;
        self
    }

    /// Time between background refreshes. Defaults to one minute.
    pub fn refresh_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self.options.interval_ms = duration_to_ms(interval);
        self
    }

    /// Per-request timeout. By default requests wait indefinitely.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.options.request_timeout_ms = Some(duration_to_ms(timeout));
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.options.user_agent = user_agent.into();
        self
    }

    /// Receive a [`crate::RefreshEvent`] for every background refresh.
    pub fn sink(mut self, sink: impl RefreshSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Fetch the source over HTTP and start refreshing it.
    pub async fn build(self) -> Result<RemoteConfig> {
        validate_options(&self.options).map_err(Error::InvalidOptions)?;
        let fetcher =
            HttpFetcher::from_options(self.source.clone(), &self.options).map_err(Error::HttpClient)?;
        self.build_with_fetcher(fetcher).await
    }

    /// Like [`build`](Self::build) but with a caller-supplied transport.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn build_with_fetcher<F: Fetch>(self, fetcher: F) -> Result<RemoteConfig> {
        validate_options(&self.options).map_err(Error::InvalidOptions)?;

        let initial = match fetcher.fetch().await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!(source = %self.source, error = %e, "Initial remote config fetch failed");
                return Err(e.into());
            }
        };

        tracing::info!(source = %self.source, bytes = initial.len(), "Remote config loaded");
        metrics::record_payload_size(initial.len());

        let store = PayloadStore::new(initial);
        let interval = self.interval;
        let refresher = Refresher::new(
            fetcher,
            store.clone(),
            interval,
            self.sink,
            self.source.clone(),
        );
        let task = BackgroundTask::spawn("remote-config-refresh", move |shutdown| {
            refresher.run(shutdown)
        });

        Ok(RemoteConfig::from_parts(self.source, interval, store, task))
    }
}
