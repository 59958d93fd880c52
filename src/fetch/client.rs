//! HTTP fetcher backed by reqwest.
//!
//! # Responsibilities
//! - Issue one GET against the configured source
//! - Reject final statuses of 300 and above
//! - Read the complete body before returning

use crate::config::RefreshOptions;
use crate::fetch::types::{Fetch, FetchError, FetchResult};

/// Fetches the configuration document over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpFetcher {
    /// Create a fetcher with reqwest's default client settings.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Create a fetcher whose client honours the given options.
    pub fn from_options(
        url: impl Into<String>,
        options: &RefreshOptions,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder().user_agent(options.user_agent.clone());
        if let Some(timeout) = options.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self) -> FetchResult<Vec<u8>> {
        // The response is owned here and released on every return path.
        let response = self
            .client
            .get(self.url.as_str())
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = response.status();
        if status.as_u16() >= 300 {
            tracing::debug!(url = %self.url, status = %status, "Remote config source returned non-success status");
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(FetchError::BodyRead)?;
        Ok(body.to_vec())
    }
}
