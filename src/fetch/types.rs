//! Fetch seam and error definitions.

use std::future::Future;
use thiserror::Error;

/// Errors that can occur while retrieving the remote document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connect, TLS, timeout or request construction failure.
    #[error("network error fetching remote config: {0}")]
    Network(#[source] reqwest::Error),

    /// The source answered with a status of 300 or above.
    #[error("remote config fetch failed with status code {0}")]
    BadStatus(u16),

    /// Headers arrived but the body stream failed before completion.
    #[error("failed to read remote config body: {0}")]
    BodyRead(#[source] reqwest::Error),
}

impl FetchError {
    /// The HTTP status code, when the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::BadStatus(code) => Some(*code),
            _ => None,
        }
    }
}

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// A single retrieval of the configuration document.
///
/// Implementations perform exactly one attempt per call; retrying is left to
/// the refresh loop.
pub trait Fetch: Send + Sync + 'static {
    fn fetch(&self) -> impl Future<Output = FetchResult<Vec<u8>>> + Send;
}
