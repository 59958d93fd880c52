//! Crate-level error types.

use thiserror::Error;

use crate::config::ValidationError;
use crate::fetch::FetchError;

/// Errors returned when building a [`crate::RemoteConfig`].
#[derive(Debug, Error)]
pub enum Error {
    /// The initial fetch failed; no handle was produced.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The supplied options failed semantic validation.
    #[error("invalid refresh options: {}", join_errors(.0))]
    InvalidOptions(Vec<ValidationError>),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// The cached payload does not fit the caller's target type.
#[derive(Debug, Error)]
#[error("failed to decode remote config: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

impl DecodeError {
    /// Line of the payload where decoding stopped.
    pub fn line(&self) -> usize {
        self.0.line()
    }

    /// True when the payload is not well-formed JSON at all.
    pub fn is_syntax(&self) -> bool {
        self.0.is_syntax() || self.0.is_eof()
    }
}

pub type Result<T> = std::result::Result<T, Error>;

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
