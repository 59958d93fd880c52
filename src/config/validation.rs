//! Option validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (interval > 0, timeout > 0 when set)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Runs before any network traffic happens

use thiserror::Error;

use crate::config::options::RefreshOptions;

/// A single semantic problem with a set of refresh options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("refresh interval must be greater than zero")]
    ZeroInterval,

    #[error("request timeout must be greater than zero when set")]
    ZeroTimeout,

    #[error("user agent must not be empty")]
    EmptyUserAgent,
}

/// Validate refresh options, collecting every problem found.
pub fn validate_options(options: &RefreshOptions) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if options.interval_ms == 0 {
        errors.push(ValidationError::ZeroInterval);
    }
    if options.request_timeout_ms == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }
    if options.user_agent.trim().is_empty() {
        errors.push(ValidationError::EmptyUserAgent);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
