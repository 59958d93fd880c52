//! Refresh configuration.
//!
//! # Data Flow
//! ```text
//! RefreshOptions (defaults, serde document, or builder calls)
//!     → validation.rs (semantic checks)
//!     → HttpFetcher (user agent, timeout)
//!     → Refresher (interval)
//! ```
//!
//! # Design Decisions
//! - Options are immutable once a handle is built
//! - All fields have defaults to allow minimal documents
//! - Validation separates syntactic (serde) from semantic checks

pub mod options;
pub mod validation;

pub use options::{RefreshOptions, DEFAULT_REFRESH_INTERVAL};
pub use validation::{validate_options, ValidationError};
