//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, input validation, fetching
//!   and the audit as a whole
//! - Categorization of HTTP client failures
//!
//! Only fetching can fail once an audit has started; parsing and scoring are
//! infallible.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, fetch_error_from_reqwest};
pub use types::{AuditError, FetchError, FetchErrorKind, InitializationError, InvalidInputError};
