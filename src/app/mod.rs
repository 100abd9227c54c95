//! Caller-side application modules.
//!
//! This module provides URL validation and report rendering used by the
//! command-line binary and by library callers handling user input.

pub mod report;
pub mod url;

// Re-export public API
pub use report::render;
pub use url::{parse_target_url, validate_and_normalize_url};
