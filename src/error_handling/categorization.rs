//! Error categorization.
//!
//! This module maps `reqwest` failures onto [`FetchErrorKind`] and wraps them
//! in a [`FetchError`].

use super::types::{FetchError, FetchErrorKind};

/// Categorizes a `reqwest::Error` into a `FetchErrorKind`.
///
/// HTTP status codes are checked first, then the reqwest error class. A timed
/// out request is also a request error, so the timeout check runs before it.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchErrorKind {
    if let Some(status) = error.status() {
        return FetchErrorKind::Status(status.as_u16());
    }

    if error.is_builder() {
        FetchErrorKind::Builder
    } else if error.is_redirect() {
        FetchErrorKind::Redirect
    } else if error.is_timeout() {
        FetchErrorKind::Timeout
    } else if error.is_connect() {
        FetchErrorKind::Connect
    } else if error.is_request() {
        FetchErrorKind::Request
    } else if error.is_body() {
        FetchErrorKind::Body
    } else if error.is_decode() {
        FetchErrorKind::Decode
    } else {
        FetchErrorKind::Other
    }
}

/// Wraps a `reqwest::Error` for `url` into a categorized `FetchError`.
pub fn fetch_error_from_reqwest(url: &str, error: reqwest::Error) -> FetchError {
    let kind = categorize_reqwest_error(&error);
    FetchError::new(url, kind, error)
}
