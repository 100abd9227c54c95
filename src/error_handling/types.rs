//! Error type definitions.
//!
//! This module defines every error the audit pipeline and its initialization
//! can surface.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Rejection of an audit target before any network I/O happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    /// No URL was given.
    #[error("URL is required")]
    Empty,

    /// The URL could not be parsed or has no host.
    #[error("Invalid URL format: {0}")]
    Malformed(String),

    /// The URL parsed but does not use http or https.
    #[error("Unsupported URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),
}

/// Category of a fetch failure.
///
/// Mirrors the classes of `reqwest::Error` plus body decoding failures, so the
/// caller can tell a timeout from a refused connection or an HTTP error status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    Builder,
    Redirect,
    /// Non-success HTTP status (carries the status code)
    Status(u16),
    Timeout,
    Request,
    Connect,
    Body,
    /// The body could not be decompressed
    Decode,
    Other,
}

impl FetchErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::Builder => "HTTP request builder error",
            FetchErrorKind::Redirect => "HTTP request redirect error",
            FetchErrorKind::Status(_) => "HTTP request status error",
            FetchErrorKind::Timeout => "HTTP request timeout error",
            FetchErrorKind::Request => "HTTP request error",
            FetchErrorKind::Connect => "HTTP request connect error",
            FetchErrorKind::Body => "HTTP request body error",
            FetchErrorKind::Decode => "HTTP response decode error",
            FetchErrorKind::Other => "HTTP request other error",
        }
    }
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchErrorKind::Status(code) => write!(f, "{} ({code})", self.as_str()),
            _ => f.write_str(self.as_str()),
        }
    }
}

/// The page could not be retrieved.
///
/// This is the only failure the audit pipeline itself produces. It carries the
/// originating error so callers can inspect the full chain.
#[derive(Error, Debug)]
#[error("Failed to fetch page {url}: {kind}")]
pub struct FetchError {
    /// URL that was requested
    pub url: String,
    /// Failure category
    pub kind: FetchErrorKind,
    /// Underlying cause
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl FetchError {
    pub fn new(
        url: impl Into<String>,
        kind: FetchErrorKind,
        source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        Self {
            url: url.into(),
            kind,
            source: source.into(),
        }
    }

    /// Returns true if the request hit the fetch deadline.
    pub fn is_timeout(&self) -> bool {
        self.kind == FetchErrorKind::Timeout
    }
}

/// Failure of a complete audit run.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The target was rejected before fetching.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    /// The page could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The HTTP client could not be built (convenience entry point only).
    #[error(transparent)]
    Initialization(#[from] InitializationError),
}
