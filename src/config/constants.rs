//! Configuration constants.
//!
//! This module defines the operational parameters of the fetcher and the
//! thresholds used by the audit heuristics.

// Fetching
/// Per-request timeout in seconds
pub const FETCH_TIMEOUT_SECS: u64 = 30;
/// Maximum number of redirect hops to follow before failing the fetch
pub const MAX_REDIRECT_HOPS: usize = 5;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Maximum HTML preview length in characters for debugging (500 chars)
pub const MAX_HTML_PREVIEW_CHARS: usize = 500;

// Performance estimation
/// Floor for the estimated page load time in milliseconds
pub const MIN_PAGE_LOAD_TIME_MS: f64 = 500.0;
/// Bytes of HTML per estimated millisecond of load time
pub const BYTES_PER_LOAD_MS: f64 = 10_000.0;
pub const FCP_LOAD_FRACTION: f64 = 0.3;
pub const LCP_LOAD_FRACTION: f64 = 0.6;
pub const TTI_LOAD_FRACTION: f64 = 0.8;
/// Milliseconds of load time that do not count towards total blocking time
pub const TBT_OFFSET_MS: f64 = 300.0;
/// Share of layout shift attributed to a page whose images all lack dimensions
pub const CLS_UNSIZED_IMAGE_WEIGHT: f64 = 0.3;
pub const MAX_ESTIMATED_CLS: f64 = 0.5;

// Core Web Vitals bands
/// LCP below this is "good" (ms)
pub const LCP_GOOD_MS: u64 = 2500;
/// LCP below this is "needs improvement" (ms)
pub const LCP_POOR_MS: u64 = 4000;
/// CLS below this is "good"
pub const CLS_GOOD: f64 = 0.1;
/// CLS below this is "needs improvement"
pub const CLS_POOR: f64 = 0.25;

// Page weight
/// Page size above which a page is considered heavy (bytes)
pub const PAGE_SIZE_WARN_BYTES: usize = 2_000_000;
/// Page size above which a page is considered very heavy (bytes)
pub const PAGE_SIZE_CRITICAL_BYTES: usize = 5_000_000;
/// Request count above which a page makes too many requests
pub const REQUEST_COUNT_WARN: usize = 50;
pub const REQUEST_COUNT_CRITICAL: usize = 100;

// SEO ranges (inclusive, in characters)
pub const TITLE_MIN_CHARS: usize = 30;
pub const TITLE_MAX_CHARS: usize = 60;
pub const META_DESCRIPTION_MIN_CHARS: usize = 120;
pub const META_DESCRIPTION_MAX_CHARS: usize = 160;

/// Upper bound for every score
pub const MAX_SCORE: u8 = 100;

// Score ratings
/// Scores at or above this are rated "Excellent"
pub const RATING_EXCELLENT_MIN: u8 = 80;
/// Scores at or above this are rated "Good"
pub const RATING_GOOD_MIN: u8 = 60;
