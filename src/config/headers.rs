//! HTTP header name constants.
//!
//! Header names are lowercase so they can be looked up directly in a
//! `reqwest::header::HeaderMap`, which is case-insensitive.

// Compression and caching
/// Content-Encoding header (compression used for the body)
pub const HEADER_CONTENT_ENCODING: &str = "content-encoding";
/// Cache-Control header
pub const HEADER_CACHE_CONTROL: &str = "cache-control";

// Infrastructure/Server identification
/// Server header (identifies server software, sometimes the CDN edge)
pub const HEADER_SERVER: &str = "server";

// CDN/Proxy identification
/// CF-Ray header (Cloudflare request ID)
pub const HEADER_CF_RAY: &str = "cf-ray";
/// X-Amz-Cf-Id header (CloudFront request ID)
pub const HEADER_X_AMZ_CF_ID: &str = "x-amz-cf-id";
/// X-Cache header (edge cache status)
pub const HEADER_X_CACHE: &str = "x-cache";
/// X-Served-By header (Fastly server identification)
pub const HEADER_X_SERVED_BY: &str = "x-served-by";

/// Headers whose presence alone indicates a CDN edge served the response.
pub const CDN_HEADERS: &[&str] = &[
    HEADER_CF_RAY,
    HEADER_X_AMZ_CF_ID,
    HEADER_X_CACHE,
    HEADER_X_SERVED_BY,
];

/// CDN providers recognized from a substring of the `Server` header.
///
/// Checked in order; the first match names the provider.
pub const CDN_SERVER_PROVIDERS: &[&str] = &["cloudflare", "cloudfront", "fastly", "akamai", "maxcdn"];

/// Provider name reported when a CDN is detected only through its headers.
pub const UNKNOWN_CDN_PROVIDER: &str = "unknown";
