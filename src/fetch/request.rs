//! HTTP request building.
//!
//! This module provides the browser-like headers sent with the page request.

/// Realistic browser request headers.
///
/// These headers mimic a modern Chrome browser navigation so the audited page
/// is served the same way a visitor would receive it, including compression.
///
/// - **Accept**: Match modern browser content negotiation
/// - **Accept-Language**: English-speaking visitor (common default)
/// - **Accept-Encoding**: Advertise gzip, deflate and brotli so the server's
///   compression setup shows up in `Content-Encoding`
/// - **Upgrade-Insecure-Requests**: Indicates preference for HTTPS
pub(crate) struct RequestHeaders;

/// Encodings advertised in `Accept-Encoding`; all of them can be decoded by
/// [`decode_body`](super::decode::decode_body).
pub(crate) const ACCEPT_ENCODING: &str = "gzip, deflate, br";

const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8";

impl RequestHeaders {
    /// Returns headers as a vector of (name, value) tuples.
    pub(crate) fn as_vec() -> Vec<(String, String)> {
        vec![
            ("accept".to_string(), ACCEPT.to_string()),
            ("accept-language".to_string(), "en-US,en;q=0.9".to_string()),
            ("accept-encoding".to_string(), ACCEPT_ENCODING.to_string()),
            ("upgrade-insecure-requests".to_string(), "1".to_string()),
        ]
    }

    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(reqwest::header::ACCEPT, ACCEPT)
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .header(reqwest::header::ACCEPT_ENCODING, ACCEPT_ENCODING)
            .header(reqwest::header::UPGRADE_INSECURE_REQUESTS, "1")
    }
}
