//! Page fetching.
//!
//! Retrieves the raw HTML and response headers of the audited page with a
//! single GET request. The client passed in carries the timeout, redirect cap
//! and User-Agent (see [`init_client`](crate::initialization::init_client)).
//! Failures are never retried.

mod decode;
mod page;
mod request;

use log::{debug, info, warn};
use reqwest::Url;

use crate::config::{HEADER_CONTENT_ENCODING, MAX_HTML_PREVIEW_CHARS};
use crate::error_handling::{fetch_error_from_reqwest, FetchError, FetchErrorKind};

pub use decode::decode_body;
pub use page::{FetchedPage, ResponseHeaders};
pub(crate) use request::RequestHeaders;

/// Fetches `url` and returns its decoded body and response headers.
///
/// # Errors
///
/// Returns a `FetchError` if the request fails (DNS, TLS, connect, timeout),
/// exceeds the redirect cap, ends in a non-success status, or the body cannot
/// be read or decompressed.
pub async fn fetch_page(client: &reqwest::Client, url: &Url) -> Result<FetchedPage, FetchError> {
    debug!("Fetching {url}");
    log::trace!("Request headers: {:?}", RequestHeaders::as_vec());

    let request = RequestHeaders::apply_to_request_builder(client.get(url.clone()));
    let response = request
        .send()
        .await
        .map_err(|e| fetch_error_from_reqwest(url.as_str(), e))?;

    let response = response.error_for_status().map_err(|e| {
        warn!("Non-success status for {url}: {e}");
        fetch_error_from_reqwest(url.as_str(), e)
    })?;

    let final_url = response.url().to_string();
    if final_url != url.as_str() {
        debug!("Final url after redirects: {final_url}");
    }
    let status = response.status().as_u16();
    let headers = ResponseHeaders::new(response.headers().clone());
    log::trace!("Response version: {:?}", response.version());

    let raw = response
        .bytes()
        .await
        .map_err(|e| fetch_error_from_reqwest(url.as_str(), e))?;

    let encoding = headers.get(HEADER_CONTENT_ENCODING);
    let decoded = decode_body(raw.to_vec(), encoding.as_deref())
        .map_err(|e| FetchError::new(url.as_str(), FetchErrorKind::Decode, e))?;
    let body = String::from_utf8_lossy(&decoded).into_owned();

    info!(
        "Fetched {final_url}: status {status}, {} header(s), {} byte body",
        headers.len(),
        body.len()
    );
    if !body.contains("<title") && !body.contains("<TITLE") {
        let preview: String = body.chars().take(MAX_HTML_PREVIEW_CHARS).collect();
        debug!("No title tag in raw HTML for {final_url}, preview: {preview}");
    }

    Ok(FetchedPage {
        final_url,
        status,
        headers,
        body,
    })
}
