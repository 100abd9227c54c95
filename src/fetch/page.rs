//! Fetched page data structures.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Response headers with case-insensitive lookup.
///
/// Multi-valued headers are joined with `", "` on lookup, which is how they
/// would read on a single header line.
#[derive(Debug, Clone, Default)]
pub struct ResponseHeaders(HeaderMap);

impl ResponseHeaders {
    pub fn new(headers: HeaderMap) -> Self {
        Self(headers)
    }

    /// Builds headers from `(name, value)` pairs, skipping invalid ones.
    ///
    /// Used for audits of content that was not fetched by this crate.
    pub fn from_pairs<N, V>(pairs: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: AsRef<str>,
        V: AsRef<str>,
    {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            let parsed = (
                HeaderName::from_bytes(name.as_ref().as_bytes()),
                HeaderValue::from_str(value.as_ref()),
            );
            match parsed {
                (Ok(name), Ok(value)) => {
                    map.append(name, value);
                }
                _ => log::debug!("Skipping invalid header {:?}", name.as_ref()),
            }
        }
        Self(map)
    }

    /// Returns the value of `name`, or `None` if the header is absent.
    ///
    /// Values that are not visible ASCII are decoded lossily.
    pub fn get(&self, name: &str) -> Option<String> {
        let values: Vec<String> = self
            .0
            .get_all(name)
            .iter()
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
            .collect();

        if values.is_empty() {
            None
        } else {
            Some(values.join(", "))
        }
    }

    /// Returns the value of `name`, or an empty string if absent.
    pub fn get_or_empty(&self, name: &str) -> String {
        self.get(name).unwrap_or_default()
    }

    /// Returns true if `name` is present with a non-empty value.
    pub fn has_value(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !value.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A successfully fetched page: decoded HTML text and response headers.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL after redirects
    pub final_url: String,
    /// HTTP status of the final response
    pub status: u16,
    pub headers: ResponseHeaders,
    /// Decoded body text
    pub body: String,
}

impl FetchedPage {
    /// Builds a page from content obtained elsewhere (no network access).
    pub fn from_parts(
        final_url: impl Into<String>,
        headers: ResponseHeaders,
        body: impl Into<String>,
    ) -> Self {
        Self {
            final_url: final_url.into(),
            status: 200,
            headers,
            body: body.into(),
        }
    }
}
