//! URL validation and normalization utilities.

use log::warn;
use url::Url;

use crate::error_handling::InvalidInputError;

/// Maximum URL length (2048 characters), matching common browser and server limits.
const MAX_URL_LENGTH: usize = 2048;

/// Parses an audit target that must already carry an explicit scheme.
///
/// No scheme inference happens here: `example.com` is rejected. Use
/// [`validate_and_normalize_url`] first for user-typed input.
///
/// # Errors
///
/// - `Empty` for blank input
/// - `Malformed` if the URL does not parse or has no host
/// - `UnsupportedScheme` for anything but `http`/`https`
pub fn parse_target_url(url: &str) -> Result<Url, InvalidInputError> {
    if url.trim().is_empty() {
        return Err(InvalidInputError::Empty);
    }

    let parsed = Url::parse(url).map_err(|e| InvalidInputError::Malformed(format!("{url}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(InvalidInputError::UnsupportedScheme(other.to_string())),
    }
    if !parsed.has_host() {
        return Err(InvalidInputError::Malformed(format!("{url}: missing host")));
    }
    Ok(parsed)
}

/// Validates and normalizes a user-supplied URL.
///
/// Trims whitespace and adds an `https://` prefix if the input has no scheme,
/// then validates that the URL is syntactically valid and uses http/https.
/// Rejects URLs longer than `MAX_URL_LENGTH`.
///
/// # Arguments
///
/// * `input` - The URL string to validate and normalize
///
/// # Returns
///
/// The normalized URL string, exactly as it will be requested.
///
/// # Errors
///
/// Returns an `InvalidInputError` describing why the input was rejected.
pub fn validate_and_normalize_url(input: &str) -> Result<String, InvalidInputError> {
    let url = input.trim();
    if url.is_empty() {
        return Err(InvalidInputError::Empty);
    }

    // Normalize: add https:// prefix if no scheme was given
    let normalized = if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            normalized.len(),
            MAX_URL_LENGTH,
            normalized.chars().take(50).collect::<String>()
        );
        return Err(InvalidInputError::Malformed(format!(
            "URL exceeds {MAX_URL_LENGTH} characters"
        )));
    }

    parse_target_url(&normalized).inspect_err(|e| warn!("Rejecting URL {url}: {e}"))?;
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_and_normalize_url_adds_https() {
        assert_eq!(
            validate_and_normalize_url("example.com"),
            Ok("https://example.com".to_string())
        );
    }

    #[test]
    fn test_validate_and_normalize_url_preserves_scheme() {
        assert_eq!(
            validate_and_normalize_url("https://example.com"),
            Ok("https://example.com".to_string())
        );
        assert_eq!(
            validate_and_normalize_url("http://example.com"),
            Ok("http://example.com".to_string())
        );
    }

    #[test]
    fn test_validate_and_normalize_url_trims_input() {
        assert_eq!(
            validate_and_normalize_url("  example.com/shop \n"),
            Ok("https://example.com/shop".to_string())
        );
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_empty() {
        assert_eq!(validate_and_normalize_url(""), Err(InvalidInputError::Empty));
        assert_eq!(validate_and_normalize_url("   "), Err(InvalidInputError::Empty));
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_invalid_url() {
        assert!(matches!(
            validate_and_normalize_url("not a valid url!!!"),
            Err(InvalidInputError::Malformed(_))
        ));
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_unsupported_scheme() {
        assert_eq!(
            validate_and_normalize_url("ftp://example.com"),
            Err(InvalidInputError::UnsupportedScheme("ftp".to_string()))
        );
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_overlong_url() {
        let long = format!("example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(matches!(
            validate_and_normalize_url(&long),
            Err(InvalidInputError::Malformed(_))
        ));
    }

    #[test]
    fn test_validate_and_normalize_url_with_path_and_port() {
        assert_eq!(
            validate_and_normalize_url("example.com/path?query=value"),
            Ok("https://example.com/path?query=value".to_string())
        );
        assert_eq!(
            validate_and_normalize_url("example.com:8080"),
            Ok("https://example.com:8080".to_string())
        );
    }

    #[test]
    fn test_validate_and_normalize_url_ipv6() {
        assert_eq!(
            validate_and_normalize_url("[2001:db8::1]"),
            Ok("https://[2001:db8::1]".to_string())
        );
        assert_eq!(
            validate_and_normalize_url("http://[2001:db8::1]:8080"),
            Ok("http://[2001:db8::1]:8080".to_string())
        );
    }

    #[test]
    fn test_parse_target_url_requires_scheme() {
        // A bare domain is not an absolute URL
        assert!(matches!(
            parse_target_url("example.com"),
            Err(InvalidInputError::Malformed(_))
        ));
        assert_eq!(
            parse_target_url("mailto:shop@example.com"),
            Err(InvalidInputError::UnsupportedScheme("mailto".to_string()))
        );
        assert_eq!(parse_target_url(""), Err(InvalidInputError::Empty));
    }

    #[test]
    fn test_parse_target_url_accepts_http_and_https() {
        let url = parse_target_url("https://example.com/a?b=c").expect("valid url");
        assert_eq!(url.host_str(), Some("example.com"));
        assert!(parse_target_url("http://127.0.0.1:8080/").is_ok());
    }
}
