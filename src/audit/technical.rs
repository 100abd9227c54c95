//! Protocol and header-derived technical checks.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use url::Url;

use crate::config::{
    CDN_HEADERS, CDN_SERVER_PROVIDERS, CLS_GOOD, CLS_POOR, HEADER_CACHE_CONTROL,
    HEADER_CONTENT_ENCODING, HEADER_SERVER, LCP_GOOD_MS, LCP_POOR_MS, MAX_SCORE,
    UNKNOWN_CDN_PROVIDER,
};
use crate::fetch::ResponseHeaders;
use crate::models::{
    CachingInfo, CdnInfo, CompressionInfo, CoreWebVitals, PerformanceMetrics, RedirectInfo,
    TechnicalChecks, VitalRating,
};
use crate::parse::PageStructure;
use crate::utils::clamp_score;

static MAX_AGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = r"max-age=(\d+)";
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in MAX_AGE_PATTERN: {}. This is a programming error.",
            pattern, e
        )
    })
});

pub(crate) fn classify_lcp(lcp_ms: u64) -> VitalRating {
    if lcp_ms < LCP_GOOD_MS {
        VitalRating::Good
    } else if lcp_ms < LCP_POOR_MS {
        VitalRating::NeedsImprovement
    } else {
        VitalRating::Poor
    }
}

pub(crate) fn classify_cls(cls: f64) -> VitalRating {
    if cls < CLS_GOOD {
        VitalRating::Good
    } else if cls < CLS_POOR {
        VitalRating::NeedsImprovement
    } else {
        VitalRating::Poor
    }
}

fn core_web_vitals(performance: &PerformanceMetrics) -> CoreWebVitals {
    CoreWebVitals {
        lcp: classify_lcp(performance.largest_contentful_paint),
        // No input-delay signal without real users
        fid: VitalRating::Good,
        cls: classify_cls(performance.cumulative_layout_shift),
    }
}

fn compression(headers: &ResponseHeaders) -> CompressionInfo {
    let encoding = headers.get_or_empty(HEADER_CONTENT_ENCODING).to_lowercase();
    CompressionInfo {
        gzip: encoding.contains("gzip"),
        brotli: encoding.contains("br"),
    }
}

fn caching(headers: &ResponseHeaders) -> CachingInfo {
    let cache_control = headers.get_or_empty(HEADER_CACHE_CONTROL);
    let max_age = MAX_AGE_PATTERN
        .captures(&cache_control)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u64>().ok());

    CachingInfo {
        enabled: !cache_control.is_empty(),
        max_age,
    }
}

/// Detects a CDN from the `Server` header, then from CDN-specific headers.
fn detect_cdn(headers: &ResponseHeaders) -> CdnInfo {
    let server = headers.get_or_empty(HEADER_SERVER).to_lowercase();
    if let Some(provider) = CDN_SERVER_PROVIDERS
        .iter()
        .find(|provider| server.contains(*provider))
    {
        return CdnInfo {
            detected: true,
            provider: Some((*provider).to_string()),
        };
    }

    if CDN_HEADERS.iter().any(|name| headers.has_value(name)) {
        return CdnInfo {
            detected: true,
            provider: Some(UNKNOWN_CDN_PROVIDER.to_string()),
        };
    }

    CdnInfo::default()
}

fn score_technical(
    https: bool,
    mobile_friendly: bool,
    vitals: &CoreWebVitals,
    compression: &CompressionInfo,
    caching: &CachingInfo,
) -> u8 {
    let mut score = f64::from(MAX_SCORE);
    if !https {
        score -= 30.0;
    }
    if !mobile_friendly {
        score -= 20.0;
    }
    if vitals.lcp != VitalRating::Good {
        score -= 15.0;
    }
    if vitals.cls != VitalRating::Good {
        score -= 10.0;
    }
    if !compression.any() {
        score -= 10.0;
    }
    if !caching.enabled {
        score -= 5.0;
    }
    clamp_score(score)
}

/// Runs the technical checks.
///
/// Core Web Vitals are classified from the already computed performance
/// estimate, and the server response time reuses its page load time.
pub fn audit_technical(
    page_url: &Url,
    structure: &PageStructure,
    headers: &ResponseHeaders,
    performance: &PerformanceMetrics,
) -> TechnicalChecks {
    let https = page_url.scheme() == "https";
    let mobile_friendly = structure.has_viewport;
    let core_web_vitals = core_web_vitals(performance);
    let compression = compression(headers);
    let caching = caching(headers);
    let cdn = detect_cdn(headers);

    let score = score_technical(
        https,
        mobile_friendly,
        &core_web_vitals,
        &compression,
        &caching,
    );

    debug!(
        "Technical: https {}, mobile {}, LCP {}, CLS {}, gzip {}, br {}, caching {}, CDN {:?}, score {}",
        https,
        mobile_friendly,
        core_web_vitals.lcp,
        core_web_vitals.cls,
        compression.gzip,
        compression.brotli,
        caching.enabled,
        cdn.provider,
        score
    );

    TechnicalChecks {
        https,
        mobile_friendly,
        core_web_vitals,
        redirects: RedirectInfo::default(),
        server_response_time: performance.page_load_time,
        compression,
        caching,
        cdn,
        score,
    }
}
