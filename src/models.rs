//! Audit result data model.
//!
//! Every type here is built once per audit and never mutated afterwards.
//! Serialized field names are camelCase so the JSON report reads the same as
//! the consumers (dashboards, PDF reports) expect.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::config::{RATING_EXCELLENT_MIN, RATING_GOOD_MIN};

/// Complete, immutable result of one page audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    /// Audited URL, always with an explicit scheme
    pub url: String,
    /// ISO-8601 timestamp of the audit start
    pub date: String,
    pub performance: PerformanceMetrics,
    pub seo: SeoAudit,
    pub technical: TechnicalChecks,
    /// Issues in synthesis order
    pub issues: Vec<Issue>,
    /// Rounded mean of the three subscores
    pub overall_score: u8,
}

impl AuditResult {
    /// Issues with the given impact, in synthesis order.
    pub fn issues_by_impact(&self, impact: Impact) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |issue| issue.impact == impact)
    }

    pub fn issue_counts(&self) -> IssueCounts {
        let mut counts = IssueCounts::default();
        for issue in &self.issues {
            match issue.impact {
                Impact::High => counts.high += 1,
                Impact::Medium => counts.medium += 1,
                Impact::Low => counts.low += 1,
            }
        }
        counts
    }

    pub fn rating(&self) -> ScoreRating {
        ScoreRating::from_score(self.overall_score)
    }
}

/// Estimated load metrics. Timings are derived from page size, not measured.
///
/// FCP <= LCP <= TTI <= load holds only because the estimates are fixed
/// fractions of the load time; nothing enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub page_load_time: u64,
    pub first_contentful_paint: u64,
    pub largest_contentful_paint: u64,
    pub time_to_interactive: u64,
    pub total_blocking_time: u64,
    /// In `[0.0, 0.5]`, two decimals
    pub cumulative_layout_shift: f64,
    /// Bytes of decoded HTML
    pub page_size: usize,
    pub number_of_requests: usize,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoAudit {
    pub title: TitleInfo,
    pub meta_description: MetaDescriptionInfo,
    pub headings: HeadingCounts,
    pub images: ImageStats,
    pub links: LinkStats,
    pub canonical: CanonicalInfo,
    pub robots_meta: RobotsMetaInfo,
    pub sitemap: SitemapInfo,
    /// Not checked here; reserved for a robots.txt probe
    pub robots_txt: RobotsTxtInfo,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleInfo {
    pub exists: bool,
    pub content: String,
    /// Length in characters
    pub length: usize,
    /// Title-only score, independent of the SEO score
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaDescriptionInfo {
    pub exists: bool,
    pub content: String,
    pub length: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingCounts {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
    pub h4: usize,
    pub h5: usize,
    pub h6: usize,
}

/// Invariant: `with_alt + without_alt == total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageStats {
    pub total: usize,
    pub with_alt: usize,
    pub without_alt: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStats {
    pub internal: usize,
    pub external: usize,
    /// Always 0: link reachability is not probed
    pub broken: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalInfo {
    pub exists: bool,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotsMetaInfo {
    pub exists: bool,
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapInfo {
    pub exists: bool,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotsTxtInfo {
    pub exists: bool,
    pub status: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalChecks {
    pub https: bool,
    pub mobile_friendly: bool,
    pub core_web_vitals: CoreWebVitals,
    /// Not tracked here; reserved for a redirect probe
    pub redirects: RedirectInfo,
    /// Proxy: the estimated page load time
    pub server_response_time: u64,
    pub compression: CompressionInfo,
    pub caching: CachingInfo,
    pub cdn: CdnInfo,
    pub score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreWebVitals {
    pub lcp: VitalRating,
    /// Placeholder: no input-delay signal is available without real users
    pub fid: VitalRating,
    pub cls: VitalRating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum VitalRating {
    Good,
    NeedsImprovement,
    Poor,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectInfo {
    pub count: usize,
    pub chain: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionInfo {
    pub gzip: bool,
    pub brotli: bool,
}

impl CompressionInfo {
    pub fn any(&self) -> bool {
        self.gzip || self.brotli
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachingInfo {
    pub enabled: bool,
    /// `max-age` directive in seconds
    pub max_age: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdnInfo {
    pub detected: bool,
    pub provider: Option<String>,
}

/// A single rule-derived finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub category: IssueCategory,
    pub problem: String,
    pub impact: Impact,
    pub fix: String,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum IssueCategory {
    Performance,
    Seo,
    Technical,
}

/// Issue severity. Declared from most to least severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IssueCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl IssueCounts {
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// Qualitative band of a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ScoreRating {
    Excellent,
    Good,
    #[strum(serialize = "Needs Improvement")]
    NeedsImprovement,
}

impl ScoreRating {
    pub fn from_score(score: u8) -> Self {
        if score >= RATING_EXCELLENT_MIN {
            ScoreRating::Excellent
        } else if score >= RATING_GOOD_MIN {
            ScoreRating::Good
        } else {
            ScoreRating::NeedsImprovement
        }
    }
}
