//! Rule-based issue synthesis.
//!
//! Rules are evaluated in a fixed order (performance, then SEO, then
//! technical) and each fires at most once. The emitted list keeps that
//! order; grouping by impact is left to the report layer.

use crate::config::{
    CLS_GOOD, CLS_POOR, LCP_GOOD_MS, LCP_POOR_MS, PAGE_SIZE_WARN_BYTES, REQUEST_COUNT_WARN,
    TITLE_MAX_CHARS, TITLE_MIN_CHARS,
};
use crate::models::{
    Impact, Issue, IssueCategory, PerformanceMetrics, SeoAudit, TechnicalChecks,
};

impl Issue {
    fn new(category: IssueCategory, problem: impl Into<String>, impact: Impact, fix: &str) -> Self {
        Self {
            category,
            problem: problem.into(),
            impact,
            fix: fix.to_string(),
        }
    }
}

fn performance_issues(performance: &PerformanceMetrics, issues: &mut Vec<Issue>) {
    let category = IssueCategory::Performance;

    if performance.largest_contentful_paint > LCP_GOOD_MS {
        let impact = if performance.largest_contentful_paint > LCP_POOR_MS {
            Impact::High
        } else {
            Impact::Medium
        };
        issues.push(Issue::new(
            category,
            "Largest Contentful Paint (LCP) is too slow",
            impact,
            "Optimize images, use CDN, implement lazy loading, and reduce server response time",
        ));
    }

    if performance.cumulative_layout_shift > CLS_GOOD {
        let impact = if performance.cumulative_layout_shift > CLS_POOR {
            Impact::High
        } else {
            Impact::Medium
        };
        issues.push(Issue::new(
            category,
            "Cumulative Layout Shift (CLS) is too high",
            impact,
            "Add width and height attributes to images, avoid inserting content above existing content",
        ));
    }

    if performance.page_size > PAGE_SIZE_WARN_BYTES {
        issues.push(Issue::new(
            category,
            "Page size is too large",
            Impact::Medium,
            "Compress images, minify CSS/JS, remove unused code, and enable compression",
        ));
    }

    if performance.number_of_requests > REQUEST_COUNT_WARN {
        issues.push(Issue::new(
            category,
            "Too many HTTP requests",
            Impact::Medium,
            "Combine CSS/JS files, use sprites for images, and implement resource bundling",
        ));
    }
}

fn seo_issues(seo: &SeoAudit, issues: &mut Vec<Issue>) {
    let category = IssueCategory::Seo;

    if !seo.title.exists {
        issues.push(Issue::new(
            category,
            "Missing title tag",
            Impact::High,
            "Add a descriptive title tag between 30-60 characters",
        ));
    } else if seo.title.length < TITLE_MIN_CHARS || seo.title.length > TITLE_MAX_CHARS {
        issues.push(Issue::new(
            category,
            format!(
                "Title tag length is {} characters (should be 30-60)",
                seo.title.length
            ),
            Impact::Medium,
            "Optimize title tag to be between 30-60 characters for best SEO results",
        ));
    }

    if !seo.meta_description.exists {
        issues.push(Issue::new(
            category,
            "Missing meta description",
            Impact::High,
            "Add a compelling meta description between 120-160 characters",
        ));
    }

    if seo.headings.h1 == 0 {
        issues.push(Issue::new(
            category,
            "No H1 heading found",
            Impact::High,
            "Add a single H1 heading that describes the main content of the page",
        ));
    } else if seo.headings.h1 > 1 {
        issues.push(Issue::new(
            category,
            "Multiple H1 headings found",
            Impact::Medium,
            "Use only one H1 heading per page for better SEO structure",
        ));
    }

    let missing_alt = seo.images.without_alt;
    if missing_alt > 0 {
        // More than half of the images
        let impact = if missing_alt * 2 > seo.images.total {
            Impact::High
        } else {
            Impact::Medium
        };
        issues.push(Issue::new(
            category,
            format!("{} images missing alt text", missing_alt),
            impact,
            "Add descriptive alt text to all images for accessibility and SEO",
        ));
    }

    if !seo.canonical.exists {
        issues.push(Issue::new(
            category,
            "Missing canonical tag",
            Impact::Low,
            "Add a canonical tag to prevent duplicate content issues",
        ));
    }
}

fn technical_issues(technical: &TechnicalChecks, issues: &mut Vec<Issue>) {
    let category = IssueCategory::Technical;

    if !technical.https {
        issues.push(Issue::new(
            category,
            "Site is not using HTTPS",
            Impact::High,
            "Implement SSL/TLS certificate and redirect HTTP to HTTPS",
        ));
    }

    if !technical.mobile_friendly {
        issues.push(Issue::new(
            category,
            "Missing viewport meta tag for mobile",
            Impact::High,
            r#"Add viewport meta tag: <meta name="viewport" content="width=device-width, initial-scale=1">"#,
        ));
    }

    if !technical.compression.any() {
        issues.push(Issue::new(
            category,
            "Compression not enabled",
            Impact::Medium,
            "Enable Gzip or Brotli compression on your server to reduce page size",
        ));
    }

    if !technical.caching.enabled {
        issues.push(Issue::new(
            category,
            "Browser caching not configured",
            Impact::Medium,
            "Configure Cache-Control headers to enable browser caching for static assets",
        ));
    }
}

/// Derives the ordered issue list from the three audit results.
pub fn synthesize_issues(
    performance: &PerformanceMetrics,
    seo: &SeoAudit,
    technical: &TechnicalChecks,
) -> Vec<Issue> {
    let mut issues = Vec::new();
    performance_issues(performance, &mut issues);
    seo_issues(seo, &mut issues);
    technical_issues(technical, &mut issues);
    log::debug!("Synthesized {} issue(s)", issues.len());
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CachingInfo, CanonicalInfo, CdnInfo, CompressionInfo, CoreWebVitals, HeadingCounts,
        ImageStats, LinkStats, MetaDescriptionInfo, RedirectInfo, RobotsMetaInfo, RobotsTxtInfo,
        SitemapInfo, TitleInfo, VitalRating,
    };

    fn clean_performance() -> PerformanceMetrics {
        PerformanceMetrics {
            page_load_time: 500,
            first_contentful_paint: 150,
            largest_contentful_paint: 300,
            time_to_interactive: 400,
            total_blocking_time: 200,
            cumulative_layout_shift: 0.0,
            page_size: 10_000,
            number_of_requests: 3,
            score: 100,
        }
    }

    fn clean_seo() -> SeoAudit {
        SeoAudit {
            title: TitleInfo {
                exists: true,
                content: "A title that is long enough to pass".to_string(),
                length: 35,
                score: 100,
            },
            meta_description: MetaDescriptionInfo {
                exists: true,
                content: "d".repeat(130),
                length: 130,
            },
            headings: HeadingCounts {
                h1: 1,
                ..Default::default()
            },
            images: ImageStats::default(),
            links: LinkStats::default(),
            canonical: CanonicalInfo {
                exists: true,
                url: Some("https://example.com/".to_string()),
            },
            robots_meta: RobotsMetaInfo {
                exists: false,
                content: None,
            },
            sitemap: SitemapInfo {
                exists: true,
                url: Some("/sitemap.xml".to_string()),
            },
            robots_txt: RobotsTxtInfo::default(),
            score: 100,
        }
    }

    fn clean_technical() -> TechnicalChecks {
        TechnicalChecks {
            https: true,
            mobile_friendly: true,
            core_web_vitals: CoreWebVitals {
                lcp: VitalRating::Good,
                fid: VitalRating::Good,
                cls: VitalRating::Good,
            },
            redirects: RedirectInfo::default(),
            server_response_time: 500,
            compression: CompressionInfo {
                gzip: true,
                brotli: false,
            },
            caching: CachingInfo {
                enabled: true,
                max_age: Some(600),
            },
            cdn: CdnInfo::default(),
            score: 100,
        }
    }

    fn problems(issues: &[Issue]) -> Vec<&str> {
        issues.iter().map(|issue| issue.problem.as_str()).collect()
    }

    #[test]
    fn test_clean_page_has_no_issues() {
        let issues = synthesize_issues(&clean_performance(), &clean_seo(), &clean_technical());
        assert!(issues.is_empty(), "unexpected issues: {:?}", problems(&issues));
    }

    #[test]
    fn test_performance_rules_and_impacts() {
        let mut performance = clean_performance();
        performance.largest_contentful_paint = 3000;
        performance.cumulative_layout_shift = 0.3;
        performance.page_size = 2_000_001;
        performance.number_of_requests = 51;

        let issues = synthesize_issues(&performance, &clean_seo(), &clean_technical());
        assert_eq!(
            problems(&issues),
            vec![
                "Largest Contentful Paint (LCP) is too slow",
                "Cumulative Layout Shift (CLS) is too high",
                "Page size is too large",
                "Too many HTTP requests",
            ]
        );
        assert_eq!(issues[0].impact, Impact::Medium);
        assert_eq!(issues[1].impact, Impact::High);
        assert!(issues
            .iter()
            .all(|issue| issue.category == IssueCategory::Performance));
    }

    #[test]
    fn test_performance_thresholds_are_exclusive() {
        let mut performance = clean_performance();
        performance.largest_contentful_paint = 2500;
        performance.cumulative_layout_shift = 0.1;
        performance.page_size = 2_000_000;
        performance.number_of_requests = 50;
        assert!(synthesize_issues(&performance, &clean_seo(), &clean_technical()).is_empty());

        performance.largest_contentful_paint = 4001;
        performance.cumulative_layout_shift = 0.2;
        let issues = synthesize_issues(&performance, &clean_seo(), &clean_technical());
        assert_eq!(issues[0].impact, Impact::High);
        assert_eq!(issues[1].impact, Impact::Medium);
    }

    #[test]
    fn test_missing_title_description_and_h1() {
        let mut seo = clean_seo();
        seo.title = TitleInfo {
            exists: false,
            content: String::new(),
            length: 0,
            score: 0,
        };
        seo.meta_description.exists = false;
        seo.headings.h1 = 0;

        let issues = synthesize_issues(&clean_performance(), &seo, &clean_technical());
        assert_eq!(
            problems(&issues),
            vec!["Missing title tag", "Missing meta description", "No H1 heading found"]
        );
        assert!(issues.iter().all(|issue| issue.impact == Impact::High));
        assert!(issues.iter().all(|issue| issue.category == IssueCategory::Seo));
    }

    #[test]
    fn test_title_length_and_multiple_h1() {
        let mut seo = clean_seo();
        seo.title.length = 72;
        seo.headings.h1 = 2;

        let issues = synthesize_issues(&clean_performance(), &seo, &clean_technical());
        assert_eq!(
            problems(&issues),
            vec![
                "Title tag length is 72 characters (should be 30-60)",
                "Multiple H1 headings found",
            ]
        );
        assert!(issues.iter().all(|issue| issue.impact == Impact::Medium));
    }

    #[test]
    fn test_missing_alt_impact_depends_on_share() {
        let mut seo = clean_seo();
        seo.images = ImageStats {
            total: 4,
            with_alt: 2,
            without_alt: 2,
        };
        let issues = synthesize_issues(&clean_performance(), &seo, &clean_technical());
        assert_eq!(problems(&issues), vec!["2 images missing alt text"]);
        assert_eq!(issues[0].impact, Impact::Medium);

        seo.images = ImageStats {
            total: 4,
            with_alt: 1,
            without_alt: 3,
        };
        let issues = synthesize_issues(&clean_performance(), &seo, &clean_technical());
        assert_eq!(issues[0].impact, Impact::High);
    }

    #[test]
    fn test_missing_canonical_is_low() {
        let mut seo = clean_seo();
        seo.canonical = CanonicalInfo {
            exists: false,
            url: None,
        };
        let issues = synthesize_issues(&clean_performance(), &seo, &clean_technical());
        assert_eq!(problems(&issues), vec!["Missing canonical tag"]);
        assert_eq!(issues[0].impact, Impact::Low);
    }

    #[test]
    fn test_technical_rules() {
        let mut technical = clean_technical();
        technical.https = false;
        technical.mobile_friendly = false;
        technical.compression = CompressionInfo::default();
        technical.caching = CachingInfo::default();

        let issues = synthesize_issues(&clean_performance(), &clean_seo(), &technical);
        assert_eq!(
            problems(&issues),
            vec![
                "Site is not using HTTPS",
                "Missing viewport meta tag for mobile",
                "Compression not enabled",
                "Browser caching not configured",
            ]
        );
        let impacts: Vec<Impact> = issues.iter().map(|issue| issue.impact).collect();
        assert_eq!(
            impacts,
            vec![Impact::High, Impact::High, Impact::Medium, Impact::Medium]
        );
        assert!(issues[1].fix.contains(r#"<meta name="viewport""#));
    }

    #[test]
    fn test_categories_emit_in_rule_order() {
        let mut performance = clean_performance();
        performance.number_of_requests = 120;
        let mut seo = clean_seo();
        seo.headings.h1 = 0;
        let mut technical = clean_technical();
        technical.https = false;

        let categories: Vec<IssueCategory> =
            synthesize_issues(&performance, &seo, &technical)
                .iter()
                .map(|issue| issue.category)
                .collect();
        assert_eq!(
            categories,
            vec![
                IssueCategory::Performance,
                IssueCategory::Seo,
                IssueCategory::Technical
            ]
        );
    }
}
