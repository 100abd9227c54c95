//! Audit report rendering.

use std::fmt::Write as _;

use strum::IntoEnumIterator;

use crate::config::ReportFormat;
use crate::models::{AuditResult, Impact, ScoreRating};

/// Renders an audit result in the requested format.
///
/// JSON output is the serialized `AuditResult` (camelCase field names).
/// The summary is a plain-text overview: overall score and subscores with
/// their rating, followed by the issues grouped from high to low impact.
///
/// # Errors
///
/// Returns a `serde_json::Error` if JSON serialization fails.
pub fn render(result: &AuditResult, format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Json => serde_json::to_string(result),
        ReportFormat::Pretty => serde_json::to_string_pretty(result),
        ReportFormat::Summary => Ok(render_summary(result)),
    }
}

fn score_line(label: &str, score: u8, rating: ScoreRating) -> String {
    format!("{label:<14}{score:>3}/100  {rating}")
}

fn render_summary(result: &AuditResult) -> String {
    let mut out = String::new();
    let counts = result.issue_counts();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Audit of {} ({})", result.url, result.date);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}",
        score_line("Overall", result.overall_score, result.rating())
    );
    for (label, score) in [
        ("Performance", result.performance.score),
        ("SEO", result.seo.score),
        ("Technical", result.technical.score),
    ] {
        let _ = writeln!(out, "{}", score_line(label, score, ScoreRating::from_score(score)));
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Load time {} ms, LCP {} ms, CLS {}, {} bytes, {} request{}",
        result.performance.page_load_time,
        result.performance.largest_contentful_paint,
        result.performance.cumulative_layout_shift,
        result.performance.page_size,
        result.performance.number_of_requests,
        if result.performance.number_of_requests == 1 { "" } else { "s" }
    );
    let _ = writeln!(out);

    if counts.total() == 0 {
        let _ = writeln!(out, "No issues found");
        return out;
    }

    let _ = writeln!(
        out,
        "Issues: {} ({} high, {} medium, {} low)",
        counts.total(),
        counts.high,
        counts.medium,
        counts.low
    );
    for impact in Impact::iter() {
        let mut issues = result.issues_by_impact(impact).peekable();
        if issues.peek().is_none() {
            continue;
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "[{}]", impact.to_string().to_uppercase());
        for issue in issues {
            let _ = writeln!(out, "- ({}) {}", issue.category, issue.problem);
            let _ = writeln!(out, "  Fix: {}", issue.fix);
        }
    }
    out
}
