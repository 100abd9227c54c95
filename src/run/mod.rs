//! Audit orchestration.
//!
//! Sequences one audit: validate the target, fetch the page once, extract its
//! structure, run the three auditors, synthesize issues and aggregate the
//! overall score into an immutable [`AuditResult`].

mod stage;

use chrono::{DateTime, SecondsFormat, Utc};
use log::{info, warn};
use url::Url;

use crate::app::parse_target_url;
use crate::audit::{audit_performance, audit_seo, audit_technical, synthesize_issues};
use crate::config::Config;
use crate::error_handling::{AuditError, InitializationError};
use crate::fetch::{fetch_page, FetchedPage};
use crate::initialization::init_client;
use crate::models::AuditResult;
use crate::parse::ParsedPage;
use crate::utils::clamp_score;

pub use stage::AuditStage;
use stage::StageTracker;

/// Runs page audits with a shared HTTP client.
///
/// The client carries the fetch deadline, redirect cap and User-Agent from the
/// configuration it was built with. Audits share nothing else, so one
/// `Auditor` can serve any number of concurrent audits.
#[derive(Debug, Clone)]
pub struct Auditor {
    client: reqwest::Client,
}

impl Auditor {
    /// Builds an auditor from the fetch settings in `config`.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        Ok(Self { client })
    }

    /// Wraps an already configured client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Audits the page at `url`.
    ///
    /// `url` must be an absolute `http`/`https` URL; scheme inference is the
    /// caller's job (see [`validate_and_normalize_url`](crate::validate_and_normalize_url)).
    ///
    /// # Errors
    ///
    /// - `AuditError::InvalidInput` if `url` is rejected (no request is sent)
    /// - `AuditError::Fetch` if the page cannot be retrieved; no partial result
    ///   is produced
    pub async fn run_audit(&self, url: &str) -> Result<AuditResult, AuditError> {
        let mut stages = StageTracker::new(url);
        let target = parse_target_url(url)?;
        let started_at = Utc::now();

        stages.advance(AuditStage::Fetching);
        let page = match fetch_page(&self.client, &target).await {
            Ok(page) => page,
            Err(e) => {
                warn!("Audit of {url} failed: {e}");
                stages.advance(AuditStage::Failed);
                return Err(e.into());
            }
        };

        Ok(score_page(&target, &page, started_at, &mut stages))
    }
}

/// Audits `url` with the default configuration.
///
/// Builds a fresh client per call; use [`Auditor`] to audit several pages.
///
/// # Errors
///
/// See [`Auditor::run_audit`]. Additionally returns
/// `AuditError::Initialization` if the HTTP client cannot be built.
pub async fn run_audit(url: &str) -> Result<AuditResult, AuditError> {
    parse_target_url(url)?;
    let auditor = Auditor::new(&Config::default())?;
    auditor.run_audit(url).await
}

/// Audits an already fetched page.
///
/// This is the whole pipeline after the fetch: a pure function of its inputs,
/// so byte-identical pages yield identical subscores and issues.
///
/// # Arguments
///
/// * `url` - The URL the page was requested with
/// * `page` - Body and response headers
/// * `started_at` - Audit start, reported as the result date
pub fn audit_page(url: &Url, page: &FetchedPage, started_at: DateTime<Utc>) -> AuditResult {
    let mut stages = StageTracker::fetched(url.as_str());
    score_page(url, page, started_at, &mut stages)
}

/// Rounded mean of the three subscores.
pub fn overall_score(performance: u8, seo: u8, technical: u8) -> u8 {
    let sum = u16::from(performance) + u16::from(seo) + u16::from(technical);
    clamp_score(f64::from(sum) / 3.0)
}

fn score_page(
    url: &Url,
    page: &FetchedPage,
    started_at: DateTime<Utc>,
    stages: &mut StageTracker<'_>,
) -> AuditResult {
    stages.advance(AuditStage::Scoring);
    // The parsed document is not Send; only the owned structure outlives this line
    let structure = ParsedPage::parse(&page.body).structure();
    let performance = audit_performance(&structure, page.body.len());
    let seo = audit_seo(url, &structure);
    let technical = audit_technical(url, &structure, &page.headers, &performance);
    info!(
        "Scored {url}: performance {}, SEO {}, technical {}",
        performance.score, seo.score, technical.score
    );

    stages.advance(AuditStage::Synthesizing);
    let issues = synthesize_issues(&performance, &seo, &technical);
    let overall_score = overall_score(performance.score, seo.score, technical.score);

    stages.advance(AuditStage::Complete);
    info!(
        "Audit of {url} complete: overall score {overall_score}, {} issue(s)",
        issues.len()
    );

    AuditResult {
        url: url.to_string(),
        date: started_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        performance,
        seo,
        technical,
        issues,
        overall_score,
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
