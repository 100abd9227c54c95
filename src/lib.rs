//! page_audit library: single-page web audits
//!
//! This library fetches one web page and produces a scored audit: estimated
//! performance metrics, on-page SEO signals, technical checks (HTTPS,
//! viewport, compression, caching, CDN) and a prioritized list of issues.
//!
//! # Example
//!
//! ```no_run
//! use page_audit::{Auditor, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let auditor = Auditor::new(&Config::default())?;
//! let result = auditor.run_audit("https://example.com/").await?;
//! println!(
//!     "Overall {} (performance {}, SEO {}, technical {}), {} issues",
//!     result.overall_score,
//!     result.performance.score,
//!     result.seo.score,
//!     result.technical.score,
//!     result.issues.len()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Fetching requires a Tokio runtime. [`audit_page`] runs the rest of the
//! pipeline synchronously on content fetched elsewhere.

mod app;
mod audit;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
pub mod models;
pub mod parse;
mod run;
mod utils;

// Re-export public API
pub use app::{parse_target_url, render, validate_and_normalize_url};
pub use config::{Config, LogFormat, LogLevel, ReportFormat};
pub use error_handling::{
    AuditError, FetchError, FetchErrorKind, InitializationError, InvalidInputError,
};
pub use fetch::{FetchedPage, ResponseHeaders};
pub use models::{AuditResult, Impact, Issue, IssueCategory, ScoreRating};
pub use run::{audit_page, overall_score, run_audit, AuditStage, Auditor};
