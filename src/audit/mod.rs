//! Page scoring.
//!
//! Three independent auditors score the extracted page structure:
//! - Performance: load timings estimated from page size and resource count
//! - SEO: title, description, headings, image alt text, links, canonical
//! - Technical: HTTPS, viewport, Core Web Vitals bands, compression, caching, CDN
//!
//! The issue synthesizer then turns threshold crossings in the three results
//! into an ordered list of findings. Everything here is pure and cannot fail.

mod issues;
mod performance;
mod seo;
mod technical;

pub use issues::synthesize_issues;
pub use performance::audit_performance;
pub use seo::audit_seo;
pub use technical::audit_technical;
