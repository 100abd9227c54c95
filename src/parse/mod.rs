//! HTML parsing and structural extraction.
//!
//! This module turns raw HTML into the signals the auditors score:
//! - Resource references (scripts, stylesheets, images, fonts)
//! - Title, meta description, viewport and robots meta tags
//! - Canonical and sitemap links
//! - Heading counts and image attributes
//! - Anchor targets
//!
//! All parsing is done using CSS selectors via the `scraper` crate and never
//! fails on malformed markup.

mod document;
mod structure;

// Re-export public API
pub use document::ParsedPage;
pub use structure::{ImageTag, PageStructure, ResourceCounts, TagValue};
