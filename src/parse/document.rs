//! Lenient HTML document with selector-style queries.

use scraper::{ElementRef, Html};

use crate::utils::parse_selector_with_fallback;

/// A parsed HTML page.
///
/// Parsing never fails: malformed markup (missing closing tags, stray
/// entities) is repaired the way browsers do it. Every query takes a CSS
/// selector; an invalid selector matches nothing.
///
/// `scraper::Html` is not `Send`, so a `ParsedPage` stays on the task that
/// parsed it. Use [`ParsedPage::structure`] to get owned, shareable data.
pub struct ParsedPage {
    pub(super) document: Html,
}

impl ParsedPage {
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        if !document.errors.is_empty() {
            log::trace!("HTML parsed with {} recoverable error(s)", document.errors.len());
        }
        Self { document }
    }

    /// Number of elements matching `selector`.
    pub fn count(&self, selector: &str) -> usize {
        let selector = parse_selector_with_fallback(selector, "element count");
        self.document.select(&selector).count()
    }

    /// Returns true if at least one element matches `selector`.
    pub fn exists(&self, selector: &str) -> bool {
        let selector = parse_selector_with_fallback(selector, "element lookup");
        self.document.select(&selector).next().is_some()
    }

    /// Trimmed text content of the first element matching `selector`.
    pub fn first_text(&self, selector: &str) -> Option<String> {
        let selector = parse_selector_with_fallback(selector, "text extraction");
        self.document
            .select(&selector)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
    }

    /// Value of `attr` on the first element matching `selector`.
    ///
    /// Returns `None` if nothing matches or the first match lacks the attribute.
    pub fn first_attr(&self, selector: &str, attr: &str) -> Option<String> {
        let selector = parse_selector_with_fallback(selector, "attribute extraction");
        self.document
            .select(&selector)
            .next()
            .and_then(|element| element.value().attr(attr))
            .map(str::to_string)
    }

    /// All elements matching `selector`, in document order.
    pub fn elements(&self, selector: &str) -> Vec<ElementRef<'_>> {
        let selector = parse_selector_with_fallback(selector, "element iteration");
        self.document.select(&selector).collect()
    }
}

impl std::fmt::Debug for ParsedPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedPage")
            .field("errors", &self.document.errors.len())
            .finish_non_exhaustive()
    }
}
