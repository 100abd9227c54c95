//! Extraction of the page signals the auditors score.

use std::sync::LazyLock;

use scraper::Selector;

use super::document::ParsedPage;
use crate::models::HeadingCounts;
use crate::utils::parse_selector_unsafe;

static SCRIPT_SRC_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("script[src]", "SCRIPT_SRC_SELECTOR"));
static STYLESHEET_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(r#"link[rel="stylesheet"]"#, "STYLESHEET_SELECTOR"));
static IMG_SRC_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("img[src]", "IMG_SRC_SELECTOR"));
static FONT_LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(r#"link[rel*="font"]"#, "FONT_LINK_SELECTOR"));
static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("img", "IMG_SELECTOR"));
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("a[href]", "ANCHOR_SELECTOR"));
static HEADING_SELECTORS: LazyLock<[Selector; 6]> = LazyLock::new(|| {
    ["h1", "h2", "h3", "h4", "h5", "h6"].map(|tag| parse_selector_unsafe(tag, "HEADING_SELECTORS"))
});

const TITLE_SELECTOR_STR: &str = "title";
const META_DESCRIPTION_SELECTOR_STR: &str = r#"meta[name="description"]"#;
const META_VIEWPORT_SELECTOR_STR: &str = r#"meta[name="viewport"]"#;
const META_ROBOTS_SELECTOR_STR: &str = r#"meta[name="robots"]"#;
const CANONICAL_SELECTOR_STR: &str = r#"link[rel="canonical"]"#;
const SITEMAP_SELECTOR_STR: &str = r#"link[rel="sitemap"]"#;

/// Sub-resource references that each cost one request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResourceCounts {
    /// `script[src]`
    pub scripts: usize,
    /// `link[rel="stylesheet"]`
    pub stylesheets: usize,
    /// `img[src]`
    pub images: usize,
    /// `link[rel*="font"]`
    pub fonts: usize,
}

impl ResourceCounts {
    /// Sub-resources plus the HTML document itself.
    pub fn total_requests(&self) -> usize {
        self.scripts + self.stylesheets + self.images + self.fonts + 1
    }
}

/// An `<img>` element and the attributes the auditors look at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageTag {
    pub src: Option<String>,
    pub alt: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
}

impl ImageTag {
    /// `alt=""` counts as missing. Decorative images legitimately use an empty
    /// alt, so this over-reports; kept for score compatibility.
    pub fn has_alt(&self) -> bool {
        self.alt.as_deref().is_some_and(|alt| !alt.is_empty())
    }

    /// True if neither `width` nor `height` is declared.
    pub fn is_unsized(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }
}

/// A tag that may be present, with its raw value (an empty value reads as `None`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagValue {
    pub exists: bool,
    pub value: Option<String>,
}

impl TagValue {
    fn from_lookup(exists: bool, value: Option<String>) -> Self {
        Self {
            exists,
            value: value.filter(|v| !v.is_empty()),
        }
    }
}

/// Owned snapshot of the page signals, shareable across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageStructure {
    pub resources: ResourceCounts,
    /// Trimmed text of the first `<title>`; `None` if absent or blank
    pub title: Option<String>,
    /// `content` of the first `meta[name="description"]`, untrimmed
    pub meta_description: Option<String>,
    pub has_viewport: bool,
    pub robots_meta: TagValue,
    pub canonical: TagValue,
    pub sitemap: TagValue,
    pub headings: HeadingCounts,
    pub images: Vec<ImageTag>,
    /// Every `a[href]` value in document order
    pub link_hrefs: Vec<String>,
}

impl ParsedPage {
    /// Extracts every signal used by the performance, SEO and technical audits.
    pub fn structure(&self) -> PageStructure {
        let document = &self.document;

        let resources = ResourceCounts {
            scripts: document.select(&SCRIPT_SRC_SELECTOR).count(),
            stylesheets: document.select(&STYLESHEET_SELECTOR).count(),
            images: document.select(&IMG_SRC_SELECTOR).count(),
            fonts: document.select(&FONT_LINK_SELECTOR).count(),
        };

        let [h1, h2, h3, h4, h5, h6] =
            HEADING_SELECTORS.each_ref().map(|selector| document.select(selector).count());

        let images = document
            .select(&IMG_SELECTOR)
            .map(|img| {
                let attr = |name: &str| img.value().attr(name).map(str::to_string);
                ImageTag {
                    src: attr("src"),
                    alt: attr("alt"),
                    width: attr("width"),
                    height: attr("height"),
                }
            })
            .collect();

        let link_hrefs = document
            .select(&ANCHOR_SELECTOR)
            .filter_map(|a| a.value().attr("href"))
            .map(str::to_string)
            .collect();

        let structure = PageStructure {
            resources,
            title: self
                .first_text(TITLE_SELECTOR_STR)
                .filter(|title| !title.is_empty()),
            meta_description: self.first_attr(META_DESCRIPTION_SELECTOR_STR, "content"),
            has_viewport: self.exists(META_VIEWPORT_SELECTOR_STR),
            robots_meta: TagValue::from_lookup(
                self.exists(META_ROBOTS_SELECTOR_STR),
                self.first_attr(META_ROBOTS_SELECTOR_STR, "content"),
            ),
            canonical: TagValue::from_lookup(
                self.exists(CANONICAL_SELECTOR_STR),
                self.first_attr(CANONICAL_SELECTOR_STR, "href"),
            ),
            sitemap: TagValue::from_lookup(
                self.exists(SITEMAP_SELECTOR_STR),
                self.first_attr(SITEMAP_SELECTOR_STR, "href"),
            ),
            headings: HeadingCounts {
                h1,
                h2,
                h3,
                h4,
                h5,
                h6,
            },
            images,
            link_hrefs,
        };

        log::debug!(
            "Extracted structure: {} request(s), {} image(s), {} link(s), title present: {}",
            structure.resources.total_requests(),
            structure.images.len(),
            structure.link_hrefs.len(),
            structure.title.is_some()
        );
        structure
    }
}
