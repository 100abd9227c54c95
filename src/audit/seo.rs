//! On-page SEO signals and the SEO score.

use log::debug;
use url::Url;

use crate::config::{
    MAX_SCORE, META_DESCRIPTION_MAX_CHARS, META_DESCRIPTION_MIN_CHARS, TITLE_MAX_CHARS,
    TITLE_MIN_CHARS,
};
use crate::models::{
    CanonicalInfo, ImageStats, LinkStats, MetaDescriptionInfo, RobotsMetaInfo, RobotsTxtInfo,
    SeoAudit, SitemapInfo, TitleInfo,
};
use crate::parse::PageStructure;
use crate::utils::clamp_score;

const MISSING_ALT_MAX_PENALTY: f64 = 15.0;

fn title_info(structure: &PageStructure) -> TitleInfo {
    match structure.title.as_deref() {
        Some(title) => {
            let length = title.chars().count();
            let score = if length < TITLE_MIN_CHARS {
                50
            } else if length > TITLE_MAX_CHARS {
                70
            } else {
                MAX_SCORE
            };
            TitleInfo {
                exists: true,
                content: title.to_string(),
                length,
                score,
            }
        }
        None => TitleInfo {
            exists: false,
            content: String::new(),
            length: 0,
            score: 0,
        },
    }
}

fn meta_description_info(structure: &PageStructure) -> MetaDescriptionInfo {
    let content = structure.meta_description.clone().unwrap_or_default();
    MetaDescriptionInfo {
        exists: !content.is_empty(),
        length: content.chars().count(),
        content,
    }
}

fn image_stats(structure: &PageStructure) -> ImageStats {
    let total = structure.images.len();
    let with_alt = structure.images.iter().filter(|img| img.has_alt()).count();
    ImageStats {
        total,
        with_alt,
        without_alt: total - with_alt,
    }
}

/// Classifies anchors by host. An href that cannot be resolved against the
/// page URL counts as internal.
fn link_stats(page_url: &Url, hrefs: &[String]) -> LinkStats {
    let page_host = page_url.host_str();
    let mut stats = LinkStats::default();

    for href in hrefs.iter().filter(|href| !href.is_empty()) {
        let internal = match page_url.join(href) {
            Ok(resolved) => resolved.host_str() == page_host,
            Err(_) => true,
        };
        if internal {
            stats.internal += 1;
        } else {
            stats.external += 1;
        }
    }
    stats
}

fn outside(length: usize, min: usize, max: usize) -> bool {
    length < min || length > max
}

fn score_seo(
    title: &TitleInfo,
    description: &MetaDescriptionInfo,
    h1_count: usize,
    images: &ImageStats,
    has_canonical: bool,
    has_sitemap: bool,
) -> u8 {
    let mut score = f64::from(MAX_SCORE);

    if !title.exists {
        score -= 25.0;
    } else if outside(title.length, TITLE_MIN_CHARS, TITLE_MAX_CHARS) {
        score -= 10.0;
    }

    if !description.exists {
        score -= 15.0;
    } else if outside(
        description.length,
        META_DESCRIPTION_MIN_CHARS,
        META_DESCRIPTION_MAX_CHARS,
    ) {
        score -= 5.0;
    }

    if h1_count == 0 {
        score -= 15.0;
    } else if h1_count > 1 {
        score -= 10.0;
    }

    if images.total > 0 && images.without_alt > 0 {
        let ratio = images.without_alt as f64 / images.total as f64;
        score -= (ratio * MISSING_ALT_MAX_PENALTY).min(MISSING_ALT_MAX_PENALTY);
    }

    if !has_canonical {
        score -= 5.0;
    }
    if !has_sitemap {
        score -= 5.0;
    }

    clamp_score(score)
}

/// Audits the on-page SEO signals of a page.
///
/// `page_url` is the URL the page was requested with; anchors are resolved
/// against it to tell internal links from external ones.
///
/// Known limitations:
/// - `alt=""` counts as missing alt text, so decorative images are penalized.
/// - Title and description lengths count Unicode scalar values (`chars`).
///   Counters that use UTF-16 code units see characters outside the Basic
///   Multilingual Plane (most emoji) as two, so such pages can land in a
///   different band near the 30/60 and 120/160 boundaries.
pub fn audit_seo(page_url: &Url, structure: &PageStructure) -> SeoAudit {
    let title = title_info(structure);
    let meta_description = meta_description_info(structure);
    let images = image_stats(structure);
    let links = link_stats(page_url, &structure.link_hrefs);

    let score = score_seo(
        &title,
        &meta_description,
        structure.headings.h1,
        &images,
        structure.canonical.exists,
        structure.sitemap.exists,
    );

    debug!(
        "SEO: title {} ({} chars), description {}, {} H1, {}/{} images with alt, {} internal / {} external links, score {}",
        title.exists,
        title.length,
        meta_description.exists,
        structure.headings.h1,
        images.with_alt,
        images.total,
        links.internal,
        links.external,
        score
    );

    SeoAudit {
        title,
        meta_description,
        headings: structure.headings,
        images,
        links,
        canonical: CanonicalInfo {
            exists: structure.canonical.exists,
            url: structure.canonical.value.clone(),
        },
        robots_meta: RobotsMetaInfo {
            exists: structure.robots_meta.exists,
            content: structure.robots_meta.value.clone(),
        },
        sitemap: SitemapInfo {
            exists: structure.sitemap.exists,
            url: structure.sitemap.value.clone(),
        },
        robots_txt: RobotsTxtInfo::default(),
        score,
    }
}
