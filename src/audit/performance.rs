//! Performance estimation.
//!
//! No browser runs here, so timings are estimated from the size of the HTML
//! and the number of sub-resources it references. The formulas are fixed so
//! that scores stay comparable between runs and with earlier reports.

use log::debug;

use crate::config::{
    BYTES_PER_LOAD_MS, CLS_GOOD, CLS_POOR, CLS_UNSIZED_IMAGE_WEIGHT, FCP_LOAD_FRACTION,
    LCP_GOOD_MS, LCP_LOAD_FRACTION, MAX_ESTIMATED_CLS, MAX_SCORE, MIN_PAGE_LOAD_TIME_MS,
    PAGE_SIZE_CRITICAL_BYTES, PAGE_SIZE_WARN_BYTES, REQUEST_COUNT_CRITICAL, REQUEST_COUNT_WARN,
    TBT_OFFSET_MS, TTI_LOAD_FRACTION,
};
use crate::models::PerformanceMetrics;
use crate::parse::PageStructure;
use crate::utils::{clamp_score, round_half_up};

// Load time bands (ms)
const LOAD_SLOW_MS: f64 = 3000.0;
const LOAD_MODERATE_MS: f64 = 2000.0;
const LOAD_FAIR_MS: f64 = 1000.0;
// LCP band below "good" that still costs points (ms)
const LCP_FAIR_MS: f64 = 1500.0;

/// Unrounded estimate; scoring works on these values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LoadEstimate {
    pub page_load_time: f64,
    pub largest_contentful_paint: f64,
    pub cumulative_layout_shift: f64,
    pub page_size: usize,
    pub number_of_requests: usize,
}

impl LoadEstimate {
    pub(crate) fn new(structure: &PageStructure, page_size: usize) -> Self {
        let page_load_time = (page_size as f64 / BYTES_PER_LOAD_MS).max(MIN_PAGE_LOAD_TIME_MS);
        Self {
            page_load_time,
            largest_contentful_paint: page_load_time * LCP_LOAD_FRACTION,
            cumulative_layout_shift: estimate_cls(structure),
            page_size,
            number_of_requests: structure.resources.total_requests(),
        }
    }
}

/// Layout shift grows with the share of images that declare no dimensions.
fn estimate_cls(structure: &PageStructure) -> f64 {
    let total = structure.images.len();
    if total == 0 {
        return 0.0;
    }
    let unsized_images = structure.images.iter().filter(|img| img.is_unsized()).count();
    (unsized_images as f64 / total as f64 * CLS_UNSIZED_IMAGE_WEIGHT).min(MAX_ESTIMATED_CLS)
}

/// Scores an estimate. Each metric is penalized independently; within a
/// metric only the worst band applies.
pub(crate) fn score_estimate(estimate: &LoadEstimate) -> u8 {
    let mut score = f64::from(MAX_SCORE);

    score -= if estimate.page_load_time > LOAD_SLOW_MS {
        30.0
    } else if estimate.page_load_time > LOAD_MODERATE_MS {
        20.0
    } else if estimate.page_load_time > LOAD_FAIR_MS {
        10.0
    } else {
        0.0
    };

    score -= if estimate.largest_contentful_paint > LCP_GOOD_MS as f64 {
        20.0
    } else if estimate.largest_contentful_paint > LCP_FAIR_MS {
        10.0
    } else {
        0.0
    };

    score -= if estimate.cumulative_layout_shift > CLS_POOR {
        20.0
    } else if estimate.cumulative_layout_shift > CLS_GOOD {
        10.0
    } else {
        0.0
    };

    score -= if estimate.page_size > PAGE_SIZE_CRITICAL_BYTES {
        15.0
    } else if estimate.page_size > PAGE_SIZE_WARN_BYTES {
        10.0
    } else {
        0.0
    };

    score -= if estimate.number_of_requests > REQUEST_COUNT_CRITICAL {
        10.0
    } else if estimate.number_of_requests > REQUEST_COUNT_WARN {
        5.0
    } else {
        0.0
    };

    clamp_score(score)
}

fn to_ms(value: f64) -> u64 {
    round_half_up(value.max(0.0)) as u64
}

/// Estimates load metrics and the performance score.
///
/// # Arguments
///
/// * `structure` - Extracted page signals (resource references, images)
/// * `page_size` - Byte length of the decoded HTML
pub fn audit_performance(structure: &PageStructure, page_size: usize) -> PerformanceMetrics {
    let estimate = LoadEstimate::new(structure, page_size);
    let score = score_estimate(&estimate);
    let load = estimate.page_load_time;

    let metrics = PerformanceMetrics {
        page_load_time: to_ms(load),
        first_contentful_paint: to_ms(load * FCP_LOAD_FRACTION),
        largest_contentful_paint: to_ms(estimate.largest_contentful_paint),
        time_to_interactive: to_ms(load * TTI_LOAD_FRACTION),
        total_blocking_time: to_ms(load - TBT_OFFSET_MS),
        cumulative_layout_shift: round_half_up(estimate.cumulative_layout_shift * 100.0) / 100.0,
        page_size,
        number_of_requests: estimate.number_of_requests,
        score,
    };

    debug!(
        "Performance: load {}ms, LCP {}ms, CLS {}, {} request(s), score {}",
        metrics.page_load_time,
        metrics.largest_contentful_paint,
        metrics.cumulative_layout_shift,
        metrics.number_of_requests,
        metrics.score
    );
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{ImageTag, ResourceCounts};

    fn unsized_image() -> ImageTag {
        ImageTag {
            src: Some("a.png".to_string()),
            ..Default::default()
        }
    }

    fn sized_image() -> ImageTag {
        ImageTag {
            src: Some("b.png".to_string()),
            alt: Some("b".to_string()),
            width: Some("10".to_string()),
            height: Some("10".to_string()),
        }
    }

    fn structure_with(images: Vec<ImageTag>, resources: ResourceCounts) -> PageStructure {
        PageStructure {
            images,
            resources,
            ..Default::default()
        }
    }

    #[test]
    fn test_small_page_uses_load_time_floor() {
        let metrics = audit_performance(&PageStructure::default(), 20_000);

        assert_eq!(metrics.page_load_time, 500);
        assert_eq!(metrics.first_contentful_paint, 150);
        assert_eq!(metrics.largest_contentful_paint, 300);
        assert_eq!(metrics.time_to_interactive, 400);
        assert_eq!(metrics.total_blocking_time, 200);
        assert_eq!(metrics.cumulative_layout_shift, 0.0);
        assert_eq!(metrics.page_size, 20_000);
        assert_eq!(metrics.number_of_requests, 1);
        assert_eq!(metrics.score, 100);
    }

    #[test]
    fn test_timings_scale_with_size() {
        // 25 MB => 2500 ms load
        let metrics = audit_performance(&PageStructure::default(), 25_000_000);
        assert_eq!(metrics.page_load_time, 2500);
        assert_eq!(metrics.first_contentful_paint, 750);
        assert_eq!(metrics.largest_contentful_paint, 1500);
        assert_eq!(metrics.time_to_interactive, 2000);
        assert_eq!(metrics.total_blocking_time, 2200);
        // load > 2000 (-20), LCP not > 1500, size > 5 MB (-15)
        assert_eq!(metrics.score, 65);
    }

    #[test]
    fn test_heavy_page_penalties_accumulate() {
        // 45 MB => load 4500, LCP 2700
        let metrics = audit_performance(&PageStructure::default(), 45_000_000);
        // -30 load, -20 LCP, -15 size
        assert_eq!(metrics.score, 35);
    }

    #[test]
    fn test_cls_for_all_unsized_images() {
        let structure = structure_with(vec![unsized_image(); 4], ResourceCounts::default());
        let metrics = audit_performance(&structure, 1000);
        assert_eq!(metrics.cumulative_layout_shift, 0.3);
        // CLS > 0.25
        assert_eq!(metrics.score, 80);
    }

    #[test]
    fn test_cls_is_rounded_to_two_decimals() {
        // 1 of 3 unsized => 0.1 exactly; 2 of 3 => 0.2
        let structure = structure_with(
            vec![unsized_image(), sized_image(), sized_image()],
            ResourceCounts::default(),
        );
        assert_eq!(audit_performance(&structure, 1000).cumulative_layout_shift, 0.1);

        let structure = structure_with(
            vec![unsized_image(), unsized_image(), sized_image()],
            ResourceCounts::default(),
        );
        let metrics = audit_performance(&structure, 1000);
        assert_eq!(metrics.cumulative_layout_shift, 0.2);
        assert_eq!(metrics.score, 90);
    }

    #[test]
    fn test_image_with_only_width_is_not_unsized() {
        let half_sized = ImageTag {
            width: Some("10".to_string()),
            ..Default::default()
        };
        let structure = structure_with(vec![half_sized], ResourceCounts::default());
        assert_eq!(audit_performance(&structure, 1000).cumulative_layout_shift, 0.0);
    }

    #[test]
    fn test_request_count_penalties() {
        let many = ResourceCounts {
            scripts: 30,
            stylesheets: 10,
            images: 10,
            fonts: 0,
        };
        // 51 requests
        let metrics = audit_performance(&structure_with(vec![], many), 1000);
        assert_eq!(metrics.number_of_requests, 51);
        assert_eq!(metrics.score, 95);

        let too_many = ResourceCounts {
            scripts: 100,
            ..Default::default()
        };
        let metrics = audit_performance(&structure_with(vec![], too_many), 1000);
        assert_eq!(metrics.number_of_requests, 101);
        assert_eq!(metrics.score, 90);
    }

    #[test]
    fn test_score_is_non_increasing_in_page_size() {
        let structure = structure_with(vec![unsized_image(), sized_image()], ResourceCounts::default());
        let mut previous = u8::MAX;
        for page_size in (0..=60_000_000).step_by(250_000) {
            let score = score_estimate(&LoadEstimate::new(&structure, page_size));
            assert!(
                score <= previous,
                "score rose from {previous} to {score} at {page_size} bytes"
            );
            previous = score;
        }
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let structure = structure_with(vec![unsized_image()], ResourceCounts::default());
        assert_eq!(
            audit_performance(&structure, 3_141_592),
            audit_performance(&structure, 3_141_592)
        );
    }
}
