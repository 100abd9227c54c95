//! Utility functions.
//!
//! This module provides:
//! - CSS selector parsing utilities
//! - Score arithmetic shared by the auditors

mod score;
mod selector;

pub use score::{clamp_score, round_half_up};
pub use selector::{parse_selector_unsafe, parse_selector_with_fallback};
