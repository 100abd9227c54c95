//! Score arithmetic.

use crate::config::MAX_SCORE;

/// Rounds to the nearest integer, halves towards positive infinity.
///
/// `f64::round` rounds halves away from zero, which only differs for
/// negative inputs.
pub fn round_half_up(value: f64) -> f64 {
    if value >= 0.0 {
        value.round()
    } else {
        (value + 0.5).floor()
    }
}

/// Clamps a penalty-adjusted score to `[0, 100]` and rounds it.
pub fn clamp_score(score: f64) -> u8 {
    let clamped = score.clamp(0.0, f64::from(MAX_SCORE));
    // In range after the clamp, the cast cannot truncate
    round_half_up(clamped) as u8
}
