// crates/core/src/risk.rs
//! Risk override engine and score-to-tier classification.

use crate::types::{RiskLevel, WarningCode};

/// Score cap applied when any warning fired.
pub const OVERRIDE_SCORE_CAP: i64 = 450;
/// Probability floor applied when any warning fired.
pub const OVERRIDE_PROBABILITY_FLOOR: f64 = 0.70;

/// Apply the post-scoring risk override.
///
/// Any triggered warning caps the score at [`OVERRIDE_SCORE_CAP`] and
/// floors the probability at [`OVERRIDE_PROBABILITY_FLOOR`]. The override
/// is one-directional (only ever makes the outcome riskier) and
/// idempotent.
pub fn apply_overrides(points: i64, probability: f64, warnings: &[WarningCode]) -> (i64, f64) {
    if warnings.is_empty() {
        (points, probability)
    } else {
        (
            points.min(OVERRIDE_SCORE_CAP),
            probability.max(OVERRIDE_PROBABILITY_FLOOR),
        )
    }
}

/// Map the final point total to a risk tier.
///
/// Fixed breakpoints: >= 580 Low, 480-579 Medium, < 480 High.
pub fn classify(points: i64) -> RiskLevel {
    if points >= 580 {
        RiskLevel::Low
    } else if points >= 480 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}
