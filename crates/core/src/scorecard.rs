// crates/core/src/scorecard.rs
//! Log-odds → scorecard point conversion.

/// Lowest point total ever produced by the scorecard.
pub const MIN_POINTS: i64 = 356;
/// Highest point total ever produced by the scorecard.
pub const MAX_POINTS: i64 = 671;

/// Convert log-odds to integer scorecard points.
///
/// `points = offset + factor × (−log_odds)`: higher default risk means
/// fewer points. The fractional result is rounded half-up (locked by a
/// golden test in `engine::tests`) and clamped to
/// [`MIN_POINTS`, `MAX_POINTS`]. Clamping keeps extreme inputs ordered
/// without ever surfacing an out-of-range score.
pub fn to_points(log_odds: f64, factor: f64, offset: f64) -> i64 {
    let raw = offset + factor * (-log_odds);
    round_half_up(raw).clamp(MIN_POINTS, MAX_POINTS)
}

/// Round half-up: exactly .5 always rounds toward positive infinity.
fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}
