//! Capped, rounded tier scores.

/// `min(1.0, weight × count)`, rounded to `precision` decimals.
///
/// Rounding keeps sums like 3 × 0.15 comparable with their decimal literal.
pub fn capped_score(count: u32, weight: f64, precision: i32) -> f64 {
    let raw = (weight * f64::from(count)).clamp(0.0, 1.0);
    round_to(raw, precision)
}

pub fn round_to(value: f64, precision: i32) -> f64 {
    let factor = 10f64.powi(precision.clamp(0, 12));
    (value * factor).round() / factor
}
