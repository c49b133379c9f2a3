//! Shared angular and ratio helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if r >= 360.0 { 0.0 } else { r }
}

/// Shortest arc between two longitudes, in [0, 180].
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let d = normalize_360(a - b);
    if d > 180.0 { 360.0 - d } else { d }
}

/// `100 * numerator / denominator`, or `sentinel` when the denominator is zero
/// or the result would not be finite.
pub fn percentage_or(numerator: f64, denominator: f64, sentinel: f64) -> f64 {
    if denominator == 0.0 {
        return sentinel;
    }
    let pct = 100.0 * numerator / denominator;
    if pct.is_finite() { pct } else { sentinel }
}

/// Arithmetic mean, or `sentinel` for an empty slice.
pub fn mean_or(values: &[f64], sentinel: f64) -> f64 {
    if values.is_empty() {
        return sentinel;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
