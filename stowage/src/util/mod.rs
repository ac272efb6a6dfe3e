/// Tolerance used when testing whether a unit fits against a container face.
pub const EPS: f64 = 1e-9;

/// Rounds a value to two decimal places.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// `num / denom` as a percentage, rounded to two decimals.
/// Returns 0.00 when the denominator is zero, so degenerate inputs
/// (no items, zero-volume container) never divide-fault.
pub fn pct(num: f64, denom: f64) -> f64 {
    match denom > 0.0 {
        true => round2(num / denom * 100.0),
        false => 0.0,
    }
}
