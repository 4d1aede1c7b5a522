//! Answer rounding
//!
//! Generated answers are rounded for display either to a fixed number of
//! decimal places or to significant figures, matching the `n_digits` and
//! `sigfigs` fields of a problem instance.

/// Rounds to `digits` decimal places
pub fn round_to_digits(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}

/// Rounds to `sigfigs` significant figures
///
/// Zero, non-finite values, and a zero figure count pass through unchanged.
pub fn round_to_sigfigs(value: f64, sigfigs: u32) -> f64 {
    if value == 0.0 || !value.is_finite() || sigfigs == 0 {
        return value;
    }
    let magnitude = value.abs().log10().floor();
    let scale = 10f64.powf(sigfigs as f64 - 1.0 - magnitude);
    (value * scale).round() / scale
}
