//! Thresholded elevation gain between two altitude readings

use crate::core::constants::DEFAULT_ALTITUDE_NOISE_FLOOR_M;

/// Elevation gain between two altitude readings, in meters.
///
/// Returns 0 when either reading is absent, when the climb does not exceed
/// the noise floor (strict `>`, so a diff of exactly the floor is
/// rejected), and on any descent. The caller owns the running total.
pub fn altitude_gain_with_floor(
    previous_m: Option<f64>,
    current_m: Option<f64>,
    noise_floor_m: f64,
) -> f64 {
    let (previous, current) = match (previous_m, current_m) {
        (Some(p), Some(c)) => (p, c),
        _ => return 0.0,
    };

    let diff = current - previous;
    if diff > noise_floor_m {
        diff
    } else {
        0.0
    }
}

/// [`altitude_gain_with_floor`] with the default 1 m noise floor.
pub fn altitude_gain(previous_m: Option<f64>, current_m: Option<f64>) -> f64 {
    altitude_gain_with_floor(previous_m, current_m, DEFAULT_ALTITUDE_NOISE_FLOOR_M)
}
