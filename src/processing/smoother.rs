//! Kalman position smoother for horizontal GPS jitter

use nalgebra::Vector2;

use crate::core::constants::{DEFAULT_PROCESS_NOISE_RATE, METERS_PER_DEGREE_LATITUDE};
use crate::core::types::{CleanedPosition, GeoFix};

/// Session-scoped filter state, anchored at the first accepted fix.
///
/// Axis convention: x is the longitude-derived offset, y the
/// latitude-derived offset, both in meters from the reference origin.
#[derive(Debug, Clone)]
struct SmootherState {
    ref_latitude: f64,
    ref_longitude: f64,
    meters_per_degree_longitude: f64,
    last_timestamp_ms: i64,
    offset_m: Vector2<f64>,
    variance_m2: Vector2<f64>,
}

/// Per-axis Kalman filter that converts a stream of fixes into a
/// jitter-reduced position stream.
///
/// Latitude/longitude are not Euclidean, so each fix is projected into a
/// local tangent-plane frame (meters) anchored at the first fix of the
/// session, filtered as two independent 1D estimates, and projected back.
/// The process model is stationary position: uncertainty grows linearly
/// with elapsed time, and each fix is weighted by its reported accuracy.
///
/// Not safe for concurrent mutation. The caller must deliver fixes for a
/// session one at a time in non-decreasing timestamp order, and must call
/// [`reset`](Self::reset) between sessions so a new session is not
/// anchored to a stale reference point.
#[derive(Debug, Clone)]
pub struct PositionSmoother {
    process_noise_rate: f64,
    state: Option<SmootherState>,
}

impl PositionSmoother {
    /// Create a smoother with the default process noise rate (3.0 m²/s).
    pub fn new() -> Self {
        Self::with_process_noise_rate(DEFAULT_PROCESS_NOISE_RATE)
    }

    /// Create a smoother with a custom process noise rate (m²/s).
    pub fn with_process_noise_rate(process_noise_rate: f64) -> Self {
        Self {
            process_noise_rate,
            state: None,
        }
    }

    /// Filter one fix, returning the fix with smoothed latitude/longitude.
    ///
    /// Altitude, accuracy and timestamp pass through unchanged. A fix with
    /// no reported accuracy bypasses the filter entirely (there is no
    /// measurement-noise basis to weight it), leaving the state untouched.
    /// The first accepted fix of a session initializes the filter and is
    /// returned unchanged.
    pub fn smooth(&mut self, fix: &GeoFix) -> CleanedPosition {
        let accuracy = match fix.accuracy_m {
            Some(a) => a as f64,
            None => return fix.clone(),
        };

        let state = match self.state.as_mut() {
            Some(state) => state,
            None => {
                self.state = Some(SmootherState {
                    ref_latitude: fix.latitude,
                    ref_longitude: fix.longitude,
                    meters_per_degree_longitude: METERS_PER_DEGREE_LATITUDE
                        * fix.latitude.to_radians().cos(),
                    last_timestamp_ms: fix.timestamp_ms,
                    offset_m: Vector2::zeros(),
                    variance_m2: Vector2::repeat(accuracy * accuracy),
                });
                return fix.clone();
            }
        };

        let measured_m = Vector2::new(
            (fix.longitude - state.ref_longitude) * state.meters_per_degree_longitude,
            (fix.latitude - state.ref_latitude) * METERS_PER_DEGREE_LATITUDE,
        );

        // Floor of 1 ms keeps dt positive for duplicate or out-of-order
        // timestamps
        let dt_s = (fix.timestamp_ms - state.last_timestamp_ms).max(1) as f64 / 1000.0;

        // Predict: stationary position, variance grows with elapsed time
        let predicted_variance = state.variance_m2.add_scalar(self.process_noise_rate * dt_s);

        // Update: blend measurement and prediction per axis
        let measurement_noise = accuracy * accuracy;
        let gain = predicted_variance.map(|p| p / (p + measurement_noise));
        let innovation = measured_m - state.offset_m;
        state.offset_m += gain.component_mul(&innovation);
        state.variance_m2 = predicted_variance.zip_map(&gain, |p, k| (1.0 - k) * p);
        state.last_timestamp_ms = fix.timestamp_ms;

        let mut cleaned = fix.clone();
        cleaned.latitude = state.ref_latitude + state.offset_m.y / METERS_PER_DEGREE_LATITUDE;
        cleaned.longitude = state.ref_longitude + state.offset_m.x / state.meters_per_degree_longitude;
        cleaned
    }

    /// Whether the filter has anchored to a first fix since the last reset.
    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// Clear all session state. Must be called by the session owner at
    /// session start/restart.
    pub fn reset(&mut self) {
        self.state = None;
    }
}

impl Default for PositionSmoother {
    fn default() -> Self {
        Self::new()
    }
}
