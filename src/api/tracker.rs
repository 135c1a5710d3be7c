//! Session-scoped aggregation over the fix pipeline

use serde::Serialize;

use crate::algorithms::{altitude_gain_with_floor, bearing_degrees, distance_km};
use crate::core::types::{CleanedPosition, GeoFix};
use crate::processing::PositionSmoother;
use crate::utils::PipelineConfig;
use crate::validation::AccuracyValidator;

/// Telemetry derived from one accepted fix.
///
/// Increments are measured against the previous accepted point of the
/// session; totals are running sums since the last reset.
#[derive(Debug, Clone, Serialize)]
pub struct TelemetryUpdate {
    /// Smoothed position for this fix
    pub position: CleanedPosition,
    /// Distance from the previous accepted point (km), 0 for the first
    pub distance_km: f64,
    /// Total distance since session start (km)
    pub total_distance_km: f64,
    /// Heading from the previous accepted point (clockwise degrees,
    /// 0° = east); None for the first point of a session
    pub bearing_deg: Option<f32>,
    /// Elevation gained since the previous accepted point (m)
    pub altitude_gain_m: f64,
    /// Total elevation gain since session start (m)
    pub total_altitude_gain_m: f64,
    /// Instantaneous speed over the last segment (km/h); None for the
    /// first point or when timestamps do not advance
    pub speed_kmh: Option<f64>,
}

/// Drives the full pipeline for one tracking session: accuracy gate,
/// position smoothing, and the derived distance/bearing/elevation metrics
/// folded into running totals.
///
/// Holds all session state; not safe for concurrent mutation. Call
/// [`reset`](Self::reset) when a session ends or restarts.
pub struct TelemetryTracker {
    validator: AccuracyValidator,
    smoother: PositionSmoother,
    altitude_noise_floor_m: f64,
    previous: Option<CleanedPosition>,
    total_distance_km: f64,
    total_altitude_gain_m: f64,
}

impl TelemetryTracker {
    /// Create a tracker with default tuning.
    pub fn new() -> Self {
        Self::with_config(&PipelineConfig::default())
    }

    /// Create a tracker from a pipeline configuration.
    pub fn with_config(config: &PipelineConfig) -> Self {
        Self {
            validator: AccuracyValidator::with_threshold(config.accuracy_threshold_m),
            smoother: PositionSmoother::with_process_noise_rate(config.process_noise_rate),
            altitude_noise_floor_m: config.altitude_noise_floor_m,
            previous: None,
            total_distance_km: 0.0,
            total_altitude_gain_m: 0.0,
        }
    }

    /// Feed one raw fix through the pipeline.
    ///
    /// Returns None when the accuracy gate rejects the fix; rejected fixes
    /// leave all session state untouched.
    pub fn process_fix(&mut self, fix: &GeoFix) -> Option<TelemetryUpdate> {
        if !self.validator.is_valid(fix) {
            return None;
        }

        let position = self.smoother.smooth(fix);

        let (distance, bearing, gain, speed) = match self.previous.as_ref() {
            Some(prev) => {
                let distance = distance_km(
                    prev.latitude,
                    prev.longitude,
                    position.latitude,
                    position.longitude,
                );
                let bearing = bearing_degrees(prev, &position);
                let gain = altitude_gain_with_floor(
                    prev.altitude_m,
                    position.altitude_m,
                    self.altitude_noise_floor_m,
                );
                let elapsed_ms = position.timestamp_ms - prev.timestamp_ms;
                let speed = if elapsed_ms > 0 {
                    Some(distance / (elapsed_ms as f64 / 3_600_000.0))
                } else {
                    None
                };
                (distance, Some(bearing), gain, speed)
            }
            None => (0.0, None, 0.0, None),
        };

        self.total_distance_km += distance;
        self.total_altitude_gain_m += gain;
        self.previous = Some(position.clone());

        Some(TelemetryUpdate {
            position,
            distance_km: distance,
            total_distance_km: self.total_distance_km,
            bearing_deg: bearing,
            altitude_gain_m: gain,
            total_altitude_gain_m: self.total_altitude_gain_m,
            speed_kmh: speed,
        })
    }

    /// Total distance since session start (km).
    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// Total elevation gain since session start (m).
    pub fn total_altitude_gain_m(&self) -> f64 {
        self.total_altitude_gain_m
    }

    /// Clear all session state for a new session.
    pub fn reset(&mut self) {
        self.smoother.reset();
        self.previous = None;
        self.total_distance_km = 0.0;
        self.total_altitude_gain_m = 0.0;
    }
}

impl Default for TelemetryTracker {
    fn default() -> Self {
        Self::new()
    }
}
