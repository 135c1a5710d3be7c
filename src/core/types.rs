//! Core data types for the telemetry pipeline

use serde::{Deserialize, Serialize};

/// A single raw reading from a location provider.
///
/// Altitude and accuracy are optional because not every provider reports
/// them; absence is semantically different from zero and is preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoFix {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Altitude above sea level in meters, if reported
    pub altitude_m: Option<f64>,
    /// Horizontal accuracy estimate in meters, if reported
    pub accuracy_m: Option<f32>,
    /// Unix timestamp in milliseconds
    pub timestamp_ms: i64,
}

impl GeoFix {
    pub fn new(latitude: f64, longitude: f64, timestamp_ms: i64) -> Self {
        Self {
            latitude,
            longitude,
            altitude_m: None,
            accuracy_m: None,
            timestamp_ms,
        }
    }

    pub fn with_accuracy(mut self, accuracy_m: f32) -> Self {
        self.accuracy_m = Some(accuracy_m);
        self
    }

    pub fn with_altitude(mut self, altitude_m: f64) -> Self {
        self.altitude_m = Some(altitude_m);
        self
    }
}

/// A fix whose latitude/longitude have been passed through the position
/// smoother. Altitude, accuracy and timestamp are carried over unchanged;
/// only the horizontal position is filtered.
pub type CleanedPosition = GeoFix;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_optional_fields() {
        let fix = GeoFix::new(52.52, 13.405, 1000);
        assert!(fix.altitude_m.is_none());
        assert!(fix.accuracy_m.is_none());

        let fix = fix.with_accuracy(5.0).with_altitude(34.0);
        assert_eq!(fix.accuracy_m, Some(5.0));
        assert_eq!(fix.altitude_m, Some(34.0));
    }

    #[test]
    fn test_fix_serialization_round_trip() {
        let fix = GeoFix::new(48.1351, 11.582, 1234567890)
            .with_accuracy(12.5)
            .with_altitude(519.0);

        let json = serde_json::to_string(&fix).unwrap();
        let back: GeoFix = serde_json::from_str(&json).unwrap();
        assert_eq!(fix, back);
    }
}
