//! Heading between two coordinates, for marker rotation

use crate::core::types::GeoFix;

/// Heading from one fix to another in clockwise degrees, where 0° points
/// east (a marker icon drawn pointing right needs no rotation).
///
/// `atan2` measures counter-clockwise, screen rotation runs clockwise, so
/// the angle is negated. When both points coincide the heading is pinned
/// to 0° rather than relying on the platform's `atan2(0, 0)` convention.
pub fn bearing_degrees(from: &GeoFix, to: &GeoFix) -> f32 {
    let d_lat = to.latitude - from.latitude;
    let d_lon = to.longitude - from.longitude;
    if d_lat == 0.0 && d_lon == 0.0 {
        return 0.0;
    }

    -(d_lat.atan2(d_lon).to_degrees()) as f32
}
