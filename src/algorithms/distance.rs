//! Great-circle distance between two coordinates

use crate::core::constants::EARTH_RADIUS_KM;

/// Haversine great-circle distance between two points, in kilometers.
///
/// Inputs are decimal degrees. Total over valid latitude/longitude ranges:
/// identical points yield exactly 0 and the result is never negative.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
