//! Core data types and constants

pub mod constants;
pub mod types;

pub use constants::{
    DEFAULT_ACCURACY_THRESHOLD_M, DEFAULT_ALTITUDE_NOISE_FLOOR_M, DEFAULT_PROCESS_NOISE_RATE,
    EARTH_RADIUS_KM, METERS_PER_DEGREE_LATITUDE,
};
pub use types::{CleanedPosition, GeoFix};
