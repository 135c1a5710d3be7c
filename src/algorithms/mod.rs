//! Stateless geodetic computations

pub mod altitude;
pub mod bearing;
pub mod distance;

pub use altitude::{altitude_gain, altitude_gain_with_floor};
pub use bearing::bearing_degrees;
pub use distance::distance_km;
