//! Physical constants and tuning parameters

/// Mean Earth radius (km), used by the haversine distance calculation
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Meters per degree of latitude (also per degree of longitude at the
/// equator); the longitude scale shrinks with cos(latitude)
pub const METERS_PER_DEGREE_LATITUDE: f64 = 111_320.0;

/// Default accuracy gate: fixes reporting worse than this are dropped (m)
pub const DEFAULT_ACCURACY_THRESHOLD_M: f32 = 20.0;

/// Default altitude noise floor: climbs at or below this are treated as
/// sensor flicker, not gain (m)
pub const DEFAULT_ALTITUDE_NOISE_FLOOR_M: f64 = 1.0;

/// Default Kalman process noise growth rate for a stationary-position
/// model (m²/s). Empirical; no derivation is claimed.
pub const DEFAULT_PROCESS_NOISE_RATE: f64 = 3.0;
