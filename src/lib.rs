//! Ride Telemetry
//!
//! A GPS signal-processing pipeline for cycling sessions: raw, noisy fixes
//! are gated by reported accuracy, smoothed with a per-axis Kalman filter
//! over a local tangent-plane frame, and turned into derived telemetry
//! (distance traveled, heading, elevation gain, speed).

pub mod algorithms;
pub mod api;
pub mod core;
pub mod processing;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use algorithms::{altitude_gain, altitude_gain_with_floor, bearing_degrees, distance_km};
pub use api::{TelemetryTracker, TelemetryUpdate};
pub use core::{CleanedPosition, GeoFix};
pub use processing::PositionSmoother;
pub use utils::{ConfigError, PipelineConfig};
pub use validation::AccuracyValidator;
