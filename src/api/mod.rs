//! Caller-facing session API

pub mod tracker;

pub use tracker::{TelemetryTracker, TelemetryUpdate};
