//! Accuracy gate for incoming fixes

use crate::core::constants::DEFAULT_ACCURACY_THRESHOLD_M;
use crate::core::types::GeoFix;

/// Stateless gate deciding whether a fix is trustworthy enough to enter
/// the pipeline at all.
///
/// A fix with no reported accuracy is trusted by default: there is no
/// basis to reject it. A reported accuracy must be at or below the
/// threshold (the boundary value is valid).
#[derive(Debug, Clone)]
pub struct AccuracyValidator {
    threshold_m: f32,
}

impl AccuracyValidator {
    /// Create a validator with the default 20 m threshold.
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_ACCURACY_THRESHOLD_M)
    }

    /// Create a validator with a custom threshold (meters).
    pub fn with_threshold(threshold_m: f32) -> Self {
        Self { threshold_m }
    }

    /// Whether the fix passes the accuracy gate.
    pub fn is_valid(&self, fix: &GeoFix) -> bool {
        match fix.accuracy_m {
            Some(accuracy) => accuracy <= self.threshold_m,
            None => true,
        }
    }
}

impl Default for AccuracyValidator {
    fn default() -> Self {
        Self::new()
    }
}
