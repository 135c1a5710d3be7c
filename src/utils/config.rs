//! Pipeline configuration with JSON persistence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Tuning parameters for the telemetry pipeline.
///
/// The defaults are empirical values carried over from field tuning; none
/// of them is claimed to be physically optimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Accuracy gate: fixes reporting worse than this are dropped (meters)
    pub accuracy_threshold_m: f32,
    /// Altitude changes at or below this are treated as sensor noise (meters)
    pub altitude_noise_floor_m: f64,
    /// Kalman process noise growth rate for the stationary-position model (m²/s)
    pub process_noise_rate: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            accuracy_threshold_m: 20.0,
            altitude_noise_floor_m: 1.0,
            process_noise_rate: 3.0,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Invalid parameter value
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
    /// Configuration file I/O error
    IoError { message: String },
    /// JSON serialization/deserialization error
    SerializationError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{}' = '{}': {}", parameter, value, reason)
            }
            ConfigError::IoError { message } => write!(f, "I/O error: {}", message),
            ConfigError::SerializationError { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl PipelineConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;

        let config: PipelineConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to parse config file '{}': {}", path_str, e),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a JSON file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to serialize config: {}", e),
            })?;

        fs::write(&path, content).map_err(|e| ConfigError::IoError {
            message: format!("Failed to write config file '{}': {}", path_str, e),
        })
    }

    /// Check that all parameters are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.accuracy_threshold_m <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "accuracy_threshold_m".to_string(),
                value: self.accuracy_threshold_m.to_string(),
                reason: "Accuracy threshold must be positive".to_string(),
            });
        }

        if self.altitude_noise_floor_m < 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "altitude_noise_floor_m".to_string(),
                value: self.altitude_noise_floor_m.to_string(),
                reason: "Altitude noise floor must be non-negative".to_string(),
            });
        }

        if self.process_noise_rate <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "process_noise_rate".to_string(),
                value: self.process_noise_rate.to_string(),
                reason: "Process noise rate must be positive".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        let config = PipelineConfig::default();
        assert_eq!(config.accuracy_threshold_m, 20.0);
        assert_eq!(config.altitude_noise_floor_m, 1.0);
        assert_eq!(config.process_noise_rate, 3.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let config = PipelineConfig {
            accuracy_threshold_m: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = PipelineConfig {
            altitude_noise_floor_m: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = PipelineConfig {
            process_noise_rate: -3.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_file_round_trip() {
        let config = PipelineConfig {
            accuracy_threshold_m: 15.0,
            altitude_noise_floor_m: 2.0,
            process_noise_rate: 1.5,
        };

        let temp_path = PathBuf::from("test_pipeline_config.json");
        config.save_to_file(&temp_path).unwrap();
        let loaded = PipelineConfig::from_file(&temp_path).unwrap();
        assert_eq!(config, loaded);

        let _ = fs::remove_file(temp_path);
    }

    #[test]
    fn test_missing_file_reports_io_error() {
        let result = PipelineConfig::from_file("no_such_config.json");
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }
}
