//! Configuration types for array generation and animation playback.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Algorithm;

/// Largest array the visualizer accepts.
pub const MAX_ARRAY_SIZE: usize = 1000;

fn default_algorithm() -> Algorithm {
    Algorithm::Merge
}

/// Top-level visualizer configuration.
///
/// Threaded explicitly through generation and playback instead of living in
/// shared module state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizerConfig {
    /// Algorithm to animate.
    #[serde(default = "default_algorithm")]
    pub algorithm: Algorithm,
    /// Demo array parameters.
    #[serde(default)]
    pub array: ArrayConfig,
    /// Playback timing and palette.
    #[serde(default)]
    pub playback: PlaybackConfig,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            array: ArrayConfig::default(),
            playback: PlaybackConfig::default(),
        }
    }
}

/// Parameters for the randomly generated demo array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayConfig {
    /// Number of bars.
    pub size: usize,
    /// Smallest generated value (inclusive).
    pub min_value: i64,
    /// Largest generated value (inclusive).
    pub max_value: i64,
    /// RNG seed for both the array and quick sort pivots (None = entropy).
    pub seed: Option<u64>,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            size: 75,
            min_value: 5,
            max_value: 500,
            seed: None,
        }
    }
}

/// Playback timing and bar colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Delay between consecutive steps in milliseconds.
    pub step_delay_ms: u64,
    /// Color used while two bars are being compared.
    pub highlight_color: String,
    /// Resting bar color.
    pub base_color: String,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: 5,
            highlight_color: "red".to_string(),
            base_color: "navy".to_string(),
        }
    }
}

impl VisualizerConfig {
    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Write configuration as pretty JSON.
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let array = &self.array;
        if array.size == 0 {
            return Err(ConfigError::EmptyArray);
        }
        if array.size > MAX_ARRAY_SIZE {
            return Err(ConfigError::ArrayTooLarge {
                size: array.size,
                max: MAX_ARRAY_SIZE,
            });
        }
        if array.min_value <= 0 {
            return Err(ConfigError::NonPositiveMinimum(array.min_value));
        }
        if array.min_value > array.max_value {
            return Err(ConfigError::InvertedRange {
                min: array.min_value,
                max: array.max_value,
            });
        }
        Ok(())
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Array size must be non-zero")]
    EmptyArray,
    #[error("Array size {size} exceeds maximum of {max}")]
    ArrayTooLarge { size: usize, max: usize },
    #[error("Minimum value must be positive, got {0}")]
    NonPositiveMinimum(i64),
    #[error("Value range is inverted: min {min} > max {max}")]
    InvertedRange { min: i64, max: i64 },
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_visualizer() {
        let config = VisualizerConfig::default();
        assert_eq!(config.array.size, 75);
        assert_eq!(config.array.min_value, 5);
        assert_eq!(config.array.max_value, 500);
        assert_eq!(config.playback.step_delay_ms, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_arrays() {
        let mut config = VisualizerConfig::default();
        config.array.size = 0;
        assert!(matches!(config.validate(), Err(ConfigError::EmptyArray)));

        config.array.size = MAX_ARRAY_SIZE + 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ArrayTooLarge { .. })
        ));

        config.array.size = 10;
        config.array.min_value = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveMinimum(0))
        ));

        config.array.min_value = 600;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange { min: 600, max: 500 })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: VisualizerConfig =
            serde_json::from_str(r#"{"algorithm": "heap", "array": {"size": 20}}"#).unwrap();
        assert_eq!(config.algorithm, Algorithm::Heap);
        assert_eq!(config.array.size, 20);
        assert_eq!(config.array.max_value, 500);
        assert_eq!(config.playback, PlaybackConfig::default());
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("visualizer.json");

        let mut config = VisualizerConfig::default();
        config.algorithm = Algorithm::Quick;
        config.array.seed = Some(7);
        config.to_json_file(&path).unwrap();

        let loaded = VisualizerConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_file_load_validates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"array": {"size": 0}}"#).unwrap();

        assert!(matches!(
            VisualizerConfig::from_json_file(&path),
            Err(ConfigError::EmptyArray)
        ));
    }
}
