//! Configuration types for editor sessions and image export.

use serde::{Deserialize, Serialize};

use crate::animation::DEFAULT_FPS;
use crate::encode::OutputMode;
use crate::store::{DEFAULT_COLS, DEFAULT_ROWS, Dimensions, MAX_DIMENSION};

fn default_fps() -> u32 {
    DEFAULT_FPS
}

/// Top-level editor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Rows of a new animation.
    pub rows: usize,
    /// Columns of a new animation.
    pub cols: usize,
    /// Playback speed in frames per second.
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// Output buffer layout used on export.
    #[serde(default)]
    pub output: OutputMode,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            fps: DEFAULT_FPS,
            output: OutputMode::Variable,
        }
    }
}

impl EditorConfig {
    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.rows, self.cols)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let in_range = |v: usize| (1..=MAX_DIMENSION).contains(&v);
        if !in_range(self.rows) || !in_range(self.cols) {
            return Err(ConfigError::InvalidDimensions);
        }
        if self.fps == 0 {
            return Err(ConfigError::InvalidFrameRate);
        }
        if self.output == OutputMode::FixedCapacity(0) {
            return Err(ConfigError::InvalidCapacity);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions (rows, cols) must be between 1 and {}", MAX_DIMENSION)]
    InvalidDimensions,
    #[error("Frame rate must be non-zero")]
    InvalidFrameRate,
    #[error("Fixed output capacity must be non-zero")]
    InvalidCapacity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = EditorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dimensions(), Dimensions::new(8, 32));
        assert_eq!(config.fps, 5);
    }

    #[test]
    fn test_validate_rejects_zeroes() {
        let config = EditorConfig {
            rows: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidDimensions)));

        let config = EditorConfig {
            cols: MAX_DIMENSION + 1,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidDimensions)));

        let config = EditorConfig {
            fps: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidFrameRate)));

        let config = EditorConfig {
            output: OutputMode::FixedCapacity(0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidCapacity)));
    }

    #[test]
    fn test_optional_fields_default() {
        let config: EditorConfig = serde_json::from_str(r#"{"rows": 16, "cols": 16}"#).unwrap();
        assert_eq!(config.fps, DEFAULT_FPS);
        assert_eq!(config.output, OutputMode::Variable);
    }

    #[test]
    fn test_fixed_output_parses() {
        let config: EditorConfig = serde_json::from_str(
            r#"{"rows": 8, "cols": 8, "fps": 10, "output": {"type": "FixedCapacity", "capacity": 8192}}"#,
        )
        .unwrap();
        assert_eq!(config.output, OutputMode::eeprom());
    }
}
