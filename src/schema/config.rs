//! Configuration types for a flipbook project.

use serde::{Deserialize, Serialize};

/// Top-level project configuration: the fixed frame dimensions and the
/// playback rate an editor session starts with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Frame width in pixels.
    pub width: usize,
    /// Frame height in pixels.
    pub height: usize,
    /// Playback rate in frames per second.
    pub frame_rate: u32,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            width: 32,
            height: 32,
            frame_rate: 12,
        }
    }
}

impl ProjectConfig {
    /// Total pixel count of one frame.
    #[inline]
    pub fn frame_size(&self) -> usize {
        self.width * self.height
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::InvalidFrameRate);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Frame dimensions (width, height) must be non-zero")]
    InvalidDimensions,
    #[error("Frame rate must be positive")]
    InvalidFrameRate,
}
