//! Project snapshot - the aggregate the persistence layer reads and writes.

use serde::{Deserialize, Serialize};

use crate::canvas::PixelBuffer;

use super::{ConfigError, ProjectConfig};

/// Everything needed to save or restore an editing session: frame rate,
/// frame dimensions, and the ordered frame list.
///
/// The core owns no file format beyond these derives; the persistence
/// layer decides where and how the JSON (or anything else serde can
/// target) is stored. The frame count is `frames.len()`, not a separate
/// field that could drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectData {
    pub frame_rate: u32,
    pub width: usize,
    pub height: usize,
    pub frames: Vec<PixelBuffer>,
}

impl ProjectData {
    /// A fresh project: one blank frame at the configured size.
    pub fn new(config: &ProjectConfig) -> Self {
        Self {
            frame_rate: config.frame_rate,
            width: config.width,
            height: config.height,
            frames: vec![PixelBuffer::blank(config.width, config.height)],
        }
    }

    #[inline]
    pub fn number_of_frames(&self) -> usize {
        self.frames.len()
    }

    /// The configuration embedded in this snapshot.
    pub fn config(&self) -> ProjectConfig {
        ProjectConfig {
            width: self.width,
            height: self.height,
            frame_rate: self.frame_rate,
        }
    }

    /// Validate the snapshot: dimensions and rate must be legal, and every
    /// frame must match the stated dimensions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.config().validate()?;
        for frame in &self.frames {
            if frame.width() != self.width
                || frame.height() != self.height
                || frame.pixels().len() != self.width * self.height
            {
                return Err(ConfigError::InvalidDimensions);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Rgba;

    #[test]
    fn test_new_project_has_one_blank_frame() {
        let data = ProjectData::new(&ProjectConfig::default());
        assert_eq!(data.number_of_frames(), 1);
        assert!(data.frames[0].is_blank());
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_mismatched_frame_dimensions_rejected() {
        let mut data = ProjectData::new(&ProjectConfig::default());
        data.frames.push(PixelBuffer::blank(1, 1));
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_snapshot_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.json");

        let mut data = ProjectData::new(&ProjectConfig::default());
        data.frames[0].set(1, 1, Rgba::opaque(5, 5, 5));
        std::fs::write(&path, serde_json::to_string(&data).unwrap()).unwrap();

        let loaded: ProjectData =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(loaded.validate().is_ok());
        assert_eq!(loaded.frames[0].get(1, 1), Some(Rgba::opaque(5, 5, 5)));
    }

    #[test]
    fn test_json_roundtrip_preserves_pixels() {
        let mut data = ProjectData::new(&ProjectConfig {
            width: 4,
            height: 4,
            frame_rate: 8,
        });
        data.frames[0].set(2, 3, Rgba::opaque(9, 8, 7));

        let json = serde_json::to_string(&data).unwrap();
        let back: ProjectData = serde_json::from_str(&json).unwrap();
        assert_eq!(back.frame_rate, 8);
        assert_eq!(back.number_of_frames(), 1);
        assert_eq!(back.frames[0].get(2, 3), Some(Rgba::opaque(9, 8, 7)));
    }
}
