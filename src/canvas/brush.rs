//! Brush state: current color, block size, eraser mode.

use super::Rgba;

/// Minimum legal brush block size in pixels.
pub const MIN_BRUSH_SIZE: usize = 1;

/// The brush settings applied by every block fill.
#[derive(Debug, Clone)]
pub struct Brush {
    color: Rgba,
    size: usize,
    eraser: bool,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: Rgba::BLACK,
            size: MIN_BRUSH_SIZE,
            eraser: false,
        }
    }
}

impl Brush {
    #[inline]
    pub fn color(&self) -> Rgba {
        self.color
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_eraser(&self) -> bool {
        self.eraser
    }

    /// Set the block size. Non-positive sizes are clamped to the minimum.
    pub fn set_size(&mut self, size: isize) {
        if size < MIN_BRUSH_SIZE as isize {
            log::warn!("brush size {} clamped to {}", size, MIN_BRUSH_SIZE);
            self.size = MIN_BRUSH_SIZE;
        } else {
            self.size = size as usize;
        }
    }

    /// Choose a new brush color. Explicitly picking a color always leaves
    /// eraser mode.
    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
        self.eraser = false;
    }

    pub fn enable_eraser(&mut self) {
        self.eraser = true;
    }

    pub fn disable_eraser(&mut self) {
        self.eraser = false;
    }
}
