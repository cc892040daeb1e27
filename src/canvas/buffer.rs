//! Pixel buffer - the raster content of a single frame.

use serde::{Deserialize, Serialize};

/// An RGBA color value with 8 bits per component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent (the blank-frame fill and the eraser result).
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    /// Opaque black, the default brush color.
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB components.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Canonical integer packing (0xRRGGBBAA), used as the color's
    /// identity in set membership checks.
    #[inline]
    pub const fn pack(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::TRANSPARENT
    }
}

/// A width x height grid of RGBA pixels - one frame's raster content.
///
/// Data is stored as a flat row-major array with indexing `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    /// Create a blank (fully transparent) buffer.
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Convert (x, y) coordinates to flat index.
    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get the pixel at (x, y), or `None` outside the buffer.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.idx(x, y)])
        } else {
            None
        }
    }

    /// Set the pixel at (x, y). Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, color: Rgba) {
        if x < self.width && y < self.height {
            let idx = self.idx(x, y);
            self.pixels[idx] = color;
        }
    }

    /// Fill a `size` x `size` block whose top-left corner is (x, y).
    ///
    /// The block is clipped to the buffer; the fill never writes outside it.
    pub fn fill_block(&mut self, x: usize, y: usize, size: usize, color: Rgba) {
        let x_start = x.min(self.width);
        let x_end = (x.saturating_add(size)).min(self.width);
        let y_end = (y.saturating_add(size)).min(self.height);
        for row in y..y_end {
            let start = row * self.width + x_start;
            let end = row * self.width + x_end;
            self.pixels[start..end].fill(color);
        }
    }

    /// Clear a `size` x `size` block to fully transparent (erase, not
    /// paint-white).
    pub fn clear_block(&mut self, x: usize, y: usize, size: usize) {
        self.fill_block(x, y, size, Rgba::TRANSPARENT);
    }

    /// True if every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|p| *p == Rgba::TRANSPARENT)
    }

    /// Raw pixel slice in row-major order, for display backends.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }
}
