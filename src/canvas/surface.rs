//! Raster surface - converts pointer gestures into block fills on the
//! active frame's pixel buffer.
//!
//! The surface is displayed as a scaled view: the widget showing it may be
//! larger or smaller than the underlying buffer, so pointer coordinates
//! arrive in display space and are mapped back to buffer space before
//! painting. Block fills are snapped to a grid whose pitch is the brush
//! size, which keeps strokes pixel-art-aligned at every zoom level.

use super::{Brush, ColorHistory, PixelBuffer, Rgba};

/// A pointer position in display coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The drawing surface: one active pixel buffer plus brush state.
///
/// The surface only ever holds the frame currently being edited (or shown
/// during playback); the frame sequence itself lives in the timeline.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    buffer: PixelBuffer,
    brush: Brush,
    history: ColorHistory,
    display_width: f32,
    display_height: f32,
    drawing: bool,
    can_draw: bool,
    last_pos: Point,
}

impl RasterSurface {
    /// Create a surface over a blank buffer, displayed at 1:1 scale.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            buffer: PixelBuffer::blank(width, height),
            brush: Brush::default(),
            history: ColorHistory::new(),
            display_width: width as f32,
            display_height: height as f32,
            drawing: false,
            can_draw: true,
            last_pos: Point::default(),
        }
    }

    /// Begin a stroke at `point`. Only valid while drawing is enabled and
    /// no stroke is in progress; returns whether a stroke actually started,
    /// so the caller can snapshot the frame that is about to change.
    pub fn begin_stroke(&mut self, point: Point) -> bool {
        if !self.can_draw || self.drawing {
            return false;
        }
        self.drawing = true;
        self.last_pos = point;
        true
    }

    /// Extend the in-progress stroke to `point`, painting one brush block.
    /// Returns whether the buffer was mutated.
    pub fn continue_stroke(&mut self, point: Point) -> bool {
        if !self.drawing || !self.can_draw {
            return false;
        }
        self.paint_at(point);
        self.last_pos = point;
        true
    }

    /// Finish the stroke, painting one final block at `point`. Returns
    /// whether the buffer was mutated.
    pub fn end_stroke(&mut self, point: Point) -> bool {
        if !self.drawing || !self.can_draw {
            self.drawing = false;
            return false;
        }
        self.paint_at(point);
        self.last_pos = point;
        self.drawing = false;
        true
    }

    /// Map a display-space point to buffer space, snap it to the brush
    /// grid, and fill (or erase) one block there.
    ///
    /// Scale factors are display / buffer per axis; the buffer coordinate
    /// is the pointer divided by the scale, clamped into the buffer, and
    /// the block origin is floor-snapped to the nearest multiple of the
    /// brush size. This is deliberately not round-to-nearest-pixel
    /// painting.
    fn paint_at(&mut self, point: Point) {
        let size = self.brush.size();

        let x_scale = self.display_width / self.buffer.width() as f32;
        let y_scale = self.display_height / self.buffer.height() as f32;

        let buf_x = (point.x / x_scale)
            .clamp(0.0, self.buffer.width().saturating_sub(1) as f32);
        let buf_y = (point.y / y_scale)
            .clamp(0.0, self.buffer.height().saturating_sub(1) as f32);

        let cell_x = size * (buf_x as usize / size);
        let cell_y = size * (buf_y as usize / size);

        if self.brush.is_eraser() {
            self.buffer.clear_block(cell_x, cell_y, size);
        } else {
            self.buffer.fill_block(cell_x, cell_y, size, self.brush.color());
        }
    }

    /// Replace the active buffer (the timeline moved its cursor or pushed
    /// a playback frame).
    pub fn load_frame(&mut self, buffer: PixelBuffer) {
        self.buffer = buffer;
    }

    /// The active buffer, read by the display backend and flushed to the
    /// timeline after stroke mutations.
    #[inline]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Set the size of the scaled view the pointer coordinates live in.
    /// Non-positive dimensions are ignored.
    pub fn set_display_size(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.display_width = width;
            self.display_height = height;
        } else {
            log::warn!("ignoring non-positive display size {}x{}", width, height);
        }
    }

    /// Enable or disable drawing. Playback disables it for its duration.
    pub fn set_can_draw(&mut self, can_draw: bool) {
        self.can_draw = can_draw;
        if !can_draw {
            self.drawing = false;
        }
    }

    #[inline]
    pub fn can_draw(&self) -> bool {
        self.can_draw
    }

    #[inline]
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    #[inline]
    pub fn last_pos(&self) -> Point {
        self.last_pos
    }

    pub fn set_brush_size(&mut self, size: isize) {
        self.brush.set_size(size);
    }

    /// Set the brush color without touching the history (tool selection,
    /// not a picker choice). Leaves eraser mode.
    pub fn select_color(&mut self, color: Rgba) {
        self.brush.set_color(color);
    }

    pub fn enable_eraser(&mut self) {
        self.brush.enable_eraser();
    }

    pub fn disable_eraser(&mut self) {
        self.brush.disable_eraser();
    }

    /// Accept a color from the picker dialog: set it as the brush color,
    /// leave eraser mode, record it in the history, and return the full
    /// ordered slot list for the display layer to render.
    pub fn pick_color(&mut self, color: Rgba) -> &[Rgba] {
        self.brush.set_color(color);
        self.history.insert(color);
        self.history.slots()
    }

    /// Re-select a color from a history slot (0 = most recent). A slot
    /// that is not filled is a no-op.
    pub fn select_from_history(&mut self, slot: usize) {
        match self.history.get(slot) {
            Some(color) => self.brush.set_color(color),
            None => log::debug!("history slot {} is empty", slot),
        }
    }

    #[inline]
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    #[inline]
    pub fn history(&self) -> &ColorHistory {
        &self.history
    }
}
