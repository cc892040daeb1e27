//! Frame sequence - the ordered, never-empty list of animation frames.

use crate::canvas::PixelBuffer;

/// The ordered frames of one animation plus the two cursors into it.
///
/// Frames are index-addressed; indices shift on insert and delete. Both
/// cursors stay within `[0, len - 1]` at all times, and the sequence never
/// becomes empty: deleting the last remaining frame is rejected.
#[derive(Debug, Clone)]
pub struct FrameSequence {
    frames: Vec<PixelBuffer>,
    width: usize,
    height: usize,
    edit_cursor: usize,
    play_cursor: usize,
}

impl FrameSequence {
    /// Create a sequence holding a single blank frame of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            frames: vec![PixelBuffer::blank(width, height)],
            width,
            height,
            edit_cursor: 0,
            play_cursor: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false: the sequence holds at least one frame by invariant.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn frame_width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn frame_height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn edit_cursor(&self) -> usize {
        self.edit_cursor
    }

    #[inline]
    pub fn play_cursor(&self) -> usize {
        self.play_cursor
    }

    /// The frame under the edit cursor.
    pub fn current_frame(&self) -> &PixelBuffer {
        &self.frames[self.edit_cursor]
    }

    /// The frame under the play cursor.
    pub fn playback_frame(&self) -> &PixelBuffer {
        &self.frames[self.play_cursor]
    }

    /// Append a new blank frame at the end. Cursors do not move.
    pub fn add_frame(&mut self) {
        self.frames.push(PixelBuffer::blank(self.width, self.height));
    }

    /// Insert a deep copy of the current frame immediately after it and
    /// move the edit cursor onto the copy, so the duplicate is edited next.
    pub fn copy_frame(&mut self) {
        let copy = self.frames[self.edit_cursor].clone();
        self.frames.insert(self.edit_cursor + 1, copy);
        self.edit_cursor += 1;
    }

    /// Move the edit cursor forward, clamping at the last frame. Returns
    /// the frame at the (possibly unchanged) cursor.
    pub fn next_frame(&mut self) -> &PixelBuffer {
        if self.edit_cursor + 1 < self.frames.len() {
            self.edit_cursor += 1;
        }
        &self.frames[self.edit_cursor]
    }

    /// Move the edit cursor backward, clamping at the first frame. Returns
    /// the frame at the (possibly unchanged) cursor.
    pub fn prev_frame(&mut self) -> &PixelBuffer {
        if self.edit_cursor > 0 {
            self.edit_cursor -= 1;
        }
        &self.frames[self.edit_cursor]
    }

    /// Overwrite the frame under the edit cursor with a freshly mutated
    /// buffer from the raster surface. The surface is the only writer of
    /// pixel content; this sequence is the only owner of the frame list.
    pub fn receive_updated_canvas_frame(&mut self, buffer: PixelBuffer) {
        self.frames[self.edit_cursor] = buffer;
    }

    /// Remove the frame under the edit cursor. Rejected (no-op, returns
    /// false) when only one frame remains.
    pub fn delete_current_frame(&mut self) -> bool {
        if self.frames.len() == 1 {
            log::debug!("refusing to delete the only remaining frame");
            return false;
        }
        self.frames.remove(self.edit_cursor);
        if self.edit_cursor >= self.frames.len() {
            self.edit_cursor = self.frames.len() - 1;
        }
        if self.play_cursor >= self.frames.len() {
            self.play_cursor = self.frames.len() - 1;
        }
        true
    }

    /// Advance the play cursor by one, wrapping at the end: playback loops,
    /// unlike edit navigation. Returns the frame now under the cursor.
    pub fn advance_playback(&mut self) -> &PixelBuffer {
        self.play_cursor = (self.play_cursor + 1) % self.frames.len();
        &self.frames[self.play_cursor]
    }

    /// All frames in order, for the persistence layer.
    #[inline]
    pub fn frames(&self) -> &[PixelBuffer] {
        &self.frames
    }

    /// Replace the frame list wholesale (restoring a loaded project). An
    /// empty list is rejected by substituting a single blank frame; cursors
    /// are reset to the first frame.
    pub fn restore(&mut self, frames: Vec<PixelBuffer>) {
        self.frames = if frames.is_empty() {
            log::warn!("restore with empty frame list; keeping one blank frame");
            vec![PixelBuffer::blank(self.width, self.height)]
        } else {
            frames
        };
        self.edit_cursor = 0;
        self.play_cursor = 0;
    }
}
