//! Editor session - wires the raster surface to the timeline.
//!
//! All input arrives serially on one logical thread: pointer events go to
//! the surface, navigation and timer ticks go to the timeline, and this
//! type keeps the two consistent. In particular it preserves the ordering
//! guarantee that a stroke's mutation is flushed into the frame store
//! before any navigation reads that frame back out.

use crate::canvas::{Point, RasterSurface};
use crate::schema::{ConfigError, ProjectConfig, ProjectData};
use crate::timeline::Timeline;

/// One editing session: a surface showing the active frame and the
/// timeline owning the full sequence.
#[derive(Debug, Clone)]
pub struct Editor {
    surface: RasterSurface,
    timeline: Timeline,
}

impl Editor {
    pub fn new(config: &ProjectConfig) -> Self {
        Self {
            surface: RasterSurface::new(config.width, config.height),
            timeline: Timeline::new(config.width, config.height, config.frame_rate),
        }
    }

    /// Flush the surface's buffer into the frame under the edit cursor.
    fn flush_surface(&mut self) {
        let buffer = self.surface.buffer().clone();
        self.timeline.sequence_mut().receive_updated_canvas_frame(buffer);
    }

    /// Pointer pressed: begin a stroke and flush, so the store holds the
    /// frame that is about to change.
    pub fn pointer_pressed(&mut self, point: Point) {
        if self.surface.begin_stroke(point) {
            self.flush_surface();
        }
    }

    /// Pointer moved with the button held: paint one block and flush.
    pub fn pointer_moved(&mut self, point: Point) {
        if self.surface.continue_stroke(point) {
            self.flush_surface();
        }
    }

    /// Pointer released: paint the final block and flush. Release always
    /// finalizes the stroke; there is no abort path.
    pub fn pointer_released(&mut self, point: Point) {
        if self.surface.end_stroke(point) {
            self.flush_surface();
        }
    }

    /// Move to the next frame (clamping at the end) and show it on the
    /// surface. Returns `(edit_cursor, frame_count)` for display.
    pub fn next_frame(&mut self) -> (usize, usize) {
        let buffer = self.timeline.sequence_mut().next_frame().clone();
        self.surface.load_frame(buffer);
        self.frame_label()
    }

    /// Move to the previous frame (clamping at the start) and show it.
    pub fn prev_frame(&mut self) -> (usize, usize) {
        let buffer = self.timeline.sequence_mut().prev_frame().clone();
        self.surface.load_frame(buffer);
        self.frame_label()
    }

    /// Append a new blank frame at the end of the sequence.
    pub fn add_frame(&mut self) -> (usize, usize) {
        self.timeline.sequence_mut().add_frame();
        self.frame_label()
    }

    /// Duplicate the current frame and switch the surface to the copy.
    pub fn copy_frame(&mut self) -> (usize, usize) {
        self.timeline.sequence_mut().copy_frame();
        let buffer = self.timeline.sequence().current_frame().clone();
        self.surface.load_frame(buffer);
        self.frame_label()
    }

    /// Delete the current frame (no-op on a one-frame sequence) and show
    /// whichever frame the edit cursor lands on.
    pub fn delete_frame(&mut self) -> (usize, usize) {
        self.timeline.delete_frame();
        let buffer = self.timeline.sequence().current_frame().clone();
        self.surface.load_frame(buffer);
        self.frame_label()
    }

    /// Start looped playback; drawing is disabled until `pause`.
    pub fn play(&mut self) {
        self.timeline.play();
        self.surface.set_can_draw(false);
    }

    /// Stop playback, re-enable drawing, and put the edit frame back on
    /// the surface so subsequent strokes land where the cursor is.
    pub fn pause(&mut self) {
        self.timeline.pause();
        self.surface.set_can_draw(true);
        let buffer = self.timeline.sequence().current_frame().clone();
        self.surface.load_frame(buffer);
    }

    /// One timer tick: advance playback and push the frame to the surface
    /// for display. Returns whether a frame was shown. The external timer
    /// calls this at `timeline().tick_interval()` while playing.
    pub fn tick(&mut self) -> bool {
        match self.timeline.tick() {
            Some(buffer) => {
                let buffer = buffer.clone();
                self.surface.load_frame(buffer);
                true
            }
            None => false,
        }
    }

    /// `(edit_cursor, frame_count)` for the frame position label.
    pub fn frame_label(&self) -> (usize, usize) {
        let seq = self.timeline.sequence();
        (seq.edit_cursor(), seq.len())
    }

    /// Snapshot the session for the persistence layer.
    pub fn snapshot(&self) -> ProjectData {
        let seq = self.timeline.sequence();
        ProjectData {
            frame_rate: self.timeline.frame_rate(),
            width: seq.frame_width(),
            height: seq.frame_height(),
            frames: seq.frames().to_vec(),
        }
    }

    /// Restore a session from a persisted snapshot. The snapshot is
    /// validated first; on success the cursors reset to the first frame
    /// and the surface shows it.
    pub fn restore(&mut self, data: ProjectData) -> Result<(), ConfigError> {
        data.validate()?;
        self.timeline = Timeline::new(data.width, data.height, data.frame_rate);
        self.timeline.sequence_mut().restore(data.frames);
        let buffer = self.timeline.sequence().current_frame().clone();
        self.surface = RasterSurface::new(data.width, data.height);
        self.surface.load_frame(buffer);
        Ok(())
    }

    #[inline]
    pub fn surface(&self) -> &RasterSurface {
        &self.surface
    }

    /// Brush and color operations go straight to the surface.
    #[inline]
    pub fn surface_mut(&mut self) -> &mut RasterSurface {
        &mut self.surface
    }

    #[inline]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Frame-rate changes go straight to the timeline.
    #[inline]
    pub fn timeline_mut(&mut self) -> &mut Timeline {
        &mut self.timeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Rgba;

    fn editor() -> Editor {
        Editor::new(&ProjectConfig {
            width: 100,
            height: 100,
            frame_rate: 12,
        })
    }

    fn dot(editor: &mut Editor, x: f32, y: f32) {
        editor.pointer_pressed(Point::new(x, y));
        editor.pointer_released(Point::new(x, y));
    }

    #[test]
    fn test_stroke_flushes_to_frame_store() {
        let mut editor = editor();
        editor.surface_mut().set_brush_size(10);
        editor.surface_mut().select_color(Rgba::opaque(255, 0, 0));

        dot(&mut editor, 23.0, 47.0);

        let stored = editor.timeline().sequence().current_frame();
        assert_eq!(stored.get(20, 40), Some(Rgba::opaque(255, 0, 0)));
    }

    #[test]
    fn test_navigation_reads_flushed_content() {
        let mut editor = editor();
        editor.surface_mut().select_color(Rgba::opaque(1, 2, 3));
        editor.add_frame();

        dot(&mut editor, 5.0, 5.0);
        editor.next_frame();
        assert!(editor.surface().buffer().is_blank());

        editor.prev_frame();
        assert_eq!(
            editor.surface().buffer().get(5, 5),
            Some(Rgba::opaque(1, 2, 3))
        );
    }

    #[test]
    fn test_playback_disables_drawing() {
        let mut editor = editor();
        editor.play();

        dot(&mut editor, 5.0, 5.0);
        assert!(editor.timeline().sequence().current_frame().is_blank());

        editor.pause();
        dot(&mut editor, 5.0, 5.0);
        assert!(!editor.timeline().sequence().current_frame().is_blank());
    }

    #[test]
    fn test_tick_shows_playback_frames() {
        let mut editor = editor();
        editor.surface_mut().select_color(Rgba::opaque(9, 9, 9));
        editor.add_frame();
        editor.next_frame();
        dot(&mut editor, 0.0, 0.0);
        editor.prev_frame();

        editor.play();
        assert!(editor.tick());
        // Play cursor advanced onto frame 1, which carries the mark.
        assert_eq!(
            editor.surface().buffer().get(0, 0),
            Some(Rgba::opaque(9, 9, 9))
        );
    }

    #[test]
    fn test_pause_restores_edit_frame() {
        let mut editor = editor();
        editor.surface_mut().select_color(Rgba::opaque(4, 4, 4));
        dot(&mut editor, 0.0, 0.0);
        editor.add_frame();

        editor.play();
        editor.tick(); // surface now shows the blank frame 1
        assert!(editor.surface().buffer().is_blank());

        editor.pause();
        assert_eq!(
            editor.surface().buffer().get(0, 0),
            Some(Rgba::opaque(4, 4, 4))
        );
    }

    #[test]
    fn test_copy_frame_scenario() {
        // Three frames, edit cursor on index 1 with content; copying gives
        // four frames, an identical frame at index 2, cursor on the copy.
        let mut editor = editor();
        editor.surface_mut().select_color(Rgba::opaque(8, 0, 8));
        editor.add_frame();
        editor.add_frame();
        editor.next_frame();
        dot(&mut editor, 50.0, 50.0);

        let (cursor, len) = editor.copy_frame();
        assert_eq!((cursor, len), (2, 4));
        let frames = editor.timeline().sequence().frames();
        assert_eq!(frames[2], frames[1]);
    }

    #[test]
    fn test_snapshot_restore_roundtrip() {
        let mut editor = editor();
        editor.surface_mut().select_color(Rgba::opaque(3, 1, 4));
        dot(&mut editor, 10.0, 10.0);
        editor.add_frame();
        editor.timeline_mut().set_frame_rate(24);

        let snapshot = editor.snapshot();
        assert_eq!(snapshot.number_of_frames(), 2);
        assert_eq!(snapshot.frame_rate, 24);

        let mut fresh = Editor::new(&ProjectConfig::default());
        fresh.restore(snapshot).unwrap();
        assert_eq!(fresh.frame_label(), (0, 2));
        assert_eq!(
            fresh.surface().buffer().get(10, 10),
            Some(Rgba::opaque(3, 1, 4))
        );
        assert_eq!(fresh.timeline().frame_rate(), 24);
    }

    #[test]
    fn test_restore_rejects_invalid_snapshot() {
        let mut editor = editor();
        let bad = ProjectData {
            frame_rate: 0,
            width: 8,
            height: 8,
            frames: vec![],
        };
        assert!(editor.restore(bad).is_err());
        // Session untouched by the failed restore.
        assert_eq!(editor.frame_label(), (0, 1));
    }
}
