//! Playback controller - the play/pause/delete state machine over a
//! frame sequence.
//!
//! The controller performs no timing of its own. An external timer is
//! expected to call [`Timeline::tick`] every `tick_interval()` while the
//! state is `Playing`; the controller only advances state when ticked.

use std::time::Duration;

use crate::canvas::PixelBuffer;

use super::FrameSequence;

/// Minimum legal frame rate (frames per second).
pub const MIN_FRAME_RATE: u32 = 1;

/// Playback status of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Not advancing; the surface accepts drawing input.
    Stopped,
    /// Looping through frames on timer ticks; drawing is disabled.
    Playing,
    /// A frame deletion is in flight; ticks are ignored until the
    /// pre-delete status is restored.
    PendingResumeAfterDelete,
}

/// Frame store plus the playback state machine.
///
/// Owns the [`FrameSequence`] and decides when playback may advance and
/// when the raster surface may accept drawing input. The `deleting` guard
/// is cooperative re-entrancy control, not a lock: everything here runs on
/// one logical thread.
#[derive(Debug, Clone)]
pub struct Timeline {
    sequence: FrameSequence,
    state: PlaybackState,
    frame_rate: u32,
    deleting: bool,
}

impl Timeline {
    /// Create a timeline over a single blank frame.
    pub fn new(width: usize, height: usize, frame_rate: u32) -> Self {
        Self {
            sequence: FrameSequence::new(width, height),
            state: PlaybackState::Stopped,
            frame_rate: frame_rate.max(MIN_FRAME_RATE),
            deleting: false,
        }
    }

    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    #[inline]
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    /// The interval at which the external timer should deliver ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate as f64)
    }

    /// Update the frame rate. Non-positive rates are clamped to the
    /// minimum, since they would give the timer a nonsensical interval.
    pub fn set_frame_rate(&mut self, rate: i32) {
        if rate < MIN_FRAME_RATE as i32 {
            log::warn!("frame rate {} clamped to {}", rate, MIN_FRAME_RATE);
            self.frame_rate = MIN_FRAME_RATE;
        } else {
            self.frame_rate = rate as u32;
        }
    }

    /// Start playback. The caller must disable drawing on the surface for
    /// the duration.
    pub fn play(&mut self) {
        if !self.deleting {
            self.state = PlaybackState::Playing;
        }
    }

    /// Pause playback and allow drawing again.
    pub fn pause(&mut self) {
        if !self.deleting {
            self.state = PlaybackState::Stopped;
        }
    }

    /// One animation tick: advance the play cursor by one, wrapping at the
    /// end of the sequence, and return the frame to display. Ignored while
    /// not playing or while a delete is in flight.
    pub fn tick(&mut self) -> Option<&PixelBuffer> {
        if self.state != PlaybackState::Playing || self.deleting {
            return None;
        }
        Some(self.sequence.advance_playback())
    }

    /// Delete the frame under the edit cursor.
    ///
    /// A single synchronous call: playback advancement is suspended, the
    /// frame is removed, and the pre-delete play/pause status is restored
    /// before returning. Deleting the sole remaining frame is a no-op.
    /// Returns whether a frame was removed.
    pub fn delete_frame(&mut self) -> bool {
        let was_playing = self.is_playing();
        self.deleting = true;
        self.state = PlaybackState::PendingResumeAfterDelete;

        let removed = self.sequence.delete_current_frame();

        self.deleting = false;
        self.state = if was_playing {
            PlaybackState::Playing
        } else {
            PlaybackState::Stopped
        };
        removed
    }

    #[inline]
    pub fn sequence(&self) -> &FrameSequence {
        &self.sequence
    }

    #[inline]
    pub fn sequence_mut(&mut self) -> &mut FrameSequence {
        &mut self.sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_stopped() {
        let timeline = Timeline::new(8, 8, 12);
        assert_eq!(timeline.state(), PlaybackState::Stopped);
        assert_eq!(timeline.frame_rate(), 12);
    }

    #[test]
    fn test_play_pause_transitions() {
        let mut timeline = Timeline::new(8, 8, 12);
        timeline.play();
        assert!(timeline.is_playing());
        timeline.pause();
        assert_eq!(timeline.state(), PlaybackState::Stopped);
    }

    #[test]
    fn test_tick_only_advances_while_playing() {
        let mut timeline = Timeline::new(8, 8, 12);
        timeline.sequence_mut().add_frame();

        assert!(timeline.tick().is_none());
        assert_eq!(timeline.sequence().play_cursor(), 0);

        timeline.play();
        assert!(timeline.tick().is_some());
        assert_eq!(timeline.sequence().play_cursor(), 1);
    }

    #[test]
    fn test_tick_wraps_after_full_cycle() {
        let mut timeline = Timeline::new(8, 8, 12);
        timeline.sequence_mut().add_frame();
        timeline.sequence_mut().add_frame();
        timeline.play();

        let start = timeline.sequence().play_cursor();
        let len = timeline.sequence().len();
        for _ in 0..len {
            timeline.tick();
        }
        assert_eq!(timeline.sequence().play_cursor(), start);
    }

    #[test]
    fn test_frame_rate_clamped() {
        let mut timeline = Timeline::new(8, 8, 12);
        timeline.set_frame_rate(0);
        assert_eq!(timeline.frame_rate(), MIN_FRAME_RATE);
        timeline.set_frame_rate(-3);
        assert_eq!(timeline.frame_rate(), MIN_FRAME_RATE);
        timeline.set_frame_rate(24);
        assert_eq!(timeline.frame_rate(), 24);
    }

    #[test]
    fn test_tick_interval_follows_rate() {
        let mut timeline = Timeline::new(8, 8, 10);
        assert_eq!(timeline.tick_interval(), Duration::from_millis(100));
        timeline.set_frame_rate(25);
        assert_eq!(timeline.tick_interval(), Duration::from_millis(40));
    }

    #[test]
    fn test_delete_restores_playing_status() {
        let mut timeline = Timeline::new(8, 8, 12);
        timeline.sequence_mut().add_frame();
        timeline.play();

        assert!(timeline.delete_frame());
        assert!(timeline.is_playing());
        assert_eq!(timeline.sequence().len(), 1);
    }

    #[test]
    fn test_delete_restores_stopped_status() {
        let mut timeline = Timeline::new(8, 8, 12);
        timeline.sequence_mut().add_frame();

        assert!(timeline.delete_frame());
        assert_eq!(timeline.state(), PlaybackState::Stopped);
    }

    #[test]
    fn test_delete_sole_frame_is_noop() {
        let mut timeline = Timeline::new(8, 8, 12);
        assert!(!timeline.delete_frame());
        assert_eq!(timeline.sequence().len(), 1);
        assert_eq!(timeline.state(), PlaybackState::Stopped);
    }
}
