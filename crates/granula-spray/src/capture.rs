//! Fixed-length stereo capture ring.
//!
//! Hosts without a loop recorder of their own can record their input here and
//! hand the engine [`CaptureRing::view`] as the loop. The write head doubles
//! as the playback position, so grains land around the most recent audio.

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use granula_core::seconds_to_samples;

use crate::looper::LoopView;

/// Interleaved stereo ring buffer written one frame at a time.
///
/// # Example
///
/// ```rust
/// use granula_spray::CaptureRing;
///
/// let mut ring = CaptureRing::with_frames(4);
/// ring.write(0.5, -0.5);
/// assert_eq!(ring.position(), 0.25);
///
/// let view = ring.view();
/// assert_eq!(view.frame_count(), 4);
/// assert_eq!(view.frame(0.0), Some((0.5, -0.5)));
/// ```
#[derive(Debug, Clone)]
pub struct CaptureRing {
    buffer: Vec<f32>,
    write_frame: usize,
}

impl CaptureRing {
    /// Ring long enough for `seconds` of audio at `sample_rate`.
    pub fn with_seconds(sample_rate: f32, seconds: f32) -> Self {
        let frames = seconds_to_samples(seconds, sample_rate);
        let frames = if frames.is_finite() && frames > 0.0 {
            frames as usize
        } else {
            0
        };
        Self::with_frames(frames)
    }

    /// Ring of exactly `frames` stereo frames, zero-filled.
    pub fn with_frames(frames: usize) -> Self {
        Self {
            buffer: vec![0.0; frames * 2],
            write_frame: 0,
        }
    }

    /// Capacity in frames.
    pub fn frames(&self) -> usize {
        self.buffer.len() / 2
    }

    /// Record one frame and move the write head on, wrapping at the end.
    ///
    /// A zero-length ring ignores the write.
    #[inline]
    pub fn write(&mut self, left: f32, right: f32) {
        let frames = self.frames();
        if frames == 0 {
            return;
        }
        let idx = self.write_frame * 2;
        self.buffer[idx] = left;
        self.buffer[idx + 1] = right;
        self.write_frame = (self.write_frame + 1) % frames;
    }

    /// Record a block of frames.
    pub fn write_block(&mut self, left: &[f32], right: &[f32]) {
        for (&l, &r) in left.iter().zip(right) {
            self.write(l, r);
        }
    }

    /// Normalized write head, `[0, 1)`.
    #[inline]
    pub fn position(&self) -> f32 {
        match self.frames() {
            0 => 0.0,
            frames => self.write_frame as f32 / frames as f32,
        }
    }

    /// The ring as a loop snapshot: whole buffer, playing at the write head.
    #[inline]
    pub fn view(&self) -> LoopView<'_> {
        LoopView::new(&self.buffer, self.position(), 1.0, 0.0)
    }

    /// Zero the contents and rewind the write head.
    pub fn clear(&mut self) {
        self.buffer.fill(0.0);
        self.write_frame = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_seconds() {
        let ring = CaptureRing::with_seconds(48000.0, 0.5);
        assert_eq!(ring.frames(), 24000);
        assert_eq!(CaptureRing::with_seconds(48000.0, -1.0).frames(), 0);
        assert_eq!(CaptureRing::with_seconds(48000.0, f32::NAN).frames(), 0);
    }

    #[test]
    fn test_write_wraps() {
        let mut ring = CaptureRing::with_frames(3);
        for i in 0..4 {
            ring.write(i as f32, -(i as f32));
        }
        let view = ring.view();
        assert_eq!(view.buffer(), &[3.0, -3.0, 1.0, -1.0, 2.0, -2.0]);
        assert!((ring.position() - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_view_metadata() {
        let mut ring = CaptureRing::with_frames(8);
        ring.write_block(&[1.0, 2.0], &[3.0, 4.0]);
        let view = ring.view();
        assert_eq!(view.position(), 0.25);
        assert_eq!(view.length(), 1.0);
        assert_eq!(view.start(), 0.0);
    }

    #[test]
    fn test_empty_ring() {
        let mut ring = CaptureRing::with_frames(0);
        ring.write(1.0, 1.0);
        assert_eq!(ring.position(), 0.0);
        assert!(!ring.view().has_frames());
    }

    #[test]
    fn test_clear() {
        let mut ring = CaptureRing::with_frames(2);
        ring.write(1.0, 1.0);
        ring.clear();
        assert_eq!(ring.position(), 0.0);
        assert!(ring.view().buffer().iter().all(|&s| s == 0.0));
    }
}
