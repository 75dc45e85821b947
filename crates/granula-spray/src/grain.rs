//! A single grain: one enveloped, pitched read cursor into the loop.

use granula_core::wrap_unit;

use crate::envelope;

/// One grain slot.
///
/// Only slots with `active == true` contribute to the mix. An inactive slot's
/// fields are stale and are fully rewritten by [`Grain::activate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grain {
    /// Whether the slot currently contributes to output.
    pub active: bool,
    /// Fraction of the grain's lifetime elapsed, `[0, 1)`.
    pub phase: f32,
    /// Normalized loop position at spawn time.
    pub start_pos: f32,
    /// Current normalized read cursor, `[0, 1)`.
    pub read_pos: f32,
    /// Lifetime in samples, fixed at spawn.
    pub duration: f32,
    /// Playback rate relative to one loop frame per output sample.
    pub pitch_shift: f32,
    /// Per-grain gain in `[0.7, 1.0]`.
    pub amplitude: f32,
}

impl Grain {
    /// An inactive grain with zeroed fields.
    pub const fn new() -> Self {
        Self {
            active: false,
            phase: 0.0,
            start_pos: 0.0,
            read_pos: 0.0,
            duration: 0.0,
            pitch_shift: 0.0,
            amplitude: 0.0,
        }
    }

    /// Check if this grain is currently sounding.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// (Re)start this slot as a fresh grain.
    pub fn activate(&mut self, start_pos: f32, duration: f32, pitch_shift: f32, amplitude: f32) {
        *self = Self {
            active: true,
            phase: 0.0,
            start_pos,
            read_pos: start_pos,
            duration,
            pitch_shift,
            amplitude,
        };
    }

    /// Envelope value at the current phase for the given attack fraction.
    #[inline]
    pub fn envelope(&self, attack: f32) -> f32 {
        envelope::triangle(self.phase, attack)
    }

    /// Move the read cursor by `pitch_shift` frames of a loop that is
    /// `frame_count` frames long, wrapping into `[0, 1)`.
    #[inline]
    pub fn advance_cursor(&mut self, frame_count: usize) {
        self.read_pos = wrap_unit(self.read_pos + self.pitch_shift / frame_count as f32);
    }

    /// Step the lifetime by one sample.
    ///
    /// Deactivates the grain once `phase` reaches 1 and returns whether it is
    /// still alive.
    #[inline]
    pub fn advance_phase(&mut self) -> bool {
        self.phase += 1.0 / self.duration;
        if self.phase >= 1.0 || self.phase.is_nan() {
            self.active = false;
        }
        self.active
    }
}

impl Default for Grain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_inactive() {
        let grain = Grain::default();
        assert!(!grain.is_active());
        assert_eq!(grain.phase, 0.0);
    }

    #[test]
    fn test_activate_overwrites_stale_fields() {
        let mut grain = Grain {
            active: false,
            phase: 0.93,
            start_pos: 0.1,
            read_pos: 0.7,
            duration: 5.0,
            pitch_shift: 4.0,
            amplitude: 0.2,
        };
        grain.activate(0.25, 9600.0, 1.0, 0.8);
        assert!(grain.active);
        assert_eq!(grain.phase, 0.0);
        assert_eq!(grain.start_pos, 0.25);
        assert_eq!(grain.read_pos, 0.25);
        assert_eq!(grain.duration, 9600.0);
        assert_eq!(grain.pitch_shift, 1.0);
        assert_eq!(grain.amplitude, 0.8);
    }

    #[test]
    fn test_cursor_wraps_forward() {
        let mut grain = Grain::new();
        grain.activate(0.99, 100.0, 2.0, 1.0);
        grain.advance_cursor(100);
        let expected = (0.99f32 + 2.0 / 100.0) % 1.0;
        assert!((grain.read_pos - expected).abs() < 1e-6, "{}", grain.read_pos);
        assert!((0.0..1.0).contains(&grain.read_pos));
    }

    #[test]
    fn test_phase_retires_after_duration() {
        let mut grain = Grain::new();
        grain.activate(0.0, 4.0, 1.0, 1.0);
        assert!(grain.advance_phase());
        assert!(grain.advance_phase());
        assert!(grain.advance_phase());
        assert!(!grain.advance_phase());
        assert!(!grain.is_active());
    }

    #[test]
    fn test_zero_duration_retires_immediately() {
        let mut grain = Grain::new();
        grain.activate(0.0, 0.0, 1.0, 1.0);
        assert!(!grain.advance_phase());
    }
}
