//! Core Effect trait.
//!
//! The [`Effect`] trait is the host-facing processing interface. Everything
//! that sits in an audio callback implements it, frame by frame or a block
//! at a time.
//!
//! ## Design Decisions
//!
//! - **Stereo frames**: The granular engine reads an interleaved stereo loop
//!   and writes both channels, so the trait speaks in `(left, right)` pairs.
//!
//! - **In-place blocks**: Hosts hand over two channel slices and get them
//!   back mutated. No separate output buffers are needed.
//!
//! - **Object-safe**: `dyn Effect` works for runtime selection. Generic
//!   dispatch is preferred on hot paths.
//!
//! - **No allocations**: Every method must be callable from a real-time
//!   audio thread.

/// Core trait for stereo audio effects.
///
/// # Example
///
/// ```rust
/// use granula_core::Effect;
///
/// struct Swap;
///
/// impl Effect for Swap {
///     fn process_stereo(&mut self, left: f32, right: f32) -> (f32, f32) {
///         (right, left)
///     }
///
///     fn set_sample_rate(&mut self, _sample_rate: f32) {}
///
///     fn reset(&mut self) {}
/// }
///
/// let mut left = [1.0, 2.0];
/// let mut right = [3.0, 4.0];
/// Swap.process_block_stereo(&mut left, &mut right);
/// assert_eq!(left, [3.0, 4.0]);
/// ```
pub trait Effect {
    /// Process a single stereo frame.
    ///
    /// For stateful effects this advances the state by one sample.
    fn process_stereo(&mut self, left: f32, right: f32) -> (f32, f32);

    /// Process a block of stereo frames in place.
    ///
    /// Default implementation calls [`process_stereo`](Self::process_stereo)
    /// for each frame. If the channels differ in length only the common
    /// prefix is processed.
    fn process_block_stereo(&mut self, left: &mut [f32], right: &mut [f32]) {
        debug_assert_eq!(
            left.len(),
            right.len(),
            "Left and right buffers must have same length"
        );
        for (l, r) in left.iter_mut().zip(right.iter_mut()) {
            let (out_l, out_r) = self.process_stereo(*l, *r);
            *l = out_l;
            *r = out_r;
        }
    }

    /// Update the sample rate.
    ///
    /// Effects recalculate anything expressed in samples (grain lengths,
    /// spawn intervals, smoothing coefficients).
    fn set_sample_rate(&mut self, sample_rate: f32);

    /// Reset internal state without touching parameters.
    fn reset(&mut self);

    /// Report processing latency in samples.
    ///
    /// Default returns 0 (no latency).
    fn latency_samples(&self) -> usize {
        0
    }
}
