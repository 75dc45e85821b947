//! Parameter handling with smoothing for zipper-free changes.
//!
//! Controls arriving from a host or a preset jump between values. The grain
//! engine reads them once per block as a stable snapshot, so the jump has to
//! be spread out before it gets there. [`SmoothedParam`] does that with a
//! one-pole lowpass.
//!
//! ## Usage
//!
//! ```rust
//! use granula_core::SmoothedParam;
//!
//! let mut spray = SmoothedParam::standard(0.0, 48000.0);
//! spray.set_target(0.8);
//!
//! // Per sample
//! let value = spray.advance();
//! assert!(value > 0.0 && value < 0.8);
//!
//! // Or once per block
//! let value = spray.advance_by(256);
//! assert!(value < 0.8);
//! ```

use libm::{expf, powf};

/// Smoothing time used by [`SmoothedParam::standard`], in milliseconds.
pub const STANDARD_SMOOTHING_MS: f32 = 10.0;

/// A parameter with built-in exponential smoothing.
#[derive(Debug, Clone)]
pub struct SmoothedParam {
    /// Current smoothed value
    current: f32,
    /// Target value we're smoothing towards
    target: f32,
    /// Smoothing coefficient (1 = instant, near 0 = very slow)
    coeff: f32,
    sample_rate: f32,
    smoothing_time_ms: f32,
}

impl SmoothedParam {
    /// Create a new smoothed parameter with initial value.
    ///
    /// Smoothing is disabled until a sample rate and smoothing time are set.
    pub fn new(initial: f32) -> Self {
        Self {
            current: initial,
            target: initial,
            coeff: 1.0,
            sample_rate: 48000.0,
            smoothing_time_ms: 0.0,
        }
    }

    /// Create a smoothed parameter with full configuration.
    ///
    /// # Arguments
    /// * `initial` - Initial parameter value
    /// * `sample_rate` - Sample rate in Hz
    /// * `smoothing_time_ms` - Smoothing time constant in milliseconds
    pub fn with_config(initial: f32, sample_rate: f32, smoothing_time_ms: f32) -> Self {
        let mut param = Self::new(initial);
        param.sample_rate = sample_rate;
        param.smoothing_time_ms = smoothing_time_ms;
        param.recalculate_coeff();
        param
    }

    /// Create a smoothed parameter with the standard 10 ms time constant.
    pub fn standard(initial: f32, sample_rate: f32) -> Self {
        Self::with_config(initial, sample_rate, STANDARD_SMOOTHING_MS)
    }

    /// Set the target value (parameter will smooth towards this).
    #[inline]
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Set target and immediately snap to it (no smoothing).
    #[inline]
    pub fn set_immediate(&mut self, value: f32) {
        self.target = value;
        self.current = value;
    }

    /// Update sample rate and recalculate smoothing coefficient.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.recalculate_coeff();
    }

    /// Set smoothing time in milliseconds. Zero disables smoothing.
    pub fn set_smoothing_time_ms(&mut self, time_ms: f32) {
        self.smoothing_time_ms = time_ms;
        self.recalculate_coeff();
    }

    /// Get the next smoothed value (advances by one sample).
    #[inline]
    pub fn advance(&mut self) -> f32 {
        // y[n] = y[n-1] + coeff * (target - y[n-1])
        self.current += self.coeff * (self.target - self.current);
        self.current
    }

    /// Advance by `samples` steps at once and return the new value.
    ///
    /// Closed form of calling [`advance`](Self::advance) `samples` times:
    /// the remaining distance shrinks by `(1 - coeff)^samples`.
    #[inline]
    pub fn advance_by(&mut self, samples: usize) -> f32 {
        if samples == 0 {
            return self.current;
        }
        let remaining = powf(1.0 - self.coeff, samples as f32);
        self.current = self.target + (self.current - self.target) * remaining;
        self.current
    }

    /// Get the current smoothed value without advancing.
    #[inline]
    pub fn get(&self) -> f32 {
        self.current
    }

    /// Get the target value.
    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Check if the parameter has reached its target (within epsilon).
    #[inline]
    pub fn is_settled(&self) -> bool {
        (self.current - self.target).abs() < 1e-6
    }

    /// Skip ahead to the target value immediately.
    #[inline]
    pub fn snap_to_target(&mut self) {
        self.current = self.target;
    }

    /// `coeff = 1 - exp(-1 / (tau * sample_rate))` with `tau` in seconds.
    ///
    /// After 5 tau the parameter is within 0.7% of its target.
    fn recalculate_coeff(&mut self) {
        if self.smoothing_time_ms <= 0.0 || self.sample_rate <= 0.0 {
            self.coeff = 1.0;
        } else {
            let samples = self.smoothing_time_ms / 1000.0 * self.sample_rate;
            self.coeff = 1.0 - expf(-1.0 / samples);
        }
    }
}

impl Default for SmoothedParam {
    fn default() -> Self {
        Self::new(0.0)
    }
}
