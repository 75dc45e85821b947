//! Mathematical utility functions for DSP.
//!
//! All functions are allocation-free and suitable for `no_std`.
//!
//! # Level Conversions
//!
//! - [`db_to_linear`] / [`linear_to_db`] - Convert between dB and linear gain
//!
//! # Normalized Positions
//!
//! - [`wrap_unit`] - Fold any position back into `[0, 1)`
//!
//! # Utilities
//!
//! - [`lerp`] - Linear interpolation
//! - [`clamp`] - Value limiting
//! - [`seconds_to_samples`] - Time conversion
//! - [`flush_denormal`] - Subnormal guard

use libm::{expf, logf};

/// Convert decibels to linear gain.
///
/// # Example
/// ```rust
/// use granula_core::db_to_linear;
///
/// assert!((db_to_linear(0.0) - 1.0).abs() < 0.001);
/// assert!((db_to_linear(-6.02) - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    // 10^(dB/20) = e^(dB * ln(10)/20)
    const FACTOR: f32 = core::f32::consts::LN_10 / 20.0;
    expf(db * FACTOR)
}

/// Convert linear gain to decibels.
///
/// Non-positive input reports the -120 dB floor.
///
/// # Example
/// ```rust
/// use granula_core::linear_to_db;
///
/// assert!((linear_to_db(1.0) - 0.0).abs() < 0.001);
/// assert_eq!(linear_to_db(0.0), -120.0);
/// ```
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    const FACTOR: f32 = 20.0 / core::f32::consts::LN_10;
    if linear <= 0.0 {
        return -120.0;
    }
    (logf(linear) * FACTOR).max(-120.0)
}

/// Wrap a normalized position into `[0, 1)`.
///
/// Applies whole-unit corrections in either direction, so a cursor that
/// overshoots the end lands near the start and one that undershoots the
/// start lands near the end. Non-finite input returns `0.0`.
///
/// # Example
/// ```rust
/// use granula_core::wrap_unit;
///
/// assert!((wrap_unit(1.25) - 0.25).abs() < 1e-6);
/// assert!((wrap_unit(-0.25) - 0.75).abs() < 1e-6);
/// assert_eq!(wrap_unit(f32::NAN), 0.0);
/// ```
#[inline]
pub fn wrap_unit(x: f32) -> f32 {
    if !x.is_finite() {
        return 0.0;
    }
    let mut wrapped = x;
    // Large offsets are folded with one floor step before the ±1 loop.
    if !(-2.0..2.0).contains(&wrapped) {
        wrapped -= libm::floorf(wrapped);
    }
    while wrapped < 0.0 {
        wrapped += 1.0;
    }
    while wrapped >= 1.0 {
        wrapped -= 1.0;
    }
    wrapped
}

/// Linear interpolation between two values.
///
/// # Arguments
/// * `a` - Start value (at t=0)
/// * `b` - End value (at t=1)
/// * `t` - Interpolation factor (0.0 to 1.0)
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp a value to a range.
#[inline]
pub fn clamp(x: f32, min: f32, max: f32) -> f32 {
    x.clamp(min, max)
}

/// Convert a duration in seconds to samples.
#[inline]
pub fn seconds_to_samples(seconds: f32, sample_rate: f32) -> f32 {
    seconds * sample_rate
}

/// Flush subnormal (denormalized) floats to zero.
///
/// Values below 1e-20 in magnitude become zero, leaving margin before the
/// IEEE 754 subnormal range begins.
#[allow(clippy::inline_always)]
#[inline(always)]
pub fn flush_denormal(x: f32) -> f32 {
    if x.abs() < 1e-20 { 0.0 } else { x }
}
