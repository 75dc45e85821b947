//! Asymmetric triangular grain window.
//!
//! The grain-shape control moves the peak of the window without changing the
//! grain's length:
//!
//! | shape | attack fraction | character |
//! |-------|-----------------|-----------|
//! | 0.0   | 0.95            | slow swell, abrupt release |
//! | 0.5   | 0.50            | symmetric triangle |
//! | 1.0   | 0.05            | percussive attack, long tail |

/// Attack fraction for a grain-shape control value in `[0, 1]`.
///
/// Out-of-range input is clamped, so the result always lies in
/// `[0.05, 0.95]` and neither ramp can divide by zero.
#[inline]
pub fn attack_fraction(shape: f32) -> f32 {
    let e = if shape.is_nan() { 0.5 } else { shape.clamp(0.0, 1.0) };
    if e <= 0.5 {
        0.5 + (0.5 - e) * 0.9
    } else {
        0.5 - (e - 0.5) * 0.9
    }
}

/// Window value at `phase` for an attack fraction `attack`.
///
/// Rises linearly from 0 to 1 over `[0, attack)`, then falls linearly back
/// towards 0 at phase 1.
#[inline]
pub fn triangle(phase: f32, attack: f32) -> f32 {
    if phase < attack {
        phase / attack
    } else {
        1.0 - (phase - attack) / (1.0 - attack)
    }
}
