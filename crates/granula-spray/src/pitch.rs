//! Weighted octave selection for new grains.
//!
//! Grains never get a continuous pitch. The pitch control `p` in `[0, 1]`
//! feeds five piecewise-linear weights, one per octave offset, and a single
//! roulette draw picks the offset:
//!
//! | offset | non-zero region | peak |
//! |--------|-----------------|------|
//! | -2     | `p < 0.25`        | 100 at `p = 0` |
//! | -1     | `p < 0.5`         | plateau 100 over `[0, 0.25]` |
//! |  0     | `0 < p < 1`       | 100 at `p = 0.5` |
//! | +1     | `p > 0.5`         | plateau 100 over `[0.75, 1]` |
//! | +2     | `p > 0.75`        | 100 at `p = 1` |

use crate::RandomSource;

/// Octave offsets in weight-table order.
pub const OCTAVE_OFFSETS: [i32; 5] = [-2, -1, 0, 1, 2];

/// Playback-rate multiplier for each entry of [`OCTAVE_OFFSETS`].
const OCTAVE_RATIOS: [f32; 5] = [0.25, 0.5, 1.0, 2.0, 4.0];

/// Selection weights for [`OCTAVE_OFFSETS`] at pitch control `p`.
///
/// `p` is clamped to `[0, 1]`; NaN yields all-zero weights.
pub fn pitch_weights(p: f32) -> [f32; 5] {
    if p.is_nan() {
        return [0.0; 5];
    }
    let p = p.clamp(0.0, 1.0);

    let unison = 100.0 * (1.0 - (p - 0.5).abs() * 2.0);

    let octave_up = if p < 0.5 {
        0.0
    } else if p <= 0.75 {
        100.0 * (p - 0.5) * 4.0
    } else {
        100.0
    };
    let two_up = if p >= 0.75 { 100.0 * (p - 0.75) * 4.0 } else { 0.0 };

    let octave_down = if p > 0.5 {
        0.0
    } else if p >= 0.25 {
        100.0 * (0.5 - p) * 4.0
    } else {
        100.0
    };
    let two_down = if p <= 0.25 { 100.0 * (0.25 - p) * 4.0 } else { 0.0 };

    [two_down, octave_down, unison, octave_up, two_up]
}

/// Roulette-wheel choice of an octave offset.
///
/// `draw` is a uniform value in `[0, 1)`, scaled by the total weight. The
/// first offset with non-zero weight whose cumulative weight reaches the
/// scaled draw wins. A zero or non-finite total falls back to offset 0.
pub fn select_octave(p: f32, draw: f32) -> i32 {
    let weights = pitch_weights(p);
    let total: f32 = weights.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return 0;
    }

    let target = draw * total;
    let mut cumulative = 0.0;
    for (offset, weight) in OCTAVE_OFFSETS.iter().zip(weights) {
        cumulative += weight;
        if weight > 0.0 && cumulative >= target {
            return *offset;
        }
    }
    0
}

/// Exact power-of-two multiplier for an octave offset.
///
/// Offsets outside `-2..=2` map to unity.
#[inline]
pub fn octave_ratio(offset: i32) -> f32 {
    OCTAVE_OFFSETS
        .iter()
        .position(|&o| o == offset)
        .map_or(1.0, |i| OCTAVE_RATIOS[i])
}

/// Draw a grain pitch: `|looper_speed| × 2^offset`.
///
/// Consumes exactly one value from `rng`.
pub fn pitch_shift<R: RandomSource + ?Sized>(p: f32, looper_speed: f32, rng: &mut R) -> f32 {
    let offset = select_octave(p, rng.next_unit());
    looper_speed.abs() * octave_ratio(offset)
}
