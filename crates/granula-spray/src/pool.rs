//! Fixed-capacity grain pool and spawn scheduler.
//!
//! The pool is an arena of [`MAX_GRAINS`] slots addressed by index. A
//! round-robin cursor decides where the next free-slot scan starts, so a busy
//! pool does not keep recycling the same slot. A sample-counting timer
//! decides when a spawn is attempted.
//!
//! Nothing here allocates. The worst-case spawn cost is one scan over the
//! slots.

use granula_core::{seconds_to_samples, wrap_unit};

use crate::{Grain, RandomSource, pitch};

/// Number of grain slots.
pub const MAX_GRAINS: usize = 8;

/// Grain lifetime in seconds.
pub const GRAIN_SECONDS: f32 = 0.2;

/// Spawn interval at full spray, in seconds.
pub const MIN_INTERVAL_SECONDS: f32 = 0.05;

/// Extra interval added as spray falls to zero, in seconds.
pub const INTERVAL_SPAN_SECONDS: f32 = 0.45;

/// Largest random placement offset, as a fraction of the loop, at full spray.
pub const SPRAY_RANGE: f32 = 0.4;

/// Samples between spawn attempts for a spray amount in `[0, 1]`.
///
/// Linear from 500 ms at `spray = 0` down to 50 ms at `spray = 1`.
///
/// ```rust
/// use granula_spray::pool::spawn_interval;
///
/// assert_eq!(spawn_interval(48000.0, 1.0), 2400.0);
/// assert_eq!(spawn_interval(48000.0, 0.0), 24000.0);
/// ```
#[inline]
pub fn spawn_interval(sample_rate: f32, spray: f32) -> f32 {
    sample_rate * (MIN_INTERVAL_SECONDS + (1.0 - spray) * INTERVAL_SPAN_SECONDS)
}

/// Everything a new grain needs from the current block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    /// Normalized loop playback position.
    pub position: f32,
    /// Spray amount, `[0, 1]`.
    pub spray: f32,
    /// Pitch control, `[0, 1]`.
    pub pitch: f32,
    /// Loop playback speed (sign ignored).
    pub looper_speed: f32,
    /// Sample rate in Hz.
    pub sample_rate: f32,
}

/// Fixed pool of grain slots plus the spawn timer.
#[derive(Debug, Clone)]
pub struct GrainPool {
    grains: [Grain; MAX_GRAINS],
    next_grain_index: usize,
    grain_timer: f32,
}

impl GrainPool {
    /// An empty pool with the timer at zero.
    pub const fn new() -> Self {
        Self {
            grains: [Grain::new(); MAX_GRAINS],
            next_grain_index: 0,
            grain_timer: 0.0,
        }
    }

    /// All slots, active or not.
    #[inline]
    pub fn grains(&self) -> &[Grain; MAX_GRAINS] {
        &self.grains
    }

    /// Mutable access to every slot, for the renderer.
    #[inline]
    pub fn grains_mut(&mut self) -> &mut [Grain; MAX_GRAINS] {
        &mut self.grains
    }

    /// Number of sounding grains.
    pub fn active_count(&self) -> usize {
        self.grains.iter().filter(|g| g.is_active()).count()
    }

    /// Slot where the next free-slot scan starts.
    #[inline]
    pub fn next_grain_index(&self) -> usize {
        self.next_grain_index
    }

    /// Samples counted since the last spawn attempt.
    #[inline]
    pub fn grain_timer(&self) -> f32 {
        self.grain_timer
    }

    /// Count one sample. Returns `true`, and restarts the count, once the
    /// timer has reached `interval`.
    #[inline]
    pub fn tick(&mut self, interval: f32) -> bool {
        self.grain_timer += 1.0;
        if self.grain_timer >= interval {
            self.grain_timer = 0.0;
            true
        } else {
            false
        }
    }

    /// Find the first free slot in ring order from the cursor.
    ///
    /// On success the cursor moves to the slot after the claimed one.
    pub fn claim_slot(&mut self) -> Option<usize> {
        let slot = (0..MAX_GRAINS)
            .map(|step| (self.next_grain_index + step) % MAX_GRAINS)
            .find(|&index| !self.grains[index].is_active())?;
        self.next_grain_index = (slot + 1) % MAX_GRAINS;
        Some(slot)
    }

    /// Start a grain in a free slot.
    ///
    /// Draws, in order, the placement offset, the octave, and the amplitude
    /// from `rng`. A saturated pool drops the request, consumes no draws, and
    /// returns `None`.
    pub fn spawn<R: RandomSource + ?Sized>(
        &mut self,
        request: &SpawnRequest,
        rng: &mut R,
    ) -> Option<usize> {
        let slot = self.claim_slot()?;

        let duration = seconds_to_samples(GRAIN_SECONDS, request.sample_rate);
        let spray_range = request.spray * SPRAY_RANGE;
        let start_pos = wrap_unit(request.position + rng.bipolar() * spray_range);
        let pitch_shift = pitch::pitch_shift(request.pitch, request.looper_speed, rng);
        let amplitude = rng.uniform(0.7, 1.0);

        self.grains[slot].activate(start_pos, duration, pitch_shift, amplitude);
        Some(slot)
    }

    /// Deactivate every grain and restart the timer and cursor.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for GrainPool {
    fn default() -> Self {
        Self::new()
    }
}
