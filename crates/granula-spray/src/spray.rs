//! The granular spray engine.
//!
//! [`GranularSpray`] reads a borrowed loop snapshot and re-emits short,
//! enveloped, octave-quantized grains mixed on top of the dry signal. All
//! state lives in a fixed [`GrainPool`]; processing a block never allocates.
//!
//! # Per-sample order
//!
//! 1. Count one sample on the spawn timer. When it fires, try to start a
//!    grain around the current loop position.
//! 2. For every active grain: window value, cursor advance, nearest-frame
//!    fetch, accumulate, lifetime step (retiring the grain at phase 1).
//! 3. Mix: `dry * (1 - w) + (dry + wet * 0.8) * w`.

use granula_core::{RandomSource, Xorshift32};

use crate::controls::{ControlSnapshot, SprayControls};
use crate::envelope;
use crate::looper::LoopView;
use crate::pool::{GrainPool, SpawnRequest, spawn_interval};

/// Spray amounts at or below this leave the block untouched.
pub const SPRAY_THRESHOLD: f32 = 0.001;

/// Gain applied to the summed grains before they join the dry signal.
pub const WET_GAIN: f32 = 0.8;

/// Spawn counters, accumulated since construction or the last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SprayStats {
    /// Spawn attempts that started a grain.
    pub spawned: u64,
    /// Spawn attempts dropped because every slot was busy.
    pub dropped: u64,
}

impl SprayStats {
    /// Total spawn attempts.
    pub fn attempts(&self) -> u64 {
        self.spawned.saturating_add(self.dropped)
    }
}

/// Granular spray engine over an externally owned loop buffer.
///
/// The loop snapshot is handed in on every [`process`](Self::process) call;
/// nothing about the buffer is remembered between blocks.
///
/// # Example
///
/// ```rust
/// use granula_spray::{ControlSnapshot, GranularSpray, LoopView, Xorshift32};
///
/// let loop_audio = vec![0.25f32; 2 * 48000];
/// let mut engine = GranularSpray::new(48000.0, Xorshift32::new(7));
/// let controls = ControlSnapshot { spray: 1.0, dry_wet: 1.0, ..ControlSnapshot::default() };
///
/// let mut left = [0.0f32; 4800];
/// let mut right = [0.0f32; 4800];
/// let view = LoopView::new(&loop_audio, 0.0, 1.0, 0.0);
/// engine.process(Some(view), &controls, &mut left, &mut right);
///
/// assert_eq!(engine.stats().spawned, 2);
/// assert!(left.iter().any(|&s| s > 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct GranularSpray<R: RandomSource = Xorshift32> {
    sample_rate: f32,
    pool: GrainPool,
    rng: R,
    stats: SprayStats,
}

impl<R: RandomSource> GranularSpray<R> {
    /// Create an engine with an empty pool.
    pub fn new(sample_rate: f32, rng: R) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(sample_rate, "granular spray engine created");

        Self {
            sample_rate,
            pool: GrainPool::new(),
            rng,
            stats: SprayStats::default(),
        }
    }

    /// Change the sample rate used for grain length and spawn interval.
    ///
    /// Grains already sounding keep the length they were born with.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        #[cfg(feature = "tracing")]
        tracing::debug!(sample_rate, "granular spray sample rate changed");

        self.sample_rate = sample_rate;
    }

    /// Current sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Silence every grain and restart the timer, cursor, and counters.
    ///
    /// The random source keeps its state.
    pub fn reset(&mut self) {
        self.pool.clear();
        self.stats = SprayStats::default();
    }

    /// The grain pool, for inspection.
    pub fn pool(&self) -> &GrainPool {
        &self.pool
    }

    /// Spawn counters.
    pub fn stats(&self) -> SprayStats {
        self.stats
    }

    /// The random source.
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Mutable access to the random source, e.g. to reseed it.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Process one block in place.
    ///
    /// `looper` is this block's snapshot of the loop buffer and its playback
    /// state. The controls are read once, up front. The block is left
    /// untouched, and no state changes, when the snapshot is missing or
    /// holds no whole frame, or when spray is at or below
    /// [`SPRAY_THRESHOLD`]. Grains that were sounding stay frozen until
    /// processing resumes.
    ///
    /// Channels of different length are processed up to the shorter one.
    pub fn process<C: SprayControls + ?Sized>(
        &mut self,
        looper: Option<LoopView<'_>>,
        controls: &C,
        left: &mut [f32],
        right: &mut [f32],
    ) {
        let Some(looper) = looper.filter(|view| view.has_frames()) else {
            return;
        };
        let controls = ControlSnapshot::capture(controls).clamped();
        if controls.spray <= SPRAY_THRESHOLD {
            return;
        }

        let attack = envelope::attack_fraction(controls.grain_shape);
        let mix = controls.dry_wet;

        for (l, r) in left.iter_mut().zip(right.iter_mut()) {
            let interval = spawn_interval(self.sample_rate, controls.spray);
            if self.pool.tick(interval) {
                self.spawn(&looper, &controls);
            }

            let (wet_l, wet_r) = self.render(&looper, attack);

            let (dry_l, dry_r) = (*l, *r);
            *l = dry_l * (1.0 - mix) + (dry_l + wet_l * WET_GAIN) * mix;
            *r = dry_r * (1.0 - mix) + (dry_r + wet_r * WET_GAIN) * mix;
        }
    }

    fn spawn(&mut self, looper: &LoopView<'_>, controls: &ControlSnapshot) {
        let request = SpawnRequest {
            position: looper.position(),
            spray: controls.spray,
            pitch: controls.pitch,
            looper_speed: controls.looper_speed,
            sample_rate: self.sample_rate,
        };
        match self.pool.spawn(&request, &mut self.rng) {
            Some(_) => self.stats.spawned = self.stats.spawned.saturating_add(1),
            None => self.stats.dropped = self.stats.dropped.saturating_add(1),
        }
    }

    /// Sum every active grain for one sample and step their lifetimes.
    #[inline]
    fn render(&mut self, looper: &LoopView<'_>, attack: f32) -> (f32, f32) {
        let frame_count = looper.frame_count();
        let mut wet_l = 0.0;
        let mut wet_r = 0.0;

        for grain in self.pool.grains_mut().iter_mut().filter(|g| g.is_active()) {
            let window = grain.envelope(attack);
            grain.advance_cursor(frame_count);
            if let Some((l, r)) = looper.frame(grain.read_pos) {
                let gain = window * grain.amplitude;
                wet_l += l * gain;
                wet_r += r * gain;
            }
            grain.advance_phase();
        }

        (wet_l, wet_r)
    }
}
