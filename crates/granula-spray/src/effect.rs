//! Self-contained spray effect for hosts without a loop recorder.
//!
//! [`SprayEffect`] records its own input into a [`CaptureRing`] and sprays
//! grains from that ring, so it can sit in an ordinary effect chain.
//!
//! ## Parameter Indices (`ParameterInfo`)
//!
//! | Index | Name | Range | Default |
//! |-------|------|-------|---------|
//! | 0 | Spray | 0–100% | 0% |
//! | 1 | Grain Shape | 0–100% | 50% |
//! | 2 | Pitch | 0–100% | 50% |
//! | 3 | Mix | 0–100% | 50% |
//! | 4 | Loop Speed | -2–2x | 1x |

use granula_core::{Effect, ParamDescriptor, ParamId, ParameterInfo, SmoothedParam, Xorshift32};

use crate::capture::CaptureRing;
use crate::controls::ControlSnapshot;
use crate::spray::{GranularSpray, SprayStats};

/// Capture length used by [`SprayEffect::new`], in seconds.
pub const DEFAULT_LOOP_SECONDS: f32 = 2.0;

const SPRAY: usize = 0;
const GRAIN_SHAPE: usize = 1;
const PITCH: usize = 2;
const MIX: usize = 3;
const LOOP_SPEED: usize = 4;

/// Granular spray over a capture of the effect's own input.
///
/// # Example
///
/// ```rust
/// use granula_core::Effect;
/// use granula_spray::SprayEffect;
///
/// let mut spray = SprayEffect::new(48000.0).with_seed(9);
/// spray.set_spray(0.8);
/// spray.set_mix(0.5);
///
/// let (l, r) = spray.process_stereo(0.2, -0.2);
/// assert!(l.is_finite() && r.is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct SprayEffect {
    engine: GranularSpray<Xorshift32>,
    capture: CaptureRing,
    loop_seconds: f32,
    spray: SmoothedParam,
    grain_shape: SmoothedParam,
    pitch: SmoothedParam,
    mix: SmoothedParam,
    looper_speed: SmoothedParam,
}

impl SprayEffect {
    /// Number of parameters exposed through [`ParameterInfo`].
    pub const PARAM_COUNT: usize = 5;

    /// Descriptor for parameter `index`, without an instance.
    ///
    /// ```rust
    /// use granula_spray::SprayEffect;
    ///
    /// let speed = SprayEffect::descriptor(4).unwrap();
    /// assert_eq!(speed.string_id, "spray_speed");
    /// assert_eq!((speed.min, speed.max), (-2.0, 2.0));
    /// ```
    pub fn descriptor(index: usize) -> Option<ParamDescriptor> {
        match index {
            SPRAY => Some(
                ParamDescriptor::percent("Spray", "Spray", 0.0)
                    .with_id(ParamId(2000), "spray_amount"),
            ),
            GRAIN_SHAPE => Some(
                ParamDescriptor::percent("Grain Shape", "Shape", 50.0)
                    .with_id(ParamId(2001), "spray_shape"),
            ),
            PITCH => Some(
                ParamDescriptor::percent("Pitch", "Pitch", 50.0)
                    .with_id(ParamId(2002), "spray_pitch"),
            ),
            MIX => Some(ParamDescriptor::mix().with_id(ParamId(2003), "spray_mix")),
            LOOP_SPEED => Some(
                ParamDescriptor::ratio("Loop Speed", "Speed", -2.0, 2.0, 1.0)
                    .with_id(ParamId(2004), "spray_speed"),
            ),
            _ => None,
        }
    }

    /// Create a spray effect with a [`DEFAULT_LOOP_SECONDS`] capture.
    pub fn new(sample_rate: f32) -> Self {
        Self::with_loop_seconds(sample_rate, DEFAULT_LOOP_SECONDS)
    }

    /// Create a spray effect that captures `loop_seconds` of input.
    pub fn with_loop_seconds(sample_rate: f32, loop_seconds: f32) -> Self {
        let defaults = ControlSnapshot::default();
        Self {
            engine: GranularSpray::new(sample_rate, Xorshift32::default()),
            capture: CaptureRing::with_seconds(sample_rate, loop_seconds),
            loop_seconds,
            spray: SmoothedParam::standard(defaults.spray, sample_rate),
            grain_shape: SmoothedParam::standard(defaults.grain_shape, sample_rate),
            pitch: SmoothedParam::standard(defaults.pitch, sample_rate),
            mix: SmoothedParam::standard(defaults.dry_wet, sample_rate),
            looper_speed: SmoothedParam::standard(defaults.looper_speed, sample_rate),
        }
    }

    /// Reseed the grain placement and pitch draws.
    #[must_use]
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.engine.rng_mut().reseed(seed);
        self
    }

    /// Set spray amount (0.0–1.0).
    pub fn set_spray(&mut self, spray: f32) {
        self.spray.set_target(clamp_control(spray, 0.0, 1.0, self.spray.target()));
    }

    /// Target spray amount.
    #[must_use]
    pub fn spray(&self) -> f32 {
        self.spray.target()
    }

    /// Set grain shape (0.0 = slow swell, 1.0 = percussive).
    pub fn set_grain_shape(&mut self, shape: f32) {
        let shape = clamp_control(shape, 0.0, 1.0, self.grain_shape.target());
        self.grain_shape.set_target(shape);
    }

    /// Target grain shape.
    #[must_use]
    pub fn grain_shape(&self) -> f32 {
        self.grain_shape.target()
    }

    /// Set pitch control (0.0 = down two octaves, 0.5 = unison, 1.0 = up two).
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch.set_target(clamp_control(pitch, 0.0, 1.0, self.pitch.target()));
    }

    /// Target pitch control.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch.target()
    }

    /// Set dry/wet (0.0 = dry, 1.0 = dry plus full grains).
    pub fn set_mix(&mut self, mix: f32) {
        self.mix.set_target(clamp_control(mix, 0.0, 1.0, self.mix.target()));
    }

    /// Target dry/wet.
    #[must_use]
    pub fn mix(&self) -> f32 {
        self.mix.target()
    }

    /// Set loop playback speed (-2.0–2.0). Grains use its magnitude.
    pub fn set_looper_speed(&mut self, speed: f32) {
        let speed = clamp_control(speed, -2.0, 2.0, self.looper_speed.target());
        self.looper_speed.set_target(speed);
    }

    /// Target loop playback speed.
    #[must_use]
    pub fn looper_speed(&self) -> f32 {
        self.looper_speed.target()
    }

    /// Capture length in seconds.
    pub fn loop_seconds(&self) -> f32 {
        self.loop_seconds
    }

    /// Spawn counters of the inner engine.
    pub fn stats(&self) -> SprayStats {
        self.engine.stats()
    }

    /// Number of grains currently sounding.
    pub fn active_grains(&self) -> usize {
        self.engine.pool().active_count()
    }

    /// Step every smoothed control by `samples` and snapshot the result.
    fn advance_controls(&mut self, samples: usize) -> ControlSnapshot {
        ControlSnapshot {
            spray: self.spray.advance_by(samples),
            grain_shape: self.grain_shape.advance_by(samples),
            pitch: self.pitch.advance_by(samples),
            dry_wet: self.mix.advance_by(samples),
            looper_speed: self.looper_speed.advance_by(samples),
        }
    }

    fn smoothed(&self, index: usize) -> Option<&SmoothedParam> {
        match index {
            SPRAY => Some(&self.spray),
            GRAIN_SHAPE => Some(&self.grain_shape),
            PITCH => Some(&self.pitch),
            MIX => Some(&self.mix),
            LOOP_SPEED => Some(&self.looper_speed),
            _ => None,
        }
    }
}

/// Clamp a control value; NaN keeps the current target.
#[inline]
fn clamp_control(value: f32, min: f32, max: f32, current: f32) -> f32 {
    if value.is_nan() {
        current
    } else {
        value.clamp(min, max)
    }
}

impl Effect for SprayEffect {
    #[inline]
    fn process_stereo(&mut self, left: f32, right: f32) -> (f32, f32) {
        let mut l = [left];
        let mut r = [right];
        self.process_block_stereo(&mut l, &mut r);
        (l[0], r[0])
    }

    /// Record the block, step the controls once for the whole block, then
    /// spray grains from the updated capture.
    fn process_block_stereo(&mut self, left: &mut [f32], right: &mut [f32]) {
        debug_assert_eq!(
            left.len(),
            right.len(),
            "Left and right buffers must have same length"
        );
        self.capture.write_block(left, right);
        let controls = self.advance_controls(left.len().min(right.len()));
        self.engine
            .process(Some(self.capture.view()), &controls, left, right);
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.engine.set_sample_rate(sample_rate);
        self.capture = CaptureRing::with_seconds(sample_rate, self.loop_seconds);
        self.spray.set_sample_rate(sample_rate);
        self.grain_shape.set_sample_rate(sample_rate);
        self.pitch.set_sample_rate(sample_rate);
        self.mix.set_sample_rate(sample_rate);
        self.looper_speed.set_sample_rate(sample_rate);
    }

    /// Clear the capture and every grain, snap the controls to their
    /// targets, and rewind the random source to its seed.
    fn reset(&mut self) {
        self.engine.reset();
        self.engine.rng_mut().rewind();
        self.capture.clear();
        self.spray.snap_to_target();
        self.grain_shape.snap_to_target();
        self.pitch.snap_to_target();
        self.mix.snap_to_target();
        self.looper_speed.snap_to_target();
    }
}

impl ParameterInfo for SprayEffect {
    fn param_count(&self) -> usize {
        Self::PARAM_COUNT
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        Self::descriptor(index)
    }

    fn get_param(&self, index: usize) -> f32 {
        match (index, self.smoothed(index)) {
            (LOOP_SPEED, Some(param)) => param.target(),
            (_, Some(param)) => param.target() * 100.0,
            (_, None) => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        let Some(desc) = Self::descriptor(index) else {
            return;
        };
        let value = desc.clamp(value);
        match index {
            SPRAY => self.set_spray(value / 100.0),
            GRAIN_SHAPE => self.set_grain_shape(value / 100.0),
            PITCH => self.set_pitch(value / 100.0),
            MIX => self.set_mix(value / 100.0),
            LOOP_SPEED => self.set_looper_speed(value),
            _ => {}
        }
    }
}
