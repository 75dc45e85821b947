//! Control snapshot consumed by the engine once per block.
//!
//! The engine depends on [`SprayControls`], not on any concrete parameter
//! store. Hosts implement it over whatever they use (smoothed parameters,
//! atomics, a preset); tests pass a plain [`ControlSnapshot`].

/// Named scalar getters for the five controls the engine reads.
///
/// Values are read once at the start of each block and treated as stable
/// for that block. All but `looper_speed` are expected in `[0, 1]`.
pub trait SprayControls {
    /// Grain density and placement range.
    fn spray(&self) -> f32;

    /// Attack/decay split of the grain window.
    fn grain_shape(&self) -> f32;

    /// Octave-selection control.
    fn pitch(&self) -> f32;

    /// Dry/wet blend.
    fn dry_wet(&self) -> f32;

    /// Playback speed of the loop. Negative means reverse; only the
    /// magnitude sets grain pitch.
    fn looper_speed(&self) -> f32;
}

impl<C: SprayControls + ?Sized> SprayControls for &C {
    fn spray(&self) -> f32 {
        (**self).spray()
    }
    fn grain_shape(&self) -> f32 {
        (**self).grain_shape()
    }
    fn pitch(&self) -> f32 {
        (**self).pitch()
    }
    fn dry_wet(&self) -> f32 {
        (**self).dry_wet()
    }
    fn looper_speed(&self) -> f32 {
        (**self).looper_speed()
    }
}

/// Plain-value control snapshot.
///
/// # Example
///
/// ```rust
/// use granula_spray::{ControlSnapshot, SprayControls};
///
/// let controls = ControlSnapshot { spray: 0.8, ..ControlSnapshot::default() };
/// assert_eq!(controls.spray(), 0.8);
/// assert_eq!(controls.looper_speed(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSnapshot {
    /// Spray amount, `[0, 1]`.
    pub spray: f32,
    /// Grain shape, `[0, 1]`.
    pub grain_shape: f32,
    /// Pitch control, `[0, 1]`.
    pub pitch: f32,
    /// Dry/wet, `[0, 1]`.
    pub dry_wet: f32,
    /// Loop playback speed.
    pub looper_speed: f32,
}

impl ControlSnapshot {
    /// Copy every getter of another control source.
    pub fn capture<C: SprayControls + ?Sized>(controls: &C) -> Self {
        Self {
            spray: controls.spray(),
            grain_shape: controls.grain_shape(),
            pitch: controls.pitch(),
            dry_wet: controls.dry_wet(),
            looper_speed: controls.looper_speed(),
        }
    }

    /// The unit-range controls clamped to `[0, 1]`, NaN replaced with the
    /// default. A non-finite speed becomes 0 (stopped).
    pub fn clamped(&self) -> Self {
        let defaults = Self::default();
        let unit = |v: f32, fallback: f32| if v.is_nan() { fallback } else { v.clamp(0.0, 1.0) };
        Self {
            spray: unit(self.spray, defaults.spray),
            grain_shape: unit(self.grain_shape, defaults.grain_shape),
            pitch: unit(self.pitch, defaults.pitch),
            dry_wet: unit(self.dry_wet, defaults.dry_wet),
            looper_speed: if self.looper_speed.is_finite() {
                self.looper_speed
            } else {
                0.0
            },
        }
    }
}

impl Default for ControlSnapshot {
    fn default() -> Self {
        Self {
            spray: 0.0,
            grain_shape: 0.5,
            pitch: 0.5,
            dry_wet: 0.5,
            looper_speed: 1.0,
        }
    }
}

impl SprayControls for ControlSnapshot {
    fn spray(&self) -> f32 {
        self.spray
    }
    fn grain_shape(&self) -> f32 {
        self.grain_shape
    }
    fn pitch(&self) -> f32 {
        self.pitch
    }
    fn dry_wet(&self) -> f32 {
        self.dry_wet
    }
    fn looper_speed(&self) -> f32 {
        self.looper_speed
    }
}
