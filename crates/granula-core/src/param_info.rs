//! Parameter introspection for discoverable effect controls.
//!
//! The [`ParameterInfo`] trait lets a host, a preset loader, or the CLI find
//! out which controls an effect has, what their ranges are, and how to set
//! them, without knowing the concrete type.
//!
//! # Design
//!
//! Parameters are addressed by zero-based index. Each one is described by a
//! [`ParamDescriptor`] that also carries:
//!
//! - [`ParamId`] - stable numeric ID that survives reordering
//! - [`ParamScale`] - normalization curve (linear or power)
//! - [`ParamFlags`] - capability flags (automatable, stepped, ...)
//! - `string_id` - stable human-readable key used in presets and on the CLI
//!
//! # Example
//!
//! ```rust
//! use granula_core::{ParameterInfo, ParamDescriptor, ParamId};
//!
//! struct Blend {
//!     mix: f32,
//! }
//!
//! impl ParameterInfo for Blend {
//!     fn param_count(&self) -> usize { 1 }
//!
//!     fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
//!         match index {
//!             0 => Some(ParamDescriptor::mix().with_id(ParamId(100), "blend_mix")),
//!             _ => None,
//!         }
//!     }
//!
//!     fn get_param(&self, index: usize) -> f32 {
//!         match index {
//!             0 => self.mix,
//!             _ => 0.0,
//!         }
//!     }
//!
//!     fn set_param(&mut self, index: usize, value: f32) {
//!         if index == 0 {
//!             self.mix = value.clamp(0.0, 100.0);
//!         }
//!     }
//! }
//!
//! let mut blend = Blend { mix: 50.0 };
//! assert_eq!(blend.find_param_by_name("MIX"), Some(0));
//! blend.set_param(0, 150.0);
//! assert_eq!(blend.get_param(0), 100.0);
//! ```

/// Scaling curve for parameter normalization.
///
/// - **Linear**: `normalized = (value - min) / (max - min)`
/// - **Power(exp)**: `normalized = ((value - min) / (max - min)).powf(1.0 / exp)`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ParamScale {
    /// Linear mapping (default).
    #[default]
    Linear,
    /// Power curve mapping. exponent < 1.0 gives more resolution at the low
    /// end, exponent > 1.0 at the high end.
    Power(f32),
}

/// Stable parameter identifier that survives reordering.
///
/// Once assigned, a `ParamId` must never change for a given parameter.
/// Each effect gets a base ID and numbers its parameters from there
/// (the spray effect uses 2000..=2004).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Parameter capability flags.
///
/// # Example
///
/// ```rust
/// use granula_core::ParamFlags;
///
/// let flags = ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED);
/// assert!(flags.contains(ParamFlags::AUTOMATABLE));
/// assert!(!flags.contains(ParamFlags::HIDDEN));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamFlags(u8);

impl ParamFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// Host can automate this parameter (default for all params).
    pub const AUTOMATABLE: Self = Self(1 << 0);
    /// Parameter has discrete steps.
    pub const STEPPED: Self = Self(1 << 1);
    /// Parameter should be hidden from generic UIs.
    pub const HIDDEN: Self = Self(1 << 2);
    /// Parameter is read-only (display only).
    pub const READ_ONLY: Self = Self(1 << 3);

    /// Returns `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of two flag sets.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for ParamFlags {
    fn default() -> Self {
        Self::AUTOMATABLE
    }
}

/// Trait for effects that expose introspectable parameters.
///
/// Indices must be stable for the lifetime of the effect instance. Valid
/// indices are `0..param_count()`.
pub trait ParameterInfo {
    /// Returns the number of parameters this effect exposes.
    fn param_count(&self) -> usize;

    /// Returns the descriptor for the parameter at the given index.
    ///
    /// Returns `None` if `index >= param_count()`.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Gets the current value of the parameter at the given index.
    ///
    /// Returns `0.0` for out-of-range indices.
    fn get_param(&self, index: usize) -> f32;

    /// Sets the value of the parameter at the given index.
    ///
    /// Implementations clamp to the descriptor range and ignore
    /// out-of-range indices.
    fn set_param(&mut self, index: usize, value: f32);

    /// Find a parameter index by name (case-insensitive).
    ///
    /// Matches against [`ParamDescriptor::name`],
    /// [`ParamDescriptor::short_name`], and [`ParamDescriptor::string_id`].
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        (0..self.param_count()).find(|&i| {
            self.param_info(i).is_some_and(|desc| {
                desc.name.eq_ignore_ascii_case(name)
                    || desc.short_name.eq_ignore_ascii_case(name)
                    || (!desc.string_id.is_empty() && desc.string_id.eq_ignore_ascii_case(name))
            })
        })
    }

    /// Returns the stable [`ParamId`] for the parameter at the given index.
    fn param_id(&self, index: usize) -> Option<ParamId> {
        self.param_info(index).map(|d| d.id)
    }

    /// Finds a parameter index by its stable [`ParamId`].
    ///
    /// Linear scan; meant for setup paths, not audio.
    fn param_index_by_id(&self, id: ParamId) -> Option<usize> {
        (0..self.param_count()).find(|&i| self.param_info(i).is_some_and(|d| d.id == id))
    }
}

/// Describes a single parameter's metadata for display and validation.
///
/// `short_name` should stay within 8 characters for small displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g., "Grain Shape").
    pub name: &'static str,

    /// Short name for small displays, max 8 characters (e.g., "Shape").
    pub short_name: &'static str,

    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,

    /// Minimum allowed value.
    pub min: f32,

    /// Maximum allowed value.
    pub max: f32,

    /// Default value when the effect is created.
    pub default: f32,

    /// Recommended step increment for encoder-based control.
    pub step: f32,

    /// Stable numeric ID. Default: `ParamId(0)` (unassigned).
    pub id: ParamId,

    /// Human-readable stable ID, `"effect_param"` convention
    /// (e.g., `"spray_amount"`). Default: `""`.
    pub string_id: &'static str,

    /// Normalization curve. Default: [`ParamScale::Linear`].
    pub scale: ParamScale,

    /// Capability flags. Default: [`ParamFlags::AUTOMATABLE`].
    pub flags: ParamFlags,

    /// Parameter group for tree display. Empty means top-level.
    pub group: &'static str,
}

impl ParamDescriptor {
    /// Standard mix parameter (0–100%, default 50%).
    pub fn mix() -> Self {
        Self::percent("Mix", "Mix", 50.0)
    }

    /// Percentage parameter (0–100%) with a custom name and default.
    pub fn percent(name: &'static str, short_name: &'static str, default: f32) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Percent,
            min: 0.0,
            max: 100.0,
            default,
            step: 1.0,
            id: ParamId(0),
            string_id: "",
            scale: ParamScale::Linear,
            flags: ParamFlags::AUTOMATABLE,
            group: "",
        }
    }

    /// Ratio parameter (a multiplier such as playback speed).
    pub fn ratio(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Ratio,
            min,
            max,
            default,
            step: 0.01,
            id: ParamId(0),
            string_id: "",
            scale: ParamScale::Linear,
            flags: ParamFlags::AUTOMATABLE,
            group: "",
        }
    }

    /// Sets the stable parameter ID and string ID.
    ///
    /// # Example
    ///
    /// ```rust
    /// use granula_core::{ParamDescriptor, ParamId};
    ///
    /// let desc = ParamDescriptor::mix().with_id(ParamId(2003), "spray_mix");
    /// assert_eq!(desc.id, ParamId(2003));
    /// assert_eq!(desc.string_id, "spray_mix");
    /// ```
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Sets the normalization scale.
    pub const fn with_scale(mut self, scale: ParamScale) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the parameter flags.
    pub const fn with_flags(mut self, flags: ParamFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the parameter group.
    pub const fn with_group(mut self, group: &'static str) -> Self {
        self.group = group;
        self
    }

    /// Clamps a value to this parameter's valid range.
    ///
    /// NaN maps to the default.
    ///
    /// # Example
    ///
    /// ```rust
    /// use granula_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::mix();
    /// assert_eq!(desc.clamp(-5.0), 0.0);
    /// assert_eq!(desc.clamp(150.0), 100.0);
    /// assert_eq!(desc.clamp(f32::NAN), 50.0);
    /// ```
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.default
        } else if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Whether `value` lies inside `[min, max]`.
    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Converts a plain value to normalized range (0.0 to 1.0).
    ///
    /// # Example
    ///
    /// ```rust
    /// use granula_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::mix();
    /// assert_eq!(desc.normalize(50.0), 0.5);
    /// ```
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        let linear = (value - self.min) / range;
        match self.scale {
            ParamScale::Linear => linear,
            ParamScale::Power(exp) => libm::powf(linear, 1.0 / exp),
        }
    }

    /// Converts a normalized value (0.0 to 1.0) to the actual parameter range.
    ///
    /// Inverse of [`normalize`](Self::normalize).
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        let curved = match self.scale {
            ParamScale::Linear => normalized,
            ParamScale::Power(exp) => libm::powf(normalized, exp),
        };
        self.min + curved * (self.max - self.min)
    }
}

/// Unit type for parameter display and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Percentage (%) - for amounts, shapes, and mix.
    Percent,

    /// Ratio (x) - for playback speed multipliers.
    Ratio,

    /// Seconds (s).
    Seconds,

    /// No unit.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    ///
    /// # Example
    ///
    /// ```rust
    /// use granula_core::ParamUnit;
    ///
    /// assert_eq!(ParamUnit::Percent.suffix(), "%");
    /// assert_eq!(ParamUnit::Ratio.suffix(), "x");
    /// ```
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Percent => "%",
            ParamUnit::Ratio => "x",
            ParamUnit::Seconds => " s",
            ParamUnit::None => "",
        }
    }
}
