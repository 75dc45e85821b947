//! Preset file format and operations.

use granula_core::ParameterInfo;
use granula_spray::{ControlSnapshot, SprayEffect};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::validation::{self, ValidationResult};

/// The five spray controls in parameter units.
///
/// Spray, grain shape, pitch, and mix are percentages; loop speed is a
/// ratio. Missing keys fall back to the effect's defaults.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ControlSettings {
    /// Grain density and placement range, 0–100%.
    pub spray: f32,
    /// Window attack/decay split, 0–100%.
    pub grain_shape: f32,
    /// Octave selection, 0–100% (50% = unison).
    pub pitch: f32,
    /// Dry/wet, 0–100%.
    pub mix: f32,
    /// Loop playback speed, -2–2.
    pub loop_speed: f32,
}

impl ControlSettings {
    /// Values in parameter-index order, matching [`SprayEffect`]'s
    /// [`ParameterInfo`] indices.
    pub fn values(&self) -> [f32; 5] {
        [
            self.spray,
            self.grain_shape,
            self.pitch,
            self.mix,
            self.loop_speed,
        ]
    }

    /// Read the current targets of any parameter host with the spray layout.
    pub fn capture<P: ParameterInfo + ?Sized>(params: &P) -> Self {
        Self {
            spray: params.get_param(0),
            grain_shape: params.get_param(1),
            pitch: params.get_param(2),
            mix: params.get_param(3),
            loop_speed: params.get_param(4),
        }
    }
}

impl Default for ControlSettings {
    fn default() -> Self {
        let default_of = |index| SprayEffect::descriptor(index).map_or(0.0, |d| d.default);
        Self {
            spray: default_of(0),
            grain_shape: default_of(1),
            pitch: default_of(2),
            mix: default_of(3),
            loop_speed: default_of(4),
        }
    }
}

/// A saved spray setting.
///
/// # TOML Format
///
/// ```toml
/// name = "Haze"
/// description = "Slow swells around the playhead"
/// sample_rate = 48000
/// seed = 7
///
/// [controls]
/// spray = 35.0
/// grain_shape = 15.0
/// pitch = 50.0
/// mix = 60.0
/// loop_speed = 1.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SprayPreset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sample rate hint (defaults to 48000).
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Seed for grain placement and pitch draws. `None` keeps the
    /// generator's default seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,

    /// Control values.
    #[serde(default)]
    pub controls: ControlSettings,
}

fn default_sample_rate() -> u32 {
    48000
}

impl SprayPreset {
    /// Create a preset with default controls.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            sample_rate: default_sample_rate(),
            seed: None,
            controls: ControlSettings::default(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the controls.
    pub fn with_controls(mut self, controls: ControlSettings) -> Self {
        self.controls = controls;
        self
    }

    /// Set the sample rate hint.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load and validate a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let preset = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), name = %preset.name, "loaded preset");
        Ok(preset)
    }

    /// Parse and validate a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let preset: SprayPreset = toml::from_str(toml_str)?;
        preset.validate()?;
        Ok(preset)
    }

    /// Save the preset to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        tracing::debug!(path = %path.display(), name = %self.name, "saved preset");
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every field; see [`validate_preset`](crate::validate_preset).
    pub fn validate(&self) -> ValidationResult<()> {
        validation::validate_preset(self)
    }

    /// Controls as the engine reads them (unit range, speed as a ratio).
    pub fn snapshot(&self) -> ControlSnapshot {
        ControlSnapshot {
            spray: self.controls.spray / 100.0,
            grain_shape: self.controls.grain_shape / 100.0,
            pitch: self.controls.pitch / 100.0,
            dry_wet: self.controls.mix / 100.0,
            looper_speed: self.controls.loop_speed,
        }
    }

    /// Push every control into a parameter host, by string ID.
    ///
    /// Hosts that lack a parameter simply skip it.
    pub fn apply<P: ParameterInfo + ?Sized>(&self, target: &mut P) {
        for (index, value) in self.controls.values().into_iter().enumerate() {
            let Some(desc) = SprayEffect::descriptor(index) else {
                continue;
            };
            if let Some(slot) = target.find_param_by_name(desc.string_id) {
                target.set_param(slot, value);
            }
        }
    }
}

impl Default for SprayPreset {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
