//! Shared CLI helpers used across multiple commands.

use anyhow::Context;
use clap::Args;
use granula_config::{ControlSettings, SprayPreset, find_preset, get_factory_preset};
use granula_spray::SprayEffect;

/// Control overrides shared by `process` and `presets save`.
#[derive(Args, Debug, Default)]
pub struct ControlArgs {
    /// Spray amount, 0-100%
    #[arg(long)]
    pub spray: Option<f32>,

    /// Grain shape, 0-100% (0 = sharp attack, 100 = slow swell)
    #[arg(long)]
    pub shape: Option<f32>,

    /// Pitch, 0-100% (50 = unison, low = octaves down, high = octaves up)
    #[arg(long)]
    pub pitch: Option<f32>,

    /// Dry/wet mix, 0-100%
    #[arg(long)]
    pub mix: Option<f32>,

    /// Loop speed, -2 to 2 (negative plays in reverse)
    #[arg(long, allow_hyphen_values = true)]
    pub speed: Option<f32>,

    /// Set a parameter by name or string id (e.g. "spray_pitch=75")
    #[arg(long, value_parser = parse_key_val, number_of_values = 1)]
    pub param: Vec<(String, String)>,
}

impl ControlArgs {
    /// Write every given override into `controls`, flags first, then
    /// `--param` pairs in order.
    pub fn apply_to(&self, controls: &mut ControlSettings) -> anyhow::Result<()> {
        let flags = [self.spray, self.shape, self.pitch, self.mix, self.speed];
        for (index, value) in flags.into_iter().enumerate() {
            if let Some(value) = value {
                set_control(controls, index, value)?;
            }
        }

        for (key, value) in &self.param {
            let index = find_control(key).with_context(|| {
                format!("Unknown parameter '{key}'. Use 'granula params' to list them.")
            })?;
            let value: f32 = value
                .trim()
                .parse()
                .with_context(|| format!("Invalid value for '{key}': '{value}'"))?;
            set_control(controls, index, value)?;
        }
        Ok(())
    }
}

/// Parse a `key=value` string for clap's `value_parser`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.to_string()))
        .ok_or_else(|| format!("Invalid parameter format: '{s}' (expected key=value)"))
}

/// Parameter index for a display name, short name, or string id
/// (case-insensitive).
pub fn find_control(key: &str) -> Option<usize> {
    (0..SprayEffect::PARAM_COUNT).find(|&index| {
        SprayEffect::descriptor(index).is_some_and(|desc| {
            desc.name.eq_ignore_ascii_case(key)
                || desc.short_name.eq_ignore_ascii_case(key)
                || desc.string_id.eq_ignore_ascii_case(key)
        })
    })
}

/// Set control `index` after checking it against the parameter's range.
pub fn set_control(
    controls: &mut ControlSettings,
    index: usize,
    value: f32,
) -> anyhow::Result<()> {
    let desc =
        SprayEffect::descriptor(index).with_context(|| format!("No parameter at index {index}"))?;
    if !desc.contains(value) {
        anyhow::bail!(
            "{} must be between {} and {}, got {}",
            desc.name,
            desc.min,
            desc.max,
            value
        );
    }
    let slot = match index {
        0 => &mut controls.spray,
        1 => &mut controls.grain_shape,
        2 => &mut controls.pitch,
        3 => &mut controls.mix,
        _ => &mut controls.loop_speed,
    };
    *slot = value;
    Ok(())
}

/// Load a preset by name or path.
///
/// Searches in this order:
/// 1. File path (if it names an existing file)
/// 2. User presets (by name)
/// 3. Factory presets (by name)
pub fn load_preset(name: &str) -> anyhow::Result<SprayPreset> {
    if let Some(path) = find_preset(name) {
        return SprayPreset::load(&path)
            .with_context(|| format!("Failed to load preset {}", path.display()));
    }

    get_factory_preset(name).with_context(|| {
        format!("Preset '{name}' not found. Use 'granula presets list' to see available presets.")
    })
}
