//! Factory presets bundled with granula.
//!
//! These are embedded at compile time, parse through the same path as user
//! files, and serve as starting points.

use crate::SprayPreset;

/// Factory preset names, in display order.
pub static FACTORY_PRESET_NAMES: &[&str] = &["init", "haze", "shimmer", "undertow", "scatter"];

static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("init", INIT_PRESET),
    ("haze", HAZE_PRESET),
    ("shimmer", SHIMMER_PRESET),
    ("undertow", UNDERTOW_PRESET),
    ("scatter", SCATTER_PRESET),
];

/// Spray off: the effect passes audio through untouched.
const INIT_PRESET: &str = r#"
name = "Init"
description = "Spray off - dry signal only"
sample_rate = 48000

[controls]
spray = 0.0
grain_shape = 50.0
pitch = 50.0
mix = 50.0
loop_speed = 1.0
"#;

const HAZE_PRESET: &str = r#"
name = "Haze"
description = "Sparse, slow-swelling grains close to the playhead"
sample_rate = 48000

[controls]
spray = 35.0
grain_shape = 15.0
pitch = 50.0
mix = 60.0
loop_speed = 1.0
"#;

const SHIMMER_PRESET: &str = r#"
name = "Shimmer"
description = "Dense grains mostly one and two octaves up"
sample_rate = 48000

[controls]
spray = 70.0
grain_shape = 40.0
pitch = 85.0
mix = 55.0
loop_speed = 1.0
"#;

/// Reverse loop with grains pitched down.
const UNDERTOW_PRESET: &str = r#"
name = "Undertow"
description = "Reverse loop, grains pulled one and two octaves down"
sample_rate = 48000

[controls]
spray = 50.0
grain_shape = 30.0
pitch = 15.0
mix = 65.0
loop_speed = -1.0
"#;

const SCATTER_PRESET: &str = r#"
name = "Scatter"
description = "Maximum density, percussive grains flung across the loop"
sample_rate = 48000
seed = 7

[controls]
spray = 100.0
grain_shape = 95.0
pitch = 50.0
mix = 70.0
loop_speed = 1.0
"#;

/// Every factory preset, in display order.
pub fn factory_presets() -> Vec<SprayPreset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| SprayPreset::from_toml(toml).ok())
        .collect()
}

/// Get a factory preset by internal or display name (case-insensitive).
///
/// # Example
///
/// ```rust
/// use granula_config::get_factory_preset;
///
/// let preset = get_factory_preset("Shimmer").unwrap();
/// assert_eq!(preset.name, "Shimmer");
/// assert!(get_factory_preset("nonexistent").is_none());
/// ```
pub fn get_factory_preset(name: &str) -> Option<SprayPreset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(id, toml)| Some((*id, SprayPreset::from_toml(toml).ok()?)))
        .find(|(id, preset)| {
            id.eq_ignore_ascii_case(name) || preset.name.eq_ignore_ascii_case(name)
        })
        .map(|(_, preset)| preset)
}

/// Internal names of the factory presets.
pub fn factory_preset_names() -> Vec<&'static str> {
    FACTORY_PRESETS_TOML.iter().map(|(name, _)| *name).collect()
}

/// Check if a name refers to a factory preset (case-insensitive).
///
/// ```rust
/// use granula_config::is_factory_preset;
///
/// assert!(is_factory_preset("haze"));
/// assert!(is_factory_preset("HAZE"));
/// assert!(!is_factory_preset("my_custom_preset"));
/// ```
pub fn is_factory_preset(name: &str) -> bool {
    get_factory_preset(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use granula_core::ParameterInfo;
    use granula_spray::SprayEffect;

    #[test]
    fn test_all_factory_presets_parse() {
        assert_eq!(factory_presets().len(), FACTORY_PRESET_NAMES.len());
        for (name, toml) in FACTORY_PRESETS_TOML {
            let parsed = SprayPreset::from_toml(toml);
            assert!(parsed.is_ok(), "factory preset '{name}' failed: {parsed:?}");
        }
    }

    #[test]
    fn test_names_match_table() {
        assert_eq!(factory_preset_names(), FACTORY_PRESET_NAMES);
    }

    #[test]
    fn test_init_is_passthrough() {
        let preset = get_factory_preset("init").unwrap();
        let mut effect = SprayEffect::new(48000.0);
        preset.apply(&mut effect);
        assert_eq!(effect.get_param(0), 0.0);
    }

    #[test]
    fn test_scatter_carries_seed() {
        assert_eq!(get_factory_preset("scatter").unwrap().seed, Some(7));
        assert_eq!(get_factory_preset("haze").unwrap().seed, None);
    }

    #[test]
    fn test_undertow_reverses() {
        let preset = get_factory_preset("Undertow").unwrap();
        assert!(preset.snapshot().looper_speed < 0.0);
        assert!(preset.snapshot().pitch < 0.5);
    }
}
