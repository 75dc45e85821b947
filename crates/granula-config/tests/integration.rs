//! Integration tests for granula-config.
//!
//! These tests drive presets end to end: file round trips, application to
//! the effect, and audible results.

use granula_config::{
    ConfigError, ControlSettings, SprayPreset, ValidationError, factory_presets,
    get_factory_preset,
};
use granula_core::{Effect, ParameterInfo};
use granula_spray::SprayEffect;
use tempfile::TempDir;

fn render(effect: &mut SprayEffect, samples: usize) -> Vec<f32> {
    let mut left: Vec<f32> = (0..samples).map(|i| (i as f32 * 0.02).sin() * 0.5).collect();
    let mut right = left.clone();
    for (l, r) in left.chunks_mut(256).zip(right.chunks_mut(256)) {
        effect.process_block_stereo(l, r);
    }
    left
}

#[test]
fn test_factory_presets_drive_effect() {
    for preset in factory_presets() {
        let mut effect = SprayEffect::new(preset.sample_rate as f32);
        if let Some(seed) = preset.seed {
            effect = effect.with_seed(seed);
        }
        preset.apply(&mut effect);
        effect.reset();

        let out = render(&mut effect, 48000);
        assert!(
            out.iter().all(|s| s.is_finite()),
            "preset '{}' produced non-finite output",
            preset.name
        );
        if preset.controls.spray > 0.0 {
            assert!(effect.stats().spawned > 0, "preset '{}' spawned nothing", preset.name);
        } else {
            assert_eq!(effect.stats().attempts(), 0);
        }
    }
}

#[test]
fn test_user_preset_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mine.toml");

    let mut effect = SprayEffect::new(48000.0);
    effect.set_param(0, 45.0);
    effect.set_param(2, 10.0);
    effect.set_param(4, -0.5);

    let preset = SprayPreset::new("Mine")
        .with_seed(99)
        .with_controls(ControlSettings::capture(&effect));
    preset.save(&path).unwrap();

    let loaded = SprayPreset::load(&path).unwrap();
    assert_eq!(loaded, preset);

    let mut restored = SprayEffect::new(48000.0);
    loaded.apply(&mut restored);
    for i in 0..restored.param_count() {
        assert!((restored.get_param(i) - effect.get_param(i)).abs() < 1e-4);
    }
}

#[test]
fn test_invalid_file_reports_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(
        &path,
        "name = \"\"\nsample_rate = 1\n[controls]\nmix = -3.0\n",
    )
    .unwrap();

    match SprayPreset::load(&path) {
        Err(ConfigError::Validation(ValidationError::Multiple(errors))) => {
            assert_eq!(errors.len(), 3);
        }
        other => panic!("expected validation errors, got {other:?}"),
    }
}

#[test]
fn test_factory_lookup_by_display_name() {
    let by_id = get_factory_preset("shimmer").unwrap();
    let by_name = get_factory_preset("SHIMMER").unwrap();
    assert_eq!(by_id, by_name);
}
