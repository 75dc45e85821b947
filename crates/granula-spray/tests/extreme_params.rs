//! Extreme parameter tests for the spray effect and engine.
//!
//! Verifies finite output with every parameter at its minimum and maximum,
//! at extreme sample rates (8 kHz and 192 kHz), and with hostile control
//! values fed straight to the engine.

use granula_core::{Effect, ParameterInfo};
use granula_spray::{ControlSnapshot, GranularSpray, LoopView, SprayEffect, Xorshift32};

const DEFAULT_SAMPLE_RATE: f32 = 48000.0;
const LOW_SAMPLE_RATE: f32 = 8000.0;
const HIGH_SAMPLE_RATE: f32 = 192000.0;
const NUM_SAMPLES: usize = 20000;
const BLOCK: usize = 128;

/// Feed `NUM_SAMPLES` of a square-ish signal in blocks and assert every
/// output sample is finite.
fn assert_finite_output(effect: &mut impl Effect, label: &str) {
    let mut left = vec![0.0f32; BLOCK];
    let mut right = vec![0.0f32; BLOCK];
    for block in 0..NUM_SAMPLES / BLOCK {
        for (i, (l, r)) in left.iter_mut().zip(right.iter_mut()).enumerate() {
            let n = block * BLOCK + i;
            *l = if n % 3 == 0 { 0.5 } else if n % 3 == 1 { -0.5 } else { 0.0 };
            *r = -*l;
        }
        effect.process_block_stereo(&mut left, &mut right);
        for (i, (l, r)) in left.iter().zip(&right).enumerate() {
            assert!(
                l.is_finite() && r.is_finite(),
                "{}: non-finite output at sample {}: ({}, {})",
                label,
                block * BLOCK + i,
                l,
                r
            );
        }
    }
}

fn set_all_params(effect: &mut SprayEffect, pick: impl Fn(f32, f32) -> f32) {
    for i in 0..effect.param_count() {
        if let Some(desc) = effect.param_info(i) {
            effect.set_param(i, pick(desc.min, desc.max));
        }
    }
}

fn run_extreme_test(sample_rate: f32, label: &str) {
    {
        let mut effect = SprayEffect::new(sample_rate);
        set_all_params(&mut effect, |min, _| min);
        assert_finite_output(&mut effect, &format!("{} (all min)", label));
    }
    {
        let mut effect = SprayEffect::new(sample_rate);
        set_all_params(&mut effect, |_, max| max);
        assert_finite_output(&mut effect, &format!("{} (all max)", label));
        assert!(effect.stats().spawned > 0, "{}: no grains at full spray", label);
    }
    {
        let mut effect = SprayEffect::new(sample_rate);
        set_all_params(&mut effect, |min, max| min + (max - min) * 0.5);
        assert_finite_output(&mut effect, &format!("{} (all mid)", label));
    }
}

#[test]
fn test_extreme_default_rate() {
    run_extreme_test(DEFAULT_SAMPLE_RATE, "48 kHz");
}

#[test]
fn test_extreme_low_rate() {
    run_extreme_test(LOW_SAMPLE_RATE, "8 kHz");
}

#[test]
fn test_extreme_high_rate() {
    run_extreme_test(HIGH_SAMPLE_RATE, "192 kHz");
}

#[test]
fn test_sample_rate_switch_mid_stream() {
    let mut effect = SprayEffect::new(HIGH_SAMPLE_RATE);
    set_all_params(&mut effect, |_, max| max);
    assert_finite_output(&mut effect, "192 kHz before switch");
    effect.set_sample_rate(LOW_SAMPLE_RATE);
    assert_finite_output(&mut effect, "8 kHz after switch");
}

#[test]
fn test_hostile_controls_on_engine() {
    let buffer: Vec<f32> = (0..4096).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
    let hostile = [
        ControlSnapshot {
            spray: f32::INFINITY,
            grain_shape: f32::NAN,
            pitch: -5.0,
            dry_wet: 3.0,
            looper_speed: f32::NEG_INFINITY,
        },
        ControlSnapshot {
            spray: 1.0,
            grain_shape: 2.0,
            pitch: f32::NAN,
            dry_wet: f32::NAN,
            looper_speed: 1e30,
        },
        ControlSnapshot {
            spray: 1.0,
            grain_shape: -1.0,
            pitch: 7.0,
            dry_wet: 1.0,
            looper_speed: 0.0,
        },
    ];

    for (case, controls) in hostile.iter().enumerate() {
        let mut engine = GranularSpray::new(LOW_SAMPLE_RATE, Xorshift32::new(case as u32 + 1));
        let mut left = vec![0.1f32; 512];
        let mut right = vec![0.1f32; 512];
        for _ in 0..40 {
            let view = LoopView::new(&buffer, f32::NAN, 1.0, 0.0);
            engine.process(Some(view), controls, &mut left, &mut right);
            assert!(
                left.iter().chain(&right).all(|s| s.is_finite()),
                "case {}: non-finite output",
                case
            );
        }
    }
}

#[test]
fn test_reverse_and_stopped_loop() {
    for speed in [-2.0, -1.0, 0.0] {
        let mut effect = SprayEffect::new(DEFAULT_SAMPLE_RATE);
        effect.set_spray(1.0);
        effect.set_mix(1.0);
        effect.set_looper_speed(speed);
        effect.reset();
        assert_finite_output(&mut effect, &format!("speed {}", speed));
    }
}
