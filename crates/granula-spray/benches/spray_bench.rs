//! Criterion benchmarks for the granular spray engine
//!
//! Run with: cargo bench -p granula-spray
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use granula_core::Effect;
use granula_spray::{ControlSnapshot, GranularSpray, LoopView, SprayEffect, Xorshift32};

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512, 1024];

fn generate_loop(frames: usize) -> Vec<f32> {
    (0..frames * 2)
        .map(|i| {
            let t = (i / 2) as f32 / SAMPLE_RATE;
            (2.0 * std::f32::consts::PI * 220.0 * t).sin() * 0.5
        })
        .collect()
}

/// Engine at full spray over two seconds of loop.
fn bench_engine(c: &mut Criterion) {
    let buffer = generate_loop(2 * SAMPLE_RATE as usize);
    let controls = ControlSnapshot {
        spray: 1.0,
        grain_shape: 0.3,
        pitch: 0.8,
        dry_wet: 0.7,
        looper_speed: 1.0,
    };
    let mut group = c.benchmark_group("GranularSpray");

    for &block_size in BLOCK_SIZES {
        group.bench_with_input(
            BenchmarkId::from_parameter(block_size),
            &block_size,
            |b, &size| {
                let mut engine = GranularSpray::new(SAMPLE_RATE, Xorshift32::new(1));
                let mut left = vec![0.1; size];
                let mut right = vec![0.1; size];
                let mut position = 0.0f32;
                b.iter(|| {
                    let view = LoopView::new(&buffer, position, 1.0, 0.0);
                    engine.process(Some(view), &controls, &mut left, &mut right);
                    position = (position + size as f32 / 96000.0) % 1.0;
                    black_box(left[0])
                })
            },
        );
    }

    group.finish();
}

fn bench_effect(c: &mut Criterion) {
    let mut group = c.benchmark_group("SprayEffect");

    for &block_size in BLOCK_SIZES {
        group.bench_with_input(
            BenchmarkId::from_parameter(block_size),
            &block_size,
            |b, &size| {
                let mut effect = SprayEffect::new(SAMPLE_RATE).with_seed(2);
                effect.set_spray(0.9);
                effect.set_mix(0.6);
                let input = generate_loop(size);
                let mut left = vec![0.0; size];
                let mut right = vec![0.0; size];
                b.iter(|| {
                    for (i, frame) in input.chunks_exact(2).enumerate() {
                        left[i] = frame[0];
                        right[i] = frame[1];
                    }
                    effect.process_block_stereo(black_box(&mut left), black_box(&mut right));
                    black_box(left[0])
                })
            },
        );
    }

    group.finish();
}

fn bench_passthrough(c: &mut Criterion) {
    let buffer = generate_loop(1024);
    let controls = ControlSnapshot::default();
    let mut engine = GranularSpray::new(SAMPLE_RATE, Xorshift32::new(1));
    let mut left = vec![0.1f32; 512];
    let mut right = vec![0.1f32; 512];
    c.bench_function("GranularSpray/bypass_512", |b| {
        b.iter(|| {
            let view = LoopView::new(&buffer, 0.0, 1.0, 0.0);
            engine.process(Some(view), black_box(&controls), &mut left, &mut right);
        })
    });
}

criterion_group!(benches, bench_engine, bench_effect, bench_passthrough);
criterion_main!(benches);
