//! Criterion benchmarks for granula-core primitives
//!
//! Run with: cargo bench -p granula-core
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use granula_core::{RandomSource, SmoothedParam, Xorshift32, wrap_unit};

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK_SIZES: &[usize] = &[64, 256, 1024];

fn bench_wrap_unit(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap_unit");

    for &block_size in BLOCK_SIZES {
        let positions: Vec<f32> = (0..block_size)
            .map(|i| (i as f32 / block_size as f32) * 3.0 - 1.0)
            .collect();

        group.bench_with_input(BenchmarkId::new("positions", block_size), &block_size, |b, _| {
            b.iter(|| {
                for &x in &positions {
                    black_box(wrap_unit(black_box(x)));
                }
            });
        });
    }

    group.finish();
}

fn bench_xorshift(c: &mut Criterion) {
    let mut group = c.benchmark_group("Xorshift32");

    for &block_size in BLOCK_SIZES {
        group.bench_with_input(BenchmarkId::new("next_unit", block_size), &block_size, |b, &n| {
            let mut rng = Xorshift32::default();
            b.iter(|| {
                for _ in 0..n {
                    black_box(rng.next_unit());
                }
            });
        });
    }

    group.finish();
}

fn bench_smoothed_param(c: &mut Criterion) {
    let mut group = c.benchmark_group("SmoothedParam");

    for &block_size in BLOCK_SIZES {
        group.bench_with_input(BenchmarkId::new("advance", block_size), &block_size, |b, &n| {
            let mut param = SmoothedParam::standard(0.0, SAMPLE_RATE);
            param.set_target(1.0);
            b.iter(|| {
                for _ in 0..n {
                    black_box(param.advance());
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("advance_by", block_size), &block_size, |b, &n| {
            let mut param = SmoothedParam::standard(0.0, SAMPLE_RATE);
            param.set_target(1.0);
            b.iter(|| black_box(param.advance_by(n)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_wrap_unit, bench_xorshift, bench_smoothed_param);

criterion_main!(benches);
