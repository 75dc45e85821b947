//! Granula Spray - granular spray engine over a shared loop buffer
//!
//! This crate turns a looping stereo buffer into a cloud of short,
//! enveloped, octave-quantized grains:
//!
//! - [`GranularSpray`] - The engine: grain pool, spawn scheduler, renderer
//! - [`LoopView`] - Borrowed snapshot of the loop, refreshed every block
//! - [`SprayControls`] / [`ControlSnapshot`] - The five controls the engine reads
//! - [`CaptureRing`] - A minimal loop source for hosts without a recorder
//! - [`SprayEffect`] - Capture plus engine behind the [`Effect`](granula_core::Effect) trait
//!
//! ## Example
//!
//! ```rust
//! use granula_spray::{ControlSnapshot, GranularSpray, LoopView, Xorshift32};
//!
//! let loop_audio: Vec<f32> = (0..96000).map(|i| ((i / 2) as f32 * 0.01).sin()).collect();
//! let mut engine = GranularSpray::new(48000.0, Xorshift32::new(1));
//! let controls = ControlSnapshot { spray: 0.6, pitch: 0.7, ..ControlSnapshot::default() };
//!
//! let mut left = vec![0.0f32; 256];
//! let mut right = vec![0.0f32; 256];
//! let view = LoopView::new(&loop_audio, 0.25, 1.0, 0.0);
//! engine.process(Some(view), &controls, &mut left, &mut right);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod capture;
pub mod controls;
pub mod effect;
pub mod envelope;
pub mod grain;
pub mod looper;
pub mod pitch;
pub mod pool;
pub mod spray;

pub use capture::CaptureRing;
pub use controls::{ControlSnapshot, SprayControls};
pub use effect::SprayEffect;
pub use grain::Grain;
pub use granula_core::{RandomSource, Xorshift32};
pub use looper::LoopView;
pub use pool::{GrainPool, MAX_GRAINS};
pub use spray::{GranularSpray, SPRAY_THRESHOLD, SprayStats, WET_GAIN};
