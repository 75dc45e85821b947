//! Granula Core - processing primitives for the granular spray engine
//!
//! This crate holds the pieces every other granula crate builds on. Nothing in
//! here allocates on the audio path.
//!
//! # Core Abstractions
//!
//! ## Effect System
//!
//! - [`Effect`] - Object-safe stereo processing trait
//!
//! ## Parameters
//!
//! - [`SmoothedParam`] - Exponential smoothing for zipper-free control changes
//! - [`ParameterInfo`] / [`ParamDescriptor`] - Runtime parameter discovery
//!
//! ## Randomness
//!
//! - [`RandomSource`] - Uniform `[0, 1)` draws, injected into the engine
//! - [`Xorshift32`] - Seedable generator usable from `no_std`
//! - `RandAdapter` - Wraps any `rand::RngCore` (feature `rand`)
//!
//! ## Utilities
//!
//! - Math functions: [`wrap_unit`], [`db_to_linear`], [`linear_to_db`], etc.
//!
//! # no_std Support
//!
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! granula-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod effect;
pub mod math;
pub mod param;
pub mod param_info;
pub mod rng;

pub use effect::Effect;
pub use math::{
    clamp, db_to_linear, flush_denormal, lerp, linear_to_db, seconds_to_samples, wrap_unit,
};
pub use param::SmoothedParam;
pub use param_info::{ParamDescriptor, ParamFlags, ParamId, ParamScale, ParamUnit, ParameterInfo};
#[cfg(feature = "rand")]
pub use rng::RandAdapter;
pub use rng::{RandomSource, Xorshift32};
