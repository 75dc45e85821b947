//! Preset management for the granula spray effect.
//!
//! A preset is a small TOML file holding the five spray controls plus a
//! sample-rate hint and an optional random seed.
//!
//! # Features
//!
//! - **Presets**: Load, validate, and save [`SprayPreset`] files
//! - **Validation**: Range checks against the effect's own parameter descriptors
//! - **Paths**: Platform-specific user preset directory
//! - **Factory Presets**: Built-in starting points
//!
//! # Example
//!
//! ```rust,no_run
//! use granula_config::{ControlSettings, SprayPreset, user_presets_dir};
//! use granula_spray::SprayEffect;
//!
//! let preset = SprayPreset::new("Drift")
//!     .with_description("Sparse grains an octave down")
//!     .with_controls(ControlSettings { spray: 30.0, pitch: 25.0, ..ControlSettings::default() });
//!
//! let mut effect = SprayEffect::new(48000.0);
//! preset.apply(&mut effect);
//!
//! preset.save(user_presets_dir().join("drift.toml")).unwrap();
//! ```

mod error;
mod preset;

/// Platform-specific paths for presets.
pub mod paths;

/// Preset validation.
pub mod validation;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use error::{ConfigError, Result};
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_preset_names, factory_presets, get_factory_preset,
    is_factory_preset,
};
pub use paths::{
    ensure_user_presets_dir, find_preset, list_user_presets, preset_name_from_path,
    user_config_dir, user_presets_dir,
};
pub use preset::{ControlSettings, SprayPreset};
pub use validation::{ValidationError, ValidationResult, validate_preset};
