//! Preset validation.
//!
//! Control ranges come from [`SprayEffect::descriptor`], so presets and the
//! effect can never disagree about what is in range.
//!
//! # Example
//!
//! ```rust
//! use granula_config::{ControlSettings, SprayPreset, ValidationError, validate_preset};
//!
//! let ok = SprayPreset::new("Fine");
//! assert!(validate_preset(&ok).is_ok());
//!
//! let bad = SprayPreset::new("Loud")
//!     .with_controls(ControlSettings { mix: 140.0, ..ControlSettings::default() });
//! assert!(matches!(validate_preset(&bad), Err(ValidationError::OutOfRange { .. })));
//! ```

use granula_spray::SprayEffect;
use thiserror::Error;

use crate::SprayPreset;

/// Lowest accepted sample-rate hint, in Hz.
pub const MIN_SAMPLE_RATE: u32 = 8000;

/// Highest accepted sample-rate hint, in Hz.
pub const MAX_SAMPLE_RATE: u32 = 384_000;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Control value out of range.
    #[error("parameter '{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Stable string ID of the parameter.
        param: String,
        /// The value that was out of range.
        value: f32,
        /// Minimum allowed value.
        min: f32,
        /// Maximum allowed value.
        max: f32,
    },

    /// The preset name is empty or whitespace.
    #[error("preset name is empty")]
    EmptyName,

    /// The sample-rate hint is outside the supported range.
    #[error("sample rate {0} Hz outside [{MIN_SAMPLE_RATE}, {MAX_SAMPLE_RATE}]")]
    InvalidSampleRate(u32),

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Check every field of a preset.
///
/// All problems are reported: one problem comes back as itself, several as
/// [`ValidationError::Multiple`].
pub fn validate_preset(preset: &SprayPreset) -> ValidationResult<()> {
    let mut errors = Vec::new();

    if preset.name.trim().is_empty() {
        errors.push(ValidationError::EmptyName);
    }
    if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&preset.sample_rate) {
        errors.push(ValidationError::InvalidSampleRate(preset.sample_rate));
    }

    for (index, value) in preset.controls.values().into_iter().enumerate() {
        let Some(desc) = SprayEffect::descriptor(index) else {
            continue;
        };
        if !desc.contains(value) {
            errors.push(ValidationError::OutOfRange {
                param: desc.string_id.to_string(),
                value,
                min: desc.min,
                max: desc.max,
            });
        }
    }

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}
