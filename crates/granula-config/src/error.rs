//! Error types for preset operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, writing, or checking presets.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// The preset parsed but holds invalid values
    #[error("invalid preset: {0}")]
    Validation(#[from] crate::validation::ValidationError),

    /// No preset file or factory preset with this name
    #[error("preset not found: {0}")]
    PresetNotFound(String),
}

/// Result alias for preset operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::CreateDir {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;
    use std::error::Error;

    fn mock_io_err() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "mock")
    }

    #[test]
    fn read_file_display_and_source() {
        let err = ConfigError::read_file("/a/haze.toml", mock_io_err());
        let msg = err.to_string();
        assert!(msg.contains("failed to read file"), "got: {msg}");
        assert!(msg.contains("/a/haze.toml"), "got: {msg}");
        assert!(err.source().is_some());
    }

    #[test]
    fn write_file_variant() {
        let err = ConfigError::write_file("/out/p.toml", mock_io_err());
        assert!(
            matches!(err, ConfigError::WriteFile { ref path, .. } if path == std::path::Path::new("/out/p.toml"))
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn create_dir_display() {
        let err = ConfigError::create_dir("/a/b", mock_io_err());
        assert!(err.to_string().contains("failed to create directory"));
    }

    #[test]
    fn preset_not_found_display() {
        let err = ConfigError::PresetNotFound("glimmer".to_string());
        assert_eq!(err.to_string(), "preset not found: glimmer");
        assert!(err.source().is_none());
    }

    #[test]
    fn validation_converts() {
        let err: ConfigError = ValidationError::EmptyName.into();
        assert!(matches!(err, ConfigError::Validation(ValidationError::EmptyName)));
        assert_eq!(err.to_string(), "invalid preset: preset name is empty");
    }
}
