//! Platform-specific paths for presets.
//!
//! # Directory Structure
//!
//! - **User presets**: `~/.config/granula/presets/` (Linux),
//!   `~/Library/Application Support/granula/presets/` (macOS),
//!   `%APPDATA%\granula\presets\` (Windows)
//!
//! # Example
//!
//! ```rust,no_run
//! use granula_config::paths;
//!
//! if let Some(path) = paths::find_preset("haze_variant") {
//!     println!("Found preset at: {:?}", path);
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Application name used for directory paths.
const APP_NAME: &str = "granula";

/// Subdirectory name for presets.
const PRESETS_SUBDIR: &str = "presets";

/// Returns the user configuration directory (`<config>/granula`).
///
/// Falls back to the current directory if the platform config directory
/// cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the user presets directory (`<config>/granula/presets`).
pub fn user_presets_dir() -> PathBuf {
    user_config_dir().join(PRESETS_SUBDIR)
}

/// Find a preset file by name.
///
/// `name` may be a path to an existing file, or a preset name with or
/// without the `.toml` extension, looked up in [`user_presets_dir`].
pub fn find_preset(name: &str) -> Option<PathBuf> {
    find_preset_in(name, &user_presets_dir())
}

fn find_preset_in(name: &str, dir: &Path) -> Option<PathBuf> {
    let path = PathBuf::from(name);
    if path.is_file() {
        return Some(path);
    }

    let filename = if name.ends_with(".toml") {
        name.to_string()
    } else {
        format!("{name}.toml")
    };
    let candidate = dir.join(filename);
    candidate.is_file().then_some(candidate)
}

/// Ensure the user presets directory exists and return it.
pub fn ensure_user_presets_dir() -> Result<PathBuf> {
    let dir = user_presets_dir();
    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| ConfigError::create_dir(&dir, e))?;
        tracing::info!(dir = %dir.display(), "created user presets directory");
    }
    Ok(dir)
}

/// List all `.toml` files in the user presets directory, sorted.
///
/// Returns an empty vector if the directory doesn't exist or can't be read.
pub fn list_user_presets() -> Vec<PathBuf> {
    list_presets_in_dir(&user_presets_dir())
}

fn list_presets_in_dir(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut presets: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    presets.sort();
    presets
}

/// Get the preset name from a file path (the file stem).
///
/// ```rust
/// use granula_config::paths::preset_name_from_path;
/// use std::path::Path;
///
/// let name = preset_name_from_path(Path::new("/path/to/haze_variant.toml"));
/// assert_eq!(name, Some("haze_variant".to_string()));
/// ```
pub fn preset_name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(ToString::to_string)
}
