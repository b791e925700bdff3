//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory),
//! and applying command-line overrides on top.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use folio::{
    FolioError,
    config::{AppConfig, ExportMode, PagePreset},
};

use crate::Args;

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for FolioError {
    fn from(err: ConfigError) -> Self {
        FolioError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (folio/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, FolioError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("folio/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "folio", "folio") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, FolioError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}

/// Applies the page and export flags of `args` on top of `config`.
///
/// `--preset` is applied first so explicit `--width`/`--height` values win
/// and switch the page to a custom size.
///
/// # Errors
///
/// Returns a validation error for an unknown preset or mode, or a
/// dimension that is not a positive number.
pub fn apply_overrides(config: AppConfig, args: &Args) -> Result<AppConfig, FolioError> {
    let mut page = config.page().clone();
    let mut export = config.export().clone();

    if let Some(preset) = &args.preset {
        let preset: PagePreset = preset.parse().map_err(ConfigError::Validation)?;
        page.apply_preset(preset);
    }

    if args.width.is_some() || args.height.is_some() {
        let width = validate_inches("width", args.width.unwrap_or(page.width_inches()))?;
        let height = validate_inches("height", args.height.unwrap_or(page.height_inches()))?;
        page.set_custom_size(width, height);
    }

    if let Some(name) = &args.name {
        page.set_document_name(name.as_str());
    }

    if let Some(mode) = &args.mode {
        let mode: ExportMode = mode.parse().map_err(ConfigError::Validation)?;
        export = export.with_mode(mode);
    }

    debug!(
        preset:% = page.preset(),
        width = page.width_inches(),
        height = page.height_inches();
        "Page settings resolved"
    );
    Ok(config.with_page(page).with_export(export))
}

fn validate_inches(what: &str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::Validation(format!(
            "page {what} must be a positive number of inches, got {value}"
        )))
    }
}
