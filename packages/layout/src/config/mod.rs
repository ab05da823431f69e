//! Configuration loading for the layout engine.
//!
//! Configuration files are JSONC (JSON with comments). The first file found in
//! [`config_paths`] wins; a file that parses but describes a layout that
//! cannot be built is rejected with [`ConfigError::Invalid`].

mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
pub use types::*;

use crate::error::ConfigError;

/// Directory name used under the platform configuration directories.
const APP_DIR: &str = "tessel";

/// File names looked up inside each configuration directory, in priority order.
const CONFIG_FILE_NAMES: [&str; 2] = ["config.jsonc", "config.json"];

/// Returns the possible configuration file paths in priority order.
///
/// The function checks the following locations:
/// 1. `$XDG_CONFIG_HOME/tessel/` (if `XDG_CONFIG_HOME` is set)
/// 2. `~/.config/tessel/`
/// 3. The platform configuration directory, e.g. `~/Library/Application Support/tessel/`
/// 4. `~/.tessel.jsonc` and `~/.tessel.json`
///
/// Inside each directory `config.jsonc` is preferred over `config.json`.
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut dirs_to_check = Vec::new();

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        dirs_to_check.push(PathBuf::from(xdg_config).join(APP_DIR));
    }

    if let Some(home) = dirs::home_dir() {
        let dir = home.join(".config").join(APP_DIR);
        if !dirs_to_check.contains(&dir) {
            dirs_to_check.push(dir);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let dir = config_dir.join(APP_DIR);
        if !dirs_to_check.contains(&dir) {
            dirs_to_check.push(dir);
        }
    }

    let mut paths: Vec<PathBuf> = dirs_to_check
        .iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .collect();

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".tessel.jsonc"));
        paths.push(home.join(".tessel.json"));
    }

    paths
}

/// Parses a JSONC document into a validated configuration.
///
/// # Errors
///
/// Returns `ConfigError::Parse` if the document is not valid JSON after
/// comments are stripped, or `ConfigError::Invalid` if a layout cannot be built.
pub fn parse_config(source: &str) -> Result<EngineConfig, ConfigError> {
    let reader = json_comments::StripComments::new(source.as_bytes());
    let config: EngineConfig = serde_json::from_reader(reader)?;
    config.validate()?;
    Ok(config)
}

/// Loads the configuration from a specific file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist,
/// `ConfigError::Io` if it cannot be read, and the errors of [`parse_config`].
pub fn load_config_from_path(path: impl AsRef<Path>) -> Result<(EngineConfig, PathBuf), ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }

    let source = fs::read_to_string(path)?;
    let config = parse_config(&source)?;
    debug!(path = %path.display(), layouts = config.layouts.len(), "layout: config loaded");
    Ok((config, path.to_path_buf()))
}

/// Loads the configuration from the first available config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any of
/// the expected locations, or the errors of [`load_config_from_path`] for the
/// first file that exists.
pub fn load_config() -> Result<(EngineConfig, PathBuf), ConfigError> {
    config_paths()
        .into_iter()
        .find(|path| path.exists())
        .map_or(Err(ConfigError::NotFound), load_config_from_path)
}

/// Loads the configuration, falling back to defaults.
///
/// A missing file is not worth a warning; any other failure is logged.
#[must_use]
pub fn load_or_default() -> EngineConfig {
    match load_config() {
        Ok((config, _)) => config,
        Err(ConfigError::NotFound) => {
            debug!("layout: no config file found, using defaults");
            EngineConfig::default()
        }
        Err(err) => {
            warn!(error = %err, "failed to load configuration, using defaults");
            EngineConfig::default()
        }
    }
}
