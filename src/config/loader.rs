//! Configuration file loading with precedence handling.
//!
//! Precedence, lowest to highest: hardcoded defaults → config file →
//! environment variables → CLI arguments.

use crate::model::options::PAGE_SIZE_DEFAULT;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (missing only counts when explicitly
    /// requested; the default path is allowed to be absent).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; unset fields fall back to hardcoded
/// defaults. Corresponds to `~/.config/roster/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Startup page size.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Whether the controls header starts visible.
    #[serde(default)]
    pub show_header: Option<bool>,

    /// Initial roster entries, replacing the built-in seed.
    #[serde(default)]
    pub seed_entries: Option<Vec<String>>,

    /// Path to the log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Fully resolved configuration after the precedence chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Startup page size.
    pub page_size: usize,
    /// Whether the controls header starts visible.
    pub show_header: bool,
    /// Initial roster entries.
    pub seed_entries: Vec<String>,
    /// Path to the log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE_DEFAULT,
            show_header: true,
            seed_entries: vec![
                "loan".to_string(),
                "otravaliev".to_string(),
                "mani".to_string(),
                "ecok".to_string(),
            ],
            log_file_path: default_log_path(),
        }
    }
}

/// Default config file location: `~/.config/roster/config.toml`.
/// `None` when no config directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("roster").join("config.toml"))
}

/// Default log file location: `~/.local/share/roster/roster.log`, or
/// `roster.log` in the working directory when no data directory exists.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("roster").join("roster.log"))
        .unwrap_or_else(|| PathBuf::from("roster.log"))
}

/// Load the config file, if any.
///
/// An explicit `--config` path must exist and parse; the default path is
/// allowed to be missing (returns `Ok(None)`).
pub fn load_config_file(explicit: Option<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let (path, required) = match explicit {
        Some(path) => (path, true),
        None => match default_config_path() {
            Some(path) => (path, false),
            None => return Ok(None),
        },
    };

    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(None);
        }
        Err(err) => {
            return Err(ConfigError::ReadError {
                path,
                reason: err.to_string(),
            });
        }
    };

    let parsed = toml::from_str(&contents).map_err(|err| ConfigError::ParseError {
        path,
        reason: err.to_string(),
    })?;
    Ok(Some(parsed))
}

/// Merge the config file over the hardcoded defaults.
pub fn merge_config(file: Option<ConfigFile>) -> ResolvedConfig {
    let mut resolved = ResolvedConfig::default();
    if let Some(file) = file {
        if let Some(page_size) = file.page_size {
            resolved.page_size = page_size;
        }
        if let Some(show_header) = file.show_header {
            resolved.show_header = show_header;
        }
        if let Some(seed_entries) = file.seed_entries {
            resolved.seed_entries = seed_entries;
        }
        if let Some(log_file_path) = file.log_file_path {
            resolved.log_file_path = log_file_path;
        }
    }
    resolved
}

/// Apply environment variable overrides (`ROSTER_PAGE_SIZE`,
/// `ROSTER_SHOW_HEADER`, `ROSTER_LOG_FILE`).
///
/// Unparsable values are logged and ignored rather than failing startup.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var("ROSTER_PAGE_SIZE") {
        match raw.parse() {
            Ok(page_size) => config.page_size = page_size,
            Err(_) => warn!(value = %raw, "ignoring unparsable ROSTER_PAGE_SIZE"),
        }
    }
    if let Ok(raw) = std::env::var("ROSTER_SHOW_HEADER") {
        match raw.as_str() {
            "true" | "1" => config.show_header = true,
            "false" | "0" => config.show_header = false,
            _ => warn!(value = %raw, "ignoring unparsable ROSTER_SHOW_HEADER"),
        }
    }
    if let Ok(raw) = std::env::var("ROSTER_LOG_FILE") {
        config.log_file_path = PathBuf::from(raw);
    }
    config
}

/// Apply CLI argument overrides (highest precedence).
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    page_size: Option<usize>,
    hide_header: bool,
    log_file: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(page_size) = page_size {
        config.page_size = page_size;
    }
    if hide_header {
        config.show_header = false;
    }
    if let Some(log_file) = log_file {
        config.log_file_path = log_file;
    }
    config
}
