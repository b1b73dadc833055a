//! # Configuration
//!
//! Settings with a clear override hierarchy:
//! defaults → config file → CLI flags.
//!
//! A config file is only read when one is named with `--config`; a plain
//! launch reads no files and no environment.

use log::{LevelFilter, debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::error::ConfigError;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct TodolistConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub max_line_length: Option<usize>,
    pub resize_delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Characters accepted by the line editor, not counting the terminator.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 63;
/// Pause before redrawing after a resize so the terminal settles.
pub const DEFAULT_RESIZE_DELAY_MS: u64 = 75;
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub max_line_length: usize,
    pub resize_delay: Duration,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&TodolistConfig::default(), &Overrides::default())
    }
}

impl ResolvedConfig {
    /// The configured level, or `None` when it names no known level.
    pub fn level_filter(&self) -> Option<LevelFilter> {
        self.log_level.parse().ok()
    }
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub max_line_length: Option<usize>,
    pub resize_delay_ms: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

// ============================================================================
// Loading
// ============================================================================

/// Load config from `path`, or return defaults when no path was given.
pub fn load_config(path: Option<&Path>) -> Result<TodolistConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(TodolistConfig::default());
    };

    let contents = fs::read_to_string(path)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<TodolistConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

// ============================================================================
// Resolution
// ============================================================================

/// Collapse defaults → config file → CLI flags into concrete values.
pub fn resolve(config: &TodolistConfig, cli: &Overrides) -> ResolvedConfig {
    let max_line_length = cli
        .max_line_length
        .or(config.general.max_line_length)
        .unwrap_or(DEFAULT_MAX_LINE_LENGTH)
        .max(1);

    let resize_delay_ms = cli
        .resize_delay_ms
        .or(config.general.resize_delay_ms)
        .unwrap_or(DEFAULT_RESIZE_DELAY_MS);

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.logging.file.as_ref().map(PathBuf::from));

    let log_level = cli
        .log_level
        .clone()
        .or_else(|| config.logging.level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    ResolvedConfig {
        max_line_length,
        resize_delay: Duration::from_millis(resize_delay_ms),
        log_file,
        log_level,
    }
}
