//! Configuration for lifeterm.
//!
//! Settings are read from `~/.lifeterm/config.toml`. Every field is optional:
//!
//! ```toml
//! # Starting tick interval in milliseconds
//! tick_ms = 32
//!
//! # Bounds for the +/- speed keys
//! min_tick_ms = 16
//! max_tick_ms = 1024
//!
//! # Lower means more initial alive cells (1 in frequency+1)
//! frequency = 3
//!
//! # Start paused
//! paused = false
//!
//! # Fixed seed for reproducible boards
//! # seed = 1234
//! ```
//!
//! Command line options override file values.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::core::game::DEFAULT_FREQUENCY;

pub const DEFAULT_TICK_MS: u64 = 32;
pub const MIN_TICK_MS: u64 = 16;
pub const MAX_TICK_MS: u64 = 1024;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Minimum tick interval must be positive")]
    ZeroMinTick,

    #[error("Minimum tick interval {min}ms exceeds maximum {max}ms")]
    InvertedBounds { min: u64, max: u64 },

    #[error("Tick interval {tick}ms is outside {min}..={max}ms")]
    TickOutOfRange { tick: u64, min: u64, max: u64 },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

/// Main configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Starting tick interval (ms)
    pub tick_ms: u64,
    pub min_tick_ms: u64,
    pub max_tick_ms: u64,
    /// Seeding frequency
    pub frequency: u32,
    /// Start with the simulation paused
    pub paused: bool,
    /// Fixed seed; the wall clock is used when absent
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            min_tick_ms: MIN_TICK_MS,
            max_tick_ms: MAX_TICK_MS,
            frequency: DEFAULT_FREQUENCY,
            paused: false,
            seed: None,
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::get_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_toml_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_tick_ms == 0 {
            return Err(ConfigError::ZeroMinTick);
        }
        if self.min_tick_ms > self.max_tick_ms {
            return Err(ConfigError::InvertedBounds {
                min: self.min_tick_ms,
                max: self.max_tick_ms,
            });
        }
        if !(self.min_tick_ms..=self.max_tick_ms).contains(&self.tick_ms) {
            return Err(ConfigError::TickOutOfRange {
                tick: self.tick_ms,
                min: self.min_tick_ms,
                max: self.max_tick_ms,
            });
        }
        Ok(())
    }

    /// Directory holding the config file and log
    pub fn data_dir() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".lifeterm"))
    }

    fn get_config_path() -> Option<PathBuf> {
        Self::data_dir().map(|dir| dir.join("config.toml"))
    }
}

// Get home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("USERPROFILE")
        .or_else(|| std::env::var_os("HOME"))
        .map(PathBuf::from)
}
