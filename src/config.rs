// src/config.rs

//! Defines the configuration structures for the LED matrix tools.
//!
//! The configuration is a JSON document whose top-level keys group the
//! settings: `display`, `message`, `series` and `demo`. Every field has a
//! default, so a partial file (or no file at all) is always valid.
//!
//! The file is named by the `SENSEHAT_MATRIX_CONFIG` environment variable and
//! read once, on first access to [`CONFIG`].

use anyhow::{Context, Result};
use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::color::Color;
use crate::glyph::GLYPH_EDGE;
use crate::matrix::Rotation;
use crate::scroll::{MessageOptions, SeriesOptions};

/// Environment variable holding the path of the configuration file.
pub const CONFIG_ENV_VAR: &str = "SENSEHAT_MATRIX_CONFIG";

/// Process-wide configuration, loaded on first use.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::load_or_default);

// --- Top-Level Configuration Structure ---

/// Represents the complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Display geometry.
    pub display: DisplayConfig,
    /// Defaults for scrolled text.
    pub message: MessageOptions,
    /// Defaults for scrolled series.
    pub series: SeriesOptions,
    /// What the demo binary shows.
    pub demo: DemoConfig,
}

impl Config {
    /// Parses a configuration from JSON text. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid configuration JSON")
    }

    /// Reads and parses the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], falling back to defaults
    /// when the variable is unset or the file cannot be used.
    pub fn load_or_default() -> Self {
        Self::load_from(std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
    }

    fn load_from(path: Option<PathBuf>) -> Self {
        let Some(path) = path else {
            info!("{} not set, using default configuration", CONFIG_ENV_VAR);
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                info!("Configuration loaded from {}", path.display());
                config
            }
            Err(e) => {
                warn!("{:#}; using default configuration", e);
                Self::default()
            }
        }
    }
}

// --- Display Configuration ---

/// Geometry of the attached matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Pixels along one side. Text needs 8.
    pub edge_len: usize,
    /// Color used when clearing between animations.
    pub background: Color,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            edge_len: GLYPH_EDGE,
            background: Color::BLACK,
        }
    }
}

// --- Demo Configuration ---

/// Content of the demonstration sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Characters shown one at a time.
    pub letters: String,
    /// Text scrolled in every direction.
    pub message: String,
    /// Number of samples in the sine series.
    pub series_samples: usize,
    /// Samples per radian of the sine series.
    pub series_period: f32,
    /// Pause between animation frames in milliseconds. Replaces the
    /// `message` and `series` speeds while the demo runs.
    pub speed_ms: u64,
    /// Pause after each single letter in milliseconds.
    pub letter_pause_ms: u64,
    /// Rotations to run the sequence under, in order.
    pub rotations: Vec<Rotation>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            letters: "@9876543210~!".to_string(),
            message: " »»»»0123456789»»»»ABCDEFG»»»»ΔΘΠΣΦΨΩαβζ»»»» ".to_string(),
            series_samples: 100,
            series_period: 30.0,
            speed_ms: 20,
            letter_pause_ms: 200,
            rotations: Rotation::ALL.to_vec(),
        }
    }
}

impl DemoConfig {
    /// `sin(x / series_period)` for the configured number of samples.
    pub fn series(&self) -> Vec<f32> {
        (0..self.series_samples)
            .map(|x| (x as f32 / self.series_period).sin())
            .collect()
    }
}
