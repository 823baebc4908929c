//! Configuration and settings management for coordcalc
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into sections:
//! - Display settings (decimal places used when showing results)
//! - Chamfer defaults (approach distance, preset angles)

use coordcalc_core::{rounding, ChamferParameters, Point};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Smallest number of decimal places a user may pick
pub const MIN_DECIMAL_PLACES: u8 = 1;
/// Largest number of decimal places a user may pick
pub const MAX_DECIMAL_PLACES: u8 = 3;

/// Result display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Decimal places for displayed coordinates (1-3)
    pub decimal_places: u8,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { decimal_places: 2 }
    }
}

/// Defaults offered on the chamfer input screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChamferSettings {
    /// Approach distance pre-filled for new calculations (mm)
    pub default_approach_distance: f64,
    /// One-tap chamfer angles (degrees)
    pub preset_angles: Vec<f64>,
}

impl Default for ChamferSettings {
    fn default() -> Self {
        Self {
            default_approach_distance: ChamferParameters::DEFAULT_APPROACH_DISTANCE,
            preset_angles: ChamferParameters::PRESET_ANGLES.to_vec(),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Display settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Chamfer defaults
    #[serde(default)]
    pub chamfer: ChamferSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config dir>/coordcalc/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("coordcalc").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config directory on this platform".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        info!(path = %path.display(), "loaded settings");
        Ok(config)
    }

    /// Load config from file, or fall back to defaults when the file is absent
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            info!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = format_of(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        info!(path = %path.display(), "saved settings");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let places = self.display.decimal_places;
        if !(MIN_DECIMAL_PLACES..=MAX_DECIMAL_PLACES).contains(&places) {
            warn!(places, "decimal places out of range");
            return Err(ConfigError::ValueOutOfRange {
                key: "display.decimal_places".to_string(),
                value: places.to_string(),
            });
        }

        let distance = self.chamfer.default_approach_distance;
        if !(distance > 0.0 && distance.is_finite()) {
            return Err(ConfigError::ValueOutOfRange {
                key: "chamfer.default_approach_distance".to_string(),
                value: distance.to_string(),
            });
        }

        if let Some(angle) = self
            .chamfer
            .preset_angles
            .iter()
            .find(|a| !(**a > 0.0 && **a < 90.0))
        {
            return Err(ConfigError::ValueOutOfRange {
                key: "chamfer.preset_angles".to_string(),
                value: angle.to_string(),
            });
        }

        Ok(())
    }

    /// Set the display precision, rejecting values outside 1-3
    pub fn set_decimal_places(&mut self, places: u8) -> ConfigResult<()> {
        if !(MIN_DECIMAL_PLACES..=MAX_DECIMAL_PLACES).contains(&places) {
            return Err(ConfigError::ValueOutOfRange {
                key: "display.decimal_places".to_string(),
                value: places.to_string(),
            });
        }
        self.display.decimal_places = places;
        Ok(())
    }

    pub fn decimal_places(&self) -> u32 {
        u32::from(self.display.decimal_places)
    }

    /// Round a value for display with the configured precision
    pub fn round(&self, value: f64) -> f64 {
        rounding::round(value, self.decimal_places())
    }

    /// Round a point for display with the configured precision
    pub fn round_point(&self, point: Point) -> Point {
        rounding::round_point(point, self.decimal_places())
    }

    /// Format a point as `(x, y)` with the configured precision
    pub fn format_point(&self, point: Point) -> String {
        point.format(self.decimal_places())
    }
}
