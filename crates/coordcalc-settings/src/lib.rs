//! coordcalc Settings Crate
//!
//! Handles user configuration: display precision and chamfer defaults,
//! loaded from and saved to JSON or TOML files.

pub mod config;
pub mod error;

pub use config::{ChamferSettings, Config, DisplaySettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
