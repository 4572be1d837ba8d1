//! Configuration file support for inkboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/inkboard/config.toml`. Settings include the default style for
//! new elements, toolbar defaults, picking slack, and undo depth.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DrawingConfig, HistoryConfig, ToolsConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "red"
/// default_thickness = 3.0
/// default_font_size = 32.0
///
/// [tools]
/// default_tool = "shape"
/// default_shape = "circle"
/// hit_tolerance = 4.0
/// eraser_tolerance = 6.0
///
/// [history]
/// max_depth = 100
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Style defaults for new elements (color, thickness, font size)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Toolbar defaults and picking tolerances
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Undo/redo settings
    #[serde(default)]
    pub history: HistoryConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_thickness`: 1.0 - 20.0
    /// - `default_font_size`: 8.0 - 72.0
    /// - `hit_tolerance`, `eraser_tolerance`: 0.0 - 50.0
    pub fn validate_and_clamp(&mut self) {
        // Thickness: 1.0 - 20.0
        if !(1.0..=20.0).contains(&self.drawing.default_thickness) {
            log::warn!(
                "Invalid default_thickness {:.1}, clamping to 1.0-20.0 range",
                self.drawing.default_thickness
            );
            self.drawing.default_thickness = clamp_or(self.drawing.default_thickness, 1.0, 20.0);
        }

        // Font size: 8.0 - 72.0
        if !(8.0..=72.0).contains(&self.drawing.default_font_size) {
            log::warn!(
                "Invalid default_font_size {:.1}, clamping to 8.0-72.0 range",
                self.drawing.default_font_size
            );
            self.drawing.default_font_size = clamp_or(self.drawing.default_font_size, 8.0, 72.0);
        }

        for (name, value) in [
            ("hit_tolerance", &mut self.tools.hit_tolerance),
            ("eraser_tolerance", &mut self.tools.eraser_tolerance),
        ] {
            if !(0.0..=50.0).contains(&*value) {
                log::warn!("Invalid {name} {:.1}, clamping to 0.0-50.0 range", *value);
                *value = clamp_or(*value, 0.0, 50.0);
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the configuration to `path`, creating parent directories as needed.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the config file, for editor completion.
    pub fn json_schema() -> Result<String> {
        let schema = schemars::schema_for!(Config);
        serde_json::to_string_pretty(&schema).context("Failed to serialize config schema")
    }
}

/// Clamps `value` into `min..=max`; NaN becomes `min`.
fn clamp_or(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}
