//! Configuration file support for Stat Roller.
//!
//! Settings are stored as JSON: log verbosity, rolling input tuning and the
//! range of every stat shown in the panel.

use std::path::{Path, PathBuf};
use std::time::Duration;

use roll_ui::{BoundsError, RollingInputConfig, StepBounds};
use serde::{Deserialize, Serialize};

use crate::constants;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Directory holding the config file.
const CONFIG_DIR_NAME: &str = "stat-roller";

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Application name (for identification)
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// User preferences
    #[serde(default)]
    pub preferences: UserPreferences,

    /// Rolling input gesture tuning
    #[serde(default)]
    pub rolling_input: RollingInputSettings,

    /// Stat ranges
    #[serde(default)]
    pub stats: StatsConfig,
}

fn default_app_name() -> String {
    "Stat Roller".to_string()
}

/// User preferences section of the config.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Rolling input section of the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollingInputSettings {
    /// Pixels of vertical drag per step
    pub drag_sensitivity: f32,
    /// Steps moved by PageUp/PageDown
    pub page_step_multiplier: u32,
    /// Roll-in animation length in milliseconds
    pub animation_duration_ms: u64,
}

impl Default for RollingInputSettings {
    fn default() -> Self {
        let defaults = RollingInputConfig::default();
        Self {
            drag_sensitivity: defaults.drag_sensitivity,
            page_step_multiplier: defaults.page_step_multiplier,
            animation_duration_ms: defaults.animation_duration.as_millis() as u64,
        }
    }
}

impl RollingInputSettings {
    /// Convert to the widget configuration.
    pub fn to_widget_config(&self) -> RollingInputConfig {
        RollingInputConfig {
            drag_sensitivity: self.drag_sensitivity,
            page_step_multiplier: self.page_step_multiplier,
            animation_duration: Duration::from_millis(self.animation_duration_ms),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.drag_sensitivity.is_finite() && self.drag_sensitivity > 0.0) {
            return Err(ConfigError::InvalidTuning(format!(
                "drag_sensitivity must be a positive number, got {}",
                self.drag_sensitivity
            )));
        }
        if self.page_step_multiplier == 0 {
            return Err(ConfigError::InvalidTuning(
                "page_step_multiplier must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Range of one stat. A missing limit means unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatRange {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default = "default_step")]
    pub step: f64,
    /// Value shown on startup
    pub initial: f64,
}

fn default_step() -> f64 {
    1.0
}

impl StatRange {
    /// Validated widget bounds for this range.
    pub fn step_bounds(&self) -> Result<StepBounds, BoundsError> {
        StepBounds::new(
            self.min.unwrap_or(f64::NEG_INFINITY),
            self.max.unwrap_or(f64::INFINITY),
            self.step,
        )
    }
}

/// Stats section of the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub level: StatRange,
    pub refinement: StatRange,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            level: StatRange {
                min: Some(constants::LEVEL_MIN),
                max: Some(constants::LEVEL_MAX),
                step: 1.0,
                initial: constants::LEVEL_MIN,
            },
            refinement: StatRange {
                min: Some(constants::REFINEMENT_MIN),
                max: Some(constants::REFINEMENT_MAX),
                step: 1.0,
                initial: constants::REFINEMENT_MIN,
            },
        }
    }
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            app_name: default_app_name(),
            preferences: UserPreferences::default(),
            rolling_input: RollingInputSettings::default(),
            stats: StatsConfig::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.validate()?;
        Ok(config)
    }

    /// Check stat ranges and gesture tuning.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rolling_input.validate()?;
        self.stats.level.step_bounds()?;
        self.stats.refinement.step_bounds()?;
        Ok(())
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "stat-roller-config.json"
    }

    /// Config file location under the user's config directory, falling back
    /// to `~/.config`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(Self::default_filename()))
    }

    /// Read and validate the config at `path`. `Ok(None)` if there is no file.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Self::from_json(&json).map(Some)
    }

    /// Write the config to `path`, creating missing parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A stat range that cannot be turned into widget bounds
    #[error("Invalid stat range: {0}")]
    InvalidBounds(#[from] BoundsError),

    /// Rolling input tuning out of range
    #[error("Invalid rolling input settings: {0}")]
    InvalidTuning(String),
}
