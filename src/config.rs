//! Configuration file support for the geofence editor.
//!
//! This module provides serialization and deserialization of editor settings,
//! so validation behaviour can be tuned without rebuilding.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_COLLINEAR_EPSILON;
use crate::geometry::Tolerance;

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
    /// Get the display name for this log level.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

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

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Editor configuration that can be exported and imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Validation settings
    #[serde(default)]
    pub editor: EditorPreferences,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Validation settings section of the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorPreferences {
    /// Orientation values at or below this magnitude count as collinear.
    /// Zero means exact comparison.
    #[serde(default = "default_collinear_epsilon")]
    pub collinear_epsilon: f64,

    /// Reject drawn points that make the area overlap an existing one,
    /// instead of only blocking the commit.
    #[serde(default)]
    pub check_overlap_on_append: bool,
}

fn default_collinear_epsilon() -> f64 {
    DEFAULT_COLLINEAR_EPSILON
}

impl Default for EditorPreferences {
    fn default() -> Self {
        Self {
            collinear_epsilon: default_collinear_epsilon(),
            check_overlap_on_append: false,
        }
    }
}

impl EditorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            editor: EditorPreferences::default(),
            log_level: LogLevel::default(),
        }
    }

    /// The collinearity tolerance these settings describe.
    pub fn tolerance(&self) -> Tolerance {
        Tolerance::new(self.editor.collinear_epsilon)
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

        let epsilon = config.editor.collinear_epsilon;
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "editor.collinear_epsilon",
                message: format!("expected a non-negative number, found {}", epsilon),
            });
        }

        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Write the configuration to a file, creating parent directories.
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Get the default filename for config export.
    pub fn default_filename() -> &'static str {
        "geofence-config.json"
    }

    /// Get the default config file path for auto-load/save.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("geofence").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("geofence")
                    .join(Self::default_filename())
            })
        }
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match Self::load(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("Failed to load config file {:?}: {}", path, e);
                None
            }
        }
    }
}

impl Default for EditorConfig {
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

    /// A setting has a value the editor cannot use
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.editor.collinear_epsilon, DEFAULT_COLLINEAR_EPSILON);
        assert!(!config.editor.check_overlap_on_append);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = EditorConfig::default();
        config.editor.collinear_epsilon = 0.0;
        config.editor.check_overlap_on_append = true;
        config.log_level = LogLevel::Debug;

        let json = config.to_json().expect("Failed to serialize config");
        let loaded = EditorConfig::from_json(&json).expect("Failed to parse config");
        assert_eq!(loaded, config);
        assert_eq!(loaded.tolerance(), Tolerance::EXACT);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = EditorConfig::from_json(r#"{"version": 1}"#).expect("Failed to parse");
        assert_eq!(config.editor, EditorPreferences::default());
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_version_too_new() {
        let json = format!(r#"{{"version": {}}}"#, CONFIG_VERSION + 1);
        let result = EditorConfig::from_json(&json);
        assert!(matches!(result, Err(ConfigError::VersionTooNew { .. })));
    }

    #[test]
    fn test_negative_epsilon_rejected() {
        let json = r#"{"version": 1, "editor": {"collinear_epsilon": -1.0}}"#;
        let result = EditorConfig::from_json(json);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
        assert_eq!(LogLevel::Debug.name(), "Debug");
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = std::env::temp_dir().join(format!("geofence-config-{}", std::process::id()));
        let path = dir.join("nested").join(EditorConfig::default_filename());

        let mut config = EditorConfig::default();
        config.editor.check_overlap_on_append = true;
        config.save(&path).expect("Failed to save config");

        let loaded = EditorConfig::load(&path).expect("Failed to load config");
        assert_eq!(loaded, config);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
