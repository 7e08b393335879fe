//! Settings file for the floem-light app.
//!
//! Every field has a default, so a config file only needs the keys the user
//! wants to change.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::{DEFAULT_BRIGHTNESS, DEFAULT_HUE};

/// Current configuration file format version.
pub const CONFIG_VERSION: u32 = 1;

const APP_DIR: &str = "floem-light";

/// Errors raised while loading or saving the config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
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

/// Application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Where favourites are stored; `None` uses the platform data dir
    pub favorites_path: Option<PathBuf>,

    /// Hue the light page opens at (0–100)
    pub initial_hue: f64,

    /// Brightness the light page opens at (0–100)
    pub initial_brightness: f64,

    /// Backlight level the app starts with (0.0–1.0)
    pub initial_screen_brightness: f64,

    /// Log verbosity level
    pub log_level: LogLevel,

    pub window_width: f64,
    pub window_height: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            favorites_path: None,
            initial_hue: DEFAULT_HUE,
            initial_brightness: DEFAULT_BRIGHTNESS,
            initial_screen_brightness: 1.0,
            log_level: LogLevel::default(),
            window_width: 360.0,
            window_height: 720.0,
        }
    }
}

impl AppConfig {
    /// Default config file location, `<config_dir>/floem-light/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.json"))
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write pretty JSON to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolved favourites file location.
    ///
    /// Falls back to the working directory when the platform has no data dir.
    pub fn favorites_path(&self) -> PathBuf {
        self.favorites_path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|dir| dir.join(APP_DIR))
                .unwrap_or_default()
                .join("favorites.json")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = AppConfig::from_json(r#"{"initial_hue": 12.5, "log_level": "debug"}"#)
            .expect("parse");
        assert_eq!(config.initial_hue, 12.5);
        assert_eq!(config.initial_brightness, DEFAULT_BRIGHTNESS);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.version, CONFIG_VERSION);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(
            AppConfig::from_json("[1, 2"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("floem-light-config-{}", std::process::id()));
        let path = dir.join("nested").join("config.json");

        let config = AppConfig {
            favorites_path: Some(PathBuf::from("/tmp/favs.json")),
            initial_brightness: 42.0,
            log_level: LogLevel::Warn,
            ..AppConfig::default()
        };
        config.save(&path).expect("save");
        let loaded = AppConfig::load(&path).expect("load");
        assert_eq!(loaded, config);
        assert_eq!(loaded.favorites_path(), PathBuf::from("/tmp/favs.json"));

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("floem-light-does-not-exist/config.json");
        assert_eq!(AppConfig::load(&path).expect("load"), AppConfig::default());
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
        assert_eq!(LogLevel::default().to_level_filter(), log::LevelFilter::Info);
    }
}
