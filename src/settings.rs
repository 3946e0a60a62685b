//! Window settings
//!
//! Read once at startup from an optional JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};

/// Window settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Window size in logical pixels
    pub width: u32,
    pub height: u32,
    /// Pace frames to the display
    pub vsync: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            vsync: true,
        }
    }
}

impl Settings {
    /// Environment variable naming a settings file
    pub const ENV_VAR: &'static str = "STACKO_SETTINGS";

    /// Load settings from the file named by `STACKO_SETTINGS`, or defaults
    pub fn load() -> Self {
        match std::env::var_os(Self::ENV_VAR) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => Self::default(),
        }
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read {}: {}, using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.title, "Stacko");
        assert_eq!((settings.width, settings.height), (500, 500));
        assert!(settings.vsync);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "vsync": false }"#).unwrap();
        assert!(!settings.vsync);
        assert_eq!(settings.title, "Stacko");
        assert_eq!(settings.width, 500);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Settings::from_json(r#"{ "width": "wide" }"#).is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_from(Path::new("/nonexistent/stacko.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("stacko_settings_test.json");
        std::fs::write(&path, r#"{ "title": "Tower", "width": 640 }"#).unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.title, "Tower");
        assert_eq!(settings.width, 640);
        assert_eq!(settings.height, 500);

        let _ = std::fs::remove_file(&path);
    }
}
