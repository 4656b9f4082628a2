//! User configuration file handling
//!
//! Manages settings from ~/.config/slabikar/settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// User configuration from ~/.config/slabikar/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    /// Height of the SVG canvas
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canvas_height: Option<f64>,
    /// Stroke width of unfilled SVG paths
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    /// One SVG path per contour
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separate_paths: Option<bool>,
    /// Fill the combined SVG path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    /// Scale applied to outlines after reading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl ConfigFile {
    /// Get the path to the slabikar config directory
    pub fn config_dir() -> PathBuf {
        crate::logging::config_dir()
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`. A missing file is not an error; an
    /// unreadable or malformed one is logged and ignored.
    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded user settings from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// The built-in defaults written out in full, as a starting point for
    /// editing.
    pub fn example() -> Self {
        let defaults = crate::core::settings::ConversionSettings::default();
        Self {
            canvas_height: Some(defaults.canvas_height),
            stroke_width: Some(defaults.stroke_width),
            separate_paths: Some(defaults.separate_paths),
            fill: Some(defaults.fill),
            scale: Some(defaults.scale),
        }
    }

    /// Write [`ConfigFile::example`] to `path` unless a file is already
    /// there. Returns whether a file was written.
    pub fn initialize(path: &Path) -> anyhow::Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::example().save_to(path)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_leaves_other_fields_unset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "stroke_width": 16.0 }"#).unwrap();

        let config = ConfigFile::load_from(&path).unwrap();
        assert_eq!(config.stroke_width, Some(16.0));
        assert_eq!(config.canvas_height, None);
        assert_eq!(config.fill, None);
    }

    #[test]
    fn missing_or_malformed_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        assert_eq!(ConfigFile::load_from(&path), None);

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(ConfigFile::load_from(&path), None);
    }

    #[test]
    fn initialize_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        assert!(ConfigFile::initialize(&path).unwrap());
        assert_eq!(ConfigFile::load_from(&path), Some(ConfigFile::example()));

        fs::write(&path, r#"{ "scale": 40.0 }"#).unwrap();
        assert!(!ConfigFile::initialize(&path).unwrap());
        assert_eq!(ConfigFile::load_from(&path).unwrap().scale, Some(40.0));
    }
}
