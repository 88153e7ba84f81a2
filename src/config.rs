//! User settings
//!
//! Read once at startup from `settings.json` in the user's config directory:
//! - Linux: ~/.config/rug-catalog/settings.json
//! - macOS: ~/Library/Application Support/rug-catalog/settings.json
//! - Windows: %APPDATA%\rug-catalog\settings.json
//!
//! Every field has a default, so a missing or partial file is fine.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "rug-catalog";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub contact: ContactSettings,
    pub images: ImageSettings,
    /// Catalog document replacing the bundled one
    pub catalog_path: Option<PathBuf>,
}

/// Static recipient details for click-to-contact
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactSettings {
    pub business_name: String,
    /// Host of the messaging service deep link (e.g. "wa.me")
    pub messaging_host: String,
    /// Recipient identifier appended to the deep link path
    pub recipient_id: String,
    pub phone_number: String,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            business_name: "Aladdin's Ride".to_string(),
            messaging_host: "wa.me".to_string(),
            recipient_id: "966500000000".to_string(),
            phone_number: "+966 50 000 0000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    /// Substituted for any image that fails to load
    pub placeholder_url: String,
    /// Longest edge of grid thumbnails in pixels
    pub thumbnail_size: u32,
    /// Download cache location (defaults to the user cache directory)
    pub cache_dir: Option<PathBuf>,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            placeholder_url: "https://tbrhub.com/aladdinsride/images/placeholder.jpg".to_string(),
            thumbnail_size: 256,
            cache_dir: None,
        }
    }
}

impl ImageSettings {
    /// Cache directory for downloaded images
    /// Returns ~/.cache/rug-catalog/images on Linux
    pub fn resolved_cache_dir(&self) -> PathBuf {
        if let Some(dir) = &self.cache_dir {
            return dir.clone();
        }
        let mut path = dirs::cache_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(std::env::temp_dir);
        path.push(APP_DIR);
        path.push("images");
        path
    }
}

impl AppConfig {
    /// Default location of the settings file, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push(APP_DIR);
        path.push(SETTINGS_FILE);
        Some(path)
    }

    /// Load settings from the default location, falling back to defaults
    /// when there is no config directory or no settings file
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "settings loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_settings(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_settings(r#"{ "contact": { "recipient_id": "15550100" } }"#);
        let config = AppConfig::from_path(file.path()).unwrap();
        assert_eq!(config.contact.recipient_id, "15550100");
        assert_eq!(config.contact.messaging_host, "wa.me");
        assert_eq!(config.images, ImageSettings::default());
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_empty_object_is_default() {
        let file = write_settings("{}");
        assert_eq!(AppConfig::from_path(file.path()).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let file = write_settings("{ not json");
        assert!(matches!(
            AppConfig::from_path(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_cache_dir_override() {
        let file = write_settings(r#"{ "images": { "cache_dir": "/tmp/rugs" } }"#);
        let config = AppConfig::from_path(file.path()).unwrap();
        assert_eq!(config.images.resolved_cache_dir(), PathBuf::from("/tmp/rugs"));
        assert_eq!(config.images.thumbnail_size, 256);
    }
}
