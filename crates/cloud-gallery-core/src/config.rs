//! Client configuration.
//!
//! The backend base URL is the only setting. It is read from a JSON file in
//! the platform config directory and handed to [`crate::HttpFileApi`]
//! explicitly, so tests can point the client at a mock server.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::is_http_url;

const CONFIG_DIR_NAME: &str = "cloud-gallery";
const CONFIG_FILE_NAME: &str = "config.json";

/// Backend used when no config file exists.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GalleryConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
        }
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// Location of the config file, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl GalleryConfig {
    /// Build a config for an explicit base URL.
    pub fn new(api_base_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            api_base_url: normalize_base_url(api_base_url.as_ref())?,
        })
    }

    /// Load from the default location, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        match default_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => {
                tracing::warn!("No config directory on this platform; using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("Config file {} not found; using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config = serde_json::from_str::<Self>(&raw).map_err(|error| {
            Error::Config(format!(
                "Failed to parse config at {}: {error}",
                path.display()
            ))
        })?;
        Self::new(&config.api_base_url)
    }

    /// Save to the default location, returning the path written.
    pub fn save(&self) -> Result<PathBuf> {
        let path = default_config_path()
            .ok_or_else(|| Error::Config("Failed to resolve config directory".to_string()))?;
        self.save_to_path(&path)?;
        Ok(path)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let normalized = Self::new(&self.api_base_url)?;
        let serialized = serde_json::to_string_pretty(&normalized)?;
        std::fs::write(path, serialized)?;
        Ok(())
    }
}

/// Trim whitespace and trailing slashes; require an http(s) scheme.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(Error::Config("API base URL must not be empty".to_string()));
    }
    if !is_http_url(&base) {
        return Err(Error::Config(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_base_url_rejects_invalid_values() {
        assert!(normalize_base_url("").is_err());
        assert!(normalize_base_url("   ").is_err());
        assert!(normalize_base_url("example.com").is_err());
    }

    #[test]
    fn normalize_base_url_trims_trailing_slash() {
        assert_eq!(
            normalize_base_url(" https://api.example.com/ ").unwrap(),
            "https://api.example.com"
        );
    }

    #[test]
    fn missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = GalleryConfig::load_from_path(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn config_roundtrip_normalizes_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = GalleryConfig {
            api_base_url: " https://files.example.com/api/ ".to_string(),
        };
        config.save_to_path(&path).unwrap();

        let loaded = GalleryConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded.api_base_url, "https://files.example.com/api");
    }

    #[test]
    fn rejects_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"api_base_url":"https://a.example.com","extra":1}"#).unwrap();

        let error = GalleryConfig::load_from_path(&path).unwrap_err();
        assert!(error.to_string().contains("unknown field"));
    }

    #[test]
    fn rejects_stored_url_without_scheme() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"api_base_url":"files.example.com"}"#).unwrap();

        assert!(matches!(
            GalleryConfig::load_from_path(&path),
            Err(Error::Config(_))
        ));
    }
}
