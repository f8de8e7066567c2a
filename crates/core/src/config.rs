//! # App Configuration
//!
//! Settings for the front end, read from `.aquacarbon/config.json` and then
//! overridden by environment variables. Command line flags override both;
//! that last layer lives in the binary.

use crate::catalog::{CatalogSource, JsonCatalog, MockCatalog};
use crate::models::UserRole;
use crate::mrv::DEFAULT_TOLERANCE;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Overrides the configuration directory
pub const HOME_ENV: &str = "AQUACARBON_HOME";
/// Path of a JSON catalog document to use instead of the built-in data
pub const DATA_ENV: &str = "AQUACARBON_DATA";
/// Role to sign in with
pub const ROLE_ENV: &str = "AQUACARBON_ROLE";

const CONFIG_FILE: &str = "config.json";

/// Get the configuration directory path (.aquacarbon)
pub fn get_config_dir() -> PathBuf {
    if let Ok(path) = std::env::var(HOME_ENV) {
        return PathBuf::from(path);
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".aquacarbon")
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// JSON catalog document; the built-in mock data when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,
    /// Role used when none is given on the command line
    #[serde(default)]
    pub role: UserRole,
    /// Print JSON instead of text
    #[serde(default)]
    pub json: bool,
    /// Accepted reported/verified gap in the MRV workspace
    #[serde(default = "default_tolerance")]
    pub mrv_tolerance: f64,
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            role: UserRole::default(),
            json: false,
            mrv_tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl AppConfig {
    /// Load from the configuration directory, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&get_config_dir().join(CONFIG_FILE))?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Apply `AQUACARBON_*` overrides looked up through `lookup`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(DATA_ENV).filter(|p| !p.is_empty()) {
            self.data_path = Some(PathBuf::from(path));
        }
        if let Some(raw) = lookup(ROLE_ENV) {
            match UserRole::parse(&raw) {
                Ok(role) => self.role = role,
                Err(e) => tracing::warn!("Ignoring {}: {}", ROLE_ENV, e),
            }
        }
    }

    /// Write to `.aquacarbon/config.json`, returning the path written
    pub fn save(&self) -> Result<PathBuf> {
        let path = get_config_dir().join(CONFIG_FILE);
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }
        let content =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Open the configured catalog source
    pub fn open_source(&self) -> Result<Box<dyn CatalogSource>> {
        match &self.data_path {
            Some(path) => {
                let catalog = JsonCatalog::open(path)
                    .with_context(|| "Failed to open configured catalog")?;
                Ok(Box::new(catalog))
            }
            None => Ok(Box::new(MockCatalog::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.role, UserRole::Buyer);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = AppConfig {
            data_path: Some(PathBuf::from("catalog.json")),
            role: UserRole::Verifier,
            json: true,
            mrv_tolerance: 0.2,
        };
        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"role":"ngo"}"#).unwrap();
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.role, UserRole::Ngo);
        assert_eq!(config.mrv_tolerance, DEFAULT_TOLERANCE);
        assert!(config.data_path.is_none());
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [(DATA_ENV, "/tmp/data.json"), (ROLE_ENV, "admin")]
            .into_iter()
            .collect();
        let mut config = AppConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.data_path, Some(PathBuf::from("/tmp/data.json")));
        assert_eq!(config.role, UserRole::Admin);
    }

    #[test]
    fn test_bad_role_override_is_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(|key| (key == ROLE_ENV).then(|| "pirate".to_string()));
        assert_eq!(config.role, UserRole::Buyer);
    }

    #[test]
    fn test_default_source_is_mock() {
        let source = AppConfig::default().open_source().unwrap();
        assert_eq!(source.projects().unwrap().len(), 3);
    }
}
