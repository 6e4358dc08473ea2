//! Configuration management for artstat.
//!
//! Configuration is stored in TOML format in a platform-appropriate location.
//! A missing file is not an error: every setting has a default.

use crate::error::{ArtstatError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Main configuration structure for artstat.
///
/// ## Example Configuration File (artstat.toml)
///
/// ```toml
/// [general]
/// log_level = "warn"
///
/// [records]
/// dir = "public_art"
/// pattern = "*.md"
/// description_max_chars = 300
///
/// [query]
/// default_list_limit = 5
/// default_neighborhood_limit = 10
/// fuzzy_preview = 5
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Where and how records are loaded
    pub records: RecordsConfig,

    /// Query defaults
    pub query: QueryConfig,
}

/// General configuration options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            log_level: "warn".to_string(),
        }
    }
}

/// Record loading configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordsConfig {
    /// Directory holding the record files (not searched recursively)
    pub dir: PathBuf,

    /// File-name pattern selecting record files
    pub pattern: String,

    /// Descriptions longer than this many characters are truncated
    pub description_max_chars: usize,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        RecordsConfig {
            dir: PathBuf::from("public_art"),
            pattern: "*.md".to_string(),
            description_max_chars: 300,
        }
    }
}

/// Query defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Default limit for `list_active`
    pub default_list_limit: usize,

    /// Default limit for `list_by_neighborhood`
    pub default_neighborhood_limit: usize,

    /// Number of fuzzy matches shown by `status`
    pub fuzzy_preview: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        QueryConfig {
            default_list_limit: 5,
            default_neighborhood_limit: 10,
            fuzzy_preview: 5,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default config if no config file exists.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Config::default());
        }

        info!(path = %path.display(), "Loading configuration");
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents).map_err(|e| ArtstatError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        info!(path = %path.display(), "Saving configuration");
        let contents = toml::to_string_pretty(self).map_err(|e| ArtstatError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(path, contents)?;
        Ok(())
    }

    /// Check settings that serde cannot.
    pub fn validate(&self) -> Result<()> {
        glob::Pattern::new(&self.records.pattern).map_err(|e| ArtstatError::InvalidPattern {
            pattern: self.records.pattern.clone(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "artstat").ok_or_else(|| ArtstatError::ConfigError {
            reason: "Could not determine config directory".to_string(),
        })?;

        Ok(dirs.config_dir().join("artstat.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.records.pattern, "*.md");
        assert_eq!(config.records.description_max_chars, 300);
        assert_eq!(config.query.default_list_limit, 5);
        assert_eq!(config.query.default_neighborhood_limit, 10);
        assert_eq!(config.query.fuzzy_preview, 5);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let mut config = Config::default();
        config.records.dir = PathBuf::from("/srv/art");
        config.query.default_list_limit = 20;

        config.save_to(&config_path).unwrap();
        let loaded = Config::load_from(&config_path).unwrap();

        assert_eq!(loaded.records.dir, PathBuf::from("/srv/art"));
        assert_eq!(loaded.query.default_list_limit, 20);
    }

    #[test]
    fn test_load_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.query.default_list_limit, 5);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("partial.toml");
        fs::write(&config_path, "[query]\nfuzzy_preview = 3\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.query.fuzzy_preview, 3);
        assert_eq!(config.query.default_list_limit, 5);
        assert_eq!(config.records.pattern, "*.md");
    }

    #[test]
    fn test_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.toml");
        fs::write(&config_path, "[query\n").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, ArtstatError::ConfigError { .. }));
    }

    #[test]
    fn test_invalid_pattern() {
        let mut config = Config::default();
        config.records.pattern = "[*.md".to_string();
        assert!(matches!(
            config.validate(),
            Err(ArtstatError::InvalidPattern { .. })
        ));
    }
}
