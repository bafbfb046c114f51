//! Configuration module for tagcalc
//!
//! Supplies the suggestion catalog and front-end preferences. Configuration
//! is stored as TOML in the user's config directory
//! (`~/.config/tagcalc/config.toml` on Linux):
//!
//! ```toml
//! quiet = false
//! message_ttl_secs = 4
//!
//! [[catalog]]
//! key = "Revenue"
//! value = "125000"
//!
//! [[catalog]]
//! key = "SUM"
//! value = "+"
//! ```

use crate::catalog::{Catalog, CatalogError};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One `[[catalog]]` entry as written in the config file
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Display label
    pub key: String,
    /// Decimal literal or operand symbol
    pub value: String,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TagcalcConfig {
    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Where the terminal UI writes its log (defaults to the data directory)
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// How long status-line messages stay visible
    #[serde(default = "default_message_ttl_secs")]
    pub message_ttl_secs: u64,

    /// Suggestions offered by the editor, in display order
    #[serde(default = "default_catalog")]
    pub catalog: Vec<CatalogEntry>,
}

fn default_catalog() -> Vec<CatalogEntry> {
    Catalog::reference()
        .iter()
        .map(|tag| CatalogEntry {
            key: tag.key().to_string(),
            value: tag.value().to_string(),
        })
        .collect()
}

const fn default_message_ttl_secs() -> u64 {
    4
}

impl Default for TagcalcConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            log_file: None,
            message_ttl_secs: default_message_ttl_secs(),
            catalog: default_catalog(),
        }
    }
}

impl TagcalcConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("tagcalc").join("config.toml"))
    }

    /// Default location of the terminal UI log file
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join("tagcalc").join("tagcalc.log"))
    }

    /// Log file for the terminal UI: the configured one, else the default
    #[must_use]
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(Self::default_log_path)
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file does not exist or cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = self.to_toml()?;

        fs::write(path, toml_string).map_err(|e| {
            ConfigError::Message(format!("Failed to write config file: {e}"))
        })?;

        Ok(())
    }

    /// Render the configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| {
            ConfigError::Message(format!("Failed to serialize config: {e}"))
        })
    }

    /// Build the validated suggestion catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if any entry violates the tag invariant or
    /// repeats a key.
    pub fn build_catalog(&self) -> Result<Catalog, CatalogError> {
        Catalog::from_entries(
            self.catalog
                .iter()
                .map(|entry| (entry.key.as_str(), entry.value.as_str())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = TagcalcConfig::default();
        assert_eq!(config.catalog.len(), 11);
        assert!(!config.quiet);
        assert!(config.log_file.is_none());
        assert_eq!(config.build_catalog().unwrap(), Catalog::reference());
    }

    #[test]
    fn test_load_custom_catalog() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
quiet = true

[[catalog]]
key = "Revenue"
value = "125000"

[[catalog]]
key = "MINUS"
value = "-"
"#,
        );

        let config = TagcalcConfig::load_from(&path).unwrap();
        assert!(config.quiet);
        assert_eq!(config.message_ttl_secs, 4);

        let catalog = config.build_catalog().unwrap();
        let keys: Vec<&str> = catalog.iter().map(|t| t.key()).collect();
        assert_eq!(keys, ["Revenue", "MINUS"]);
    }

    #[test]
    fn test_missing_catalog_uses_reference() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "quiet = false\n");

        let config = TagcalcConfig::load_from(&path).unwrap();
        assert_eq!(config.build_catalog().unwrap(), Catalog::reference());
    }

    #[test]
    fn test_invalid_catalog_value() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[[catalog]]
key = "Broken"
value = "ten"
"#,
        );

        let config = TagcalcConfig::load_from(&path).unwrap();
        assert!(matches!(
            config.build_catalog(),
            Err(CatalogError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let result = TagcalcConfig::load_from(&dir.path().join("absent.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = TagcalcConfig::default();
        config.quiet = true;
        config.log_file = Some(PathBuf::from("/tmp/tagcalc-test.log"));
        config.save_to(&path).unwrap();

        let loaded = TagcalcConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_log_path_prefers_configured_file() {
        let config = TagcalcConfig {
            log_file: Some(PathBuf::from("/var/log/tagcalc.log")),
            ..TagcalcConfig::default()
        };
        assert_eq!(
            config.log_path(),
            Some(PathBuf::from("/var/log/tagcalc.log"))
        );
    }
}
