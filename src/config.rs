//! Configuration management for the FlexonDB client
//!
//! The only setting is the private document directory, read from
//! `config.toml` with `FLEXONDB_*` environment overrides.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

use crate::error::InvalidPathError;
use crate::platform::{DocumentDirectory, StorageRoot};

/// Client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Absolute path of the private document directory
    /// Environment: FLEXONDB_DOCUMENT_ROOT
    pub document_root: String,
}

impl ClientConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."))
    }

    /// Load configuration relative to `base_dir`.
    ///
    /// Both config files are optional; `FLEXONDB_DOCUMENT_ROOT` alone is
    /// enough. The packaged file wins over the working-directory one and the
    /// environment wins over both.
    pub fn load_from(base_dir: &Path) -> Result<Self, ConfigError> {
        let config_paths = ["config", "flexondb/config"];

        let mut builder = Config::builder();
        for config_path in config_paths {
            let name = base_dir.join(config_path);
            builder = builder.add_source(File::with_name(&name.to_string_lossy()).required(false));
        }

        let settings = builder
            .add_source(Environment::with_prefix("FLEXONDB"))
            .build()?;
        Self::from_settings(settings)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;
        Self::from_settings(settings)
    }

    fn from_settings(settings: Config) -> Result<Self, ConfigError> {
        let config: ClientConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.document_root.is_empty() {
            return Err(ConfigError::Message(
                "document_root cannot be empty".into(),
            ));
        }

        if !Path::new(&self.document_root).is_absolute() {
            return Err(ConfigError::Message(format!(
                "document_root must be absolute, got {}",
                self.document_root
            )));
        }

        Ok(())
    }

    pub fn storage_root(&self) -> Result<StorageRoot, InvalidPathError> {
        StorageRoot::from_platform(self)
    }
}

impl DocumentDirectory for ClientConfig {
    fn document_directory_path(&self) -> &str {
        &self.document_root
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn parses_document_root() {
        let config = ClientConfig::from_toml_str("document_root = \"/app/docs\"").unwrap();
        assert_eq!(config.document_root, "/app/docs");
        assert_eq!(config.storage_root().unwrap().as_str(), "/app/docs");
    }

    #[test]
    fn rejects_relative_root() {
        let err = ClientConfig::from_toml_str("document_root = \"docs\"").unwrap_err();
        assert!(err.to_string().contains("must be absolute"));
    }

    #[test]
    fn rejects_empty_root() {
        assert!(ClientConfig::from_toml_str("document_root = \"\"").is_err());
    }

    #[test]
    fn requires_document_root() {
        assert!(ClientConfig::from_toml_str("").is_err());
    }
}
