// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for SongQR.
//!
//! Settings are read from a YAML file where every field is optional.
//! The serving origin can be overridden from the environment.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

/// Environment variable overriding [`AppConfig::origin`]
pub const ORIGIN_ENV: &str = "SONGQR_ORIGIN";
/// Environment variable holding a log filter directive
pub const LOG_ENV: &str = "SONGQR_LOG";

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Scheme, host and port the song pages are served from
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
    /// Log settings
    #[serde(default)]
    pub log: LogConfig,
}

fn default_origin() -> String {
    "http://localhost:8080".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            export: ExportConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Replace the origin when an override is present
    pub fn override_origin(&mut self, origin: Option<String>) {
        if let Some(origin) = origin {
            self.origin = origin;
        }
    }

    /// Apply [`ORIGIN_ENV`] if it is set
    pub fn apply_env(&mut self) {
        self.override_origin(std::env::var(ORIGIN_ENV).ok());
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.origin.is_empty() {
            bail!("origin must not be empty");
        }
        if self.export.directory.as_os_str().is_empty() {
            bail!("export.directory must not be empty");
        }
        self.log.level_filter()?;
        Ok(())
    }
}

/// Where exported QR codes are written
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportConfig {
    /// Output directory
    #[serde(default = "default_export_dir")]
    pub directory: PathBuf,
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_dir(),
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// Level name: "error", "warn", "info", "debug", "trace" or "off"
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file (the terminal is taken by the UI)
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_file() -> PathBuf {
    PathBuf::from("songqr.log")
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

impl LogConfig {
    /// Parsed log level
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.level)
            .with_context(|| format!("Invalid log level: {:?}", self.level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_config() {
        let yaml = r#"
origin: "https://songs.example.com"
export:
  directory: "qr-codes"
log:
  level: debug
  file: "/tmp/songqr.log"
"#;

        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.origin, "https://songs.example.com");
        assert_eq!(config.export.directory, PathBuf::from("qr-codes"));
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.file, PathBuf::from("/tmp/songqr.log"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_values() {
        let config = AppConfig::from_yaml("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.origin, "http://localhost:8080");
        assert_eq!(config.export.directory, PathBuf::from("."));
        assert_eq!(config.log.level_filter().unwrap(), LevelFilter::INFO);
    }

    #[test]
    fn test_override_origin() {
        let mut config = AppConfig::default();
        config.override_origin(None);
        assert_eq!(config.origin, "http://localhost:8080");

        config.override_origin(Some("https://example.com".to_string()));
        assert_eq!(config.origin, "https://example.com");
    }

    #[test]
    fn test_validate() {
        let mut config = AppConfig::default();
        config.origin.clear();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.log.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("songqr.yaml");

        let mut config = AppConfig::default();
        config.origin = "https://qr.example.org".to_string();
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = AppConfig::load(dir.path().join("nope.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
