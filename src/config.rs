use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

use crate::query::DEFAULT_PAGE_SIZE;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub provider: Option<ProviderConfig>,
    #[serde(default = "default_list_currency")]
    pub list_currency: String,
    #[serde(default = "default_detail_currency")]
    pub detail_currency: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_list_currency() -> String {
    "inr".to_string()
}

fn default_detail_currency() -> String {
    "ngn".to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            provider: None,
            list_currency: default_list_currency(),
            detail_currency: default_detail_currency(),
            page_size: default_page_size(),
        }
    }
}

impl AppConfig {
    /// Loads the default config file, falling back to built-in defaults
    /// when no file exists. coinlens works without any configuration.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config file found, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "coinlens", "coinlens")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
provider:
  base_url: "http://example.com/coingecko"
list_currency: "usd"
detail_currency: "eur"
page_size: 25
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(
            config.provider.unwrap().base_url,
            "http://example.com/coingecko"
        );
        assert_eq!(config.list_currency, "usd");
        assert_eq!(config.detail_currency, "eur");
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn test_config_defaults_for_missing_fields() {
        let config: AppConfig = serde_yaml::from_str("{}").expect("Failed to deserialize");
        assert!(config.provider.is_none());
        assert_eq!(config.list_currency, "inr");
        assert_eq!(config.detail_currency, "ngn");
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let result = AppConfig::load_from_path("/nonexistent/config.yaml");
        assert!(result.is_err());
    }
}
