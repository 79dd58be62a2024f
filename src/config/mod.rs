//! Configuration module

use crate::weather::TemperatureUnit;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use url::Url;

/// Default weather API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Default seconds between fetches in watch mode
pub const DEFAULT_REFRESH_INTERVAL: u64 = 15;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Weather API base URL
    #[serde(rename = "api-base-url")]
    pub api_base_url: String,

    /// API key appended to every request
    #[serde(rename = "api-key")]
    pub api_key: Option<String>,

    /// Temperature unit used for display
    pub units: TemperatureUnit,

    /// Seconds between fetches in watch mode
    #[serde(rename = "refresh-interval")]
    pub refresh_interval: u64,

    /// Log level
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from file (synchronous)
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file (async)
    pub async fn load_async<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.api_base_url)
            .map_err(|e| Error::config(format!("api-base-url: {e}")))?;

        if self.refresh_interval == 0 {
            return Err(Error::config("refresh-interval must be at least 1 second"));
        }

        Ok(())
    }

    /// Save configuration to file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content).await?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: None,
            units: TemperatureUnit::default(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            log_level: Some("info".to_string()),
        }
    }
}
