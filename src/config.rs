// Thu Aug 27 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const ADDRESS_PLACEHOLDER: &str = "{address}";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no 'apis' endpoints configured - provide at least one URL template")]
    NoEndpoints,
    #[error("endpoint template missing the {{address}} placeholder: {0}")]
    MissingPlaceholder(String),
    #[error("max_retries must be greater than 0")]
    ZeroRetries,
    #[error("summary_interval must be greater than 0")]
    ZeroSummaryInterval,
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ordered balance-lookup URL templates, each containing
    /// `{address}`.
    pub apis: Vec<String>,
    #[serde(default = "defaults::max_retries")]
    pub max_retries: u32,
    #[serde(default = "defaults::request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "defaults::cooldown_secs")]
    pub cooldown_secs: u64,
    #[serde(default = "defaults::summary_interval")]
    pub summary_interval: u64,
    #[serde(default = "defaults::found_keys_dir")]
    pub found_keys_dir: PathBuf,
}

mod defaults {
    use std::path::PathBuf;

    pub fn max_retries() -> u32 {
        3
    }

    pub fn request_timeout_secs() -> u64 {
        10
    }

    pub fn cooldown_secs() -> u64 {
        60
    }

    pub fn summary_interval() -> u64 {
        100
    }

    pub fn found_keys_dir() -> PathBuf {
        PathBuf::from("found_keys")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            apis: Vec::new(),
            max_retries: defaults::max_retries(),
            request_timeout_secs: defaults::request_timeout_secs(),
            cooldown_secs: defaults::cooldown_secs(),
            summary_interval: defaults::summary_interval(),
            found_keys_dir: defaults::found_keys_dir(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_apis(mut self, apis: Vec<String>) -> Self {
        self.apis = apis;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_found_keys_dir(mut self, dir: PathBuf) -> Self {
        self.found_keys_dir = dir;
        self
    }

    /// Loads and validates `config.json`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.apis.is_empty() {
            return Err(ConfigError::NoEndpoints);
        }
        for template in &self.apis {
            if !template.contains(ADDRESS_PLACEHOLDER) {
                return Err(ConfigError::MissingPlaceholder(template.clone()));
            }
        }
        if self.max_retries == 0 {
            return Err(ConfigError::ZeroRetries);
        }
        if self.summary_interval == 0 {
            return Err(ConfigError::ZeroSummaryInterval);
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }
}
