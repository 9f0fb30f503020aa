use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use url::Url;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Translation model configuration
    #[serde(default)]
    pub models: ModelsConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Configuration for the pretrained translation model pair
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ModelsConfig {
    /// Base URL of the inference API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model id for the English -> Chinese direction
    #[serde(default = "default_en_zh_model")]
    pub en_zh_model: String,

    /// Model id for the Chinese -> English direction
    #[serde(default = "default_zh_en_model")]
    pub zh_en_model: String,

    /// API key, may be empty for anonymous access
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of retry attempts per request
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,

    /// Base backoff time in milliseconds, doubled on each retry
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            en_zh_model: default_en_zh_model(),
            zh_en_model: default_zh_en_model(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            retry_count: default_retry_count(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_endpoint() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_en_zh_model() -> String {
    "Helsinki-NLP/opus-mt-en-zh".to_string()
}

fn default_zh_en_model() -> String {
    "Helsinki-NLP/opus-mt-zh-en".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_retry_count() -> u32 {
    3 // Default to 3 retries
}

fn default_retry_backoff_ms() -> u64 {
    1000 // 1 second base backoff time, doubled on each retry
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.models.endpoint)
            .map_err(|e| anyhow!("Invalid inference endpoint '{}': {}", self.models.endpoint, e))?;

        if self.models.en_zh_model.trim().is_empty() {
            return Err(anyhow!("en_zh_model must not be empty"));
        }

        if self.models.zh_en_model.trim().is_empty() {
            return Err(anyhow!("zh_en_model must not be empty"));
        }

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .context(format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .context(format!("Failed to write config to file: {}", path.display()))?;

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            models: ModelsConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
