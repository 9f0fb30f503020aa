/*!
 * Tests for application configuration
 */

use anyhow::Result;
use linguachat::app_config::{Config, LogLevel};
use tempfile::TempDir;

/// Test the default configuration values
#[test]
fn test_defaultConfig_shouldUseOpusMtModelPair() {
    let config = Config::default();

    assert_eq!(config.models.endpoint, "https://api-inference.huggingface.co");
    assert_eq!(config.models.en_zh_model, "Helsinki-NLP/opus-mt-en-zh");
    assert_eq!(config.models.zh_en_model, "Helsinki-NLP/opus-mt-zh-en");
    assert!(config.models.api_key.is_empty());
    assert_eq!(config.models.timeout_secs, 30);
    assert_eq!(config.models.retry_count, 3);
    assert_eq!(config.log_level, LogLevel::Info);

    assert!(config.validate().is_ok());
}

/// Test that missing fields fall back to defaults when parsing
#[test]
fn test_parse_withPartialJson_shouldFillDefaults() -> Result<()> {
    let config: Config = serde_json::from_str("{}")?;
    assert_eq!(config.models.en_zh_model, "Helsinki-NLP/opus-mt-en-zh");
    assert_eq!(config.log_level, LogLevel::Info);

    let config: Config = serde_json::from_str(
        r#"{"models": {"api_key": "secret"}, "log_level": "debug"}"#,
    )?;
    assert_eq!(config.models.api_key, "secret");
    assert_eq!(config.models.zh_en_model, "Helsinki-NLP/opus-mt-zh-en");
    assert_eq!(config.log_level, LogLevel::Debug);

    Ok(())
}

/// Test validation failures
#[test]
fn test_validate_withInvalidValues_shouldFail() {
    let mut config = Config::default();
    config.models.endpoint = "not a url".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.models.en_zh_model = "  ".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.models.zh_en_model = String::new();
    assert!(config.validate().is_err());
}

/// Test the save/load round trip
#[test]
fn test_saveAndLoad_shouldRoundTrip() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("conf.json");

    let mut config = Config::default();
    config.models.api_key = "token".to_string();
    config.log_level = LogLevel::Trace;
    config.save_to(&path)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded.models.api_key, "token");
    assert_eq!(loaded.models.en_zh_model, config.models.en_zh_model);
    assert_eq!(loaded.log_level, LogLevel::Trace);

    Ok(())
}

/// Test loading a missing file
#[test]
fn test_from_file_withMissingFile_shouldError() {
    assert!(Config::from_file("/nonexistent/conf.json").is_err());
}
