pub mod model;

use anyhow::{Context, Result};
use std::path::PathBuf;
use thiserror::Error;

pub use model::AppConfig;

/// Settings that parse fine but cannot be used.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("display.{field} must be a positive number of pixels, got {value}")]
    NonPositiveMetric { field: &'static str, value: f32 },
    #[error("display.frame_interval_ms must be at least 1")]
    ZeroFrameInterval,
}

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("swifty-carousel")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?;
    validate(&config).with_context(|| format!("Invalid config in {}", path.display()))?;
    Ok(config)
}

pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let display = &config.display;
    for (field, value) in [("column_px", display.column_px), ("row_px", display.row_px)] {
        if value.is_nan() || value <= 0.0 {
            return Err(ConfigError::NonPositiveMetric { field, value });
        }
    }
    if display.frame_interval_ms == 0 {
        return Err(ConfigError::ZeroFrameInterval);
    }
    Ok(())
}
