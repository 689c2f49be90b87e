/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_LEVEL: &str = "info";

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&config_str)
}

/// Loads `path`, or falls back to the defaults when the file does not exist.
pub fn load_config_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(Config::default())
    }
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(config_str)?)
}

/// Log filter to start the logger with, also when loading the configuration failed.
pub fn log_level(loaded: &Result<Config, ConfigError>) -> &str {
    match loaded {
        Ok(config) => config.logging.level.as_str(),
        Err(_) => DEFAULT_LOG_LEVEL,
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
