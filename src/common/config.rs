//! # Configuration Utilities
//!
//! TOML configuration for the `stego` binary. Every section is optional:
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [output]
//! allow_lossy = false
//! ```

use anyhow::{anyhow, Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::str::FromStr;

/// Load a TOML configuration file and deserialize it into the specified type.
///
/// # Arguments
/// - `path`: Path to the TOML configuration file
///
/// # Returns
/// - `Ok(T)`: Successfully loaded and parsed configuration
/// - `Err`: File I/O or parsing error
///
/// # Example
/// ```ignore
/// let config: StegoConfig = load_config("config/stego.toml")?;
/// ```
pub fn load_config<T>(path: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path))?;
    let config: T =
        toml::from_str(&content).with_context(|| format!("failed to parse config file {}", path))?;
    Ok(config)
}

/// Top-level configuration of the `stego` binary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StegoConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level.
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.level)
            .map_err(|_| anyhow!("invalid log level '{}'", self.level))
    }
}

/// Settings for writing encoded images.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Allow saving to lossy formats such as JPEG (the message will not survive)
    pub allow_lossy: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: StegoConfig = toml::from_str("").unwrap();
        assert_eq!(config, StegoConfig::default());
        assert_eq!(config.logging.level_filter().unwrap(), LevelFilter::Info);
        assert!(!config.output.allow_lossy);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"\n\n[output]\nallow_lossy = true").unwrap();

        let config: StegoConfig = load_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.logging.level_filter().unwrap(), LevelFilter::Debug);
        assert!(config.output.allow_lossy);
    }

    #[test]
    fn test_invalid_level_rejected() {
        let config: StegoConfig = toml::from_str("[logging]\nlevel = \"loud\"").unwrap();
        assert!(config.logging.level_filter().is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(load_config::<StegoConfig>("/nonexistent/stego.toml").is_err());
    }
}
