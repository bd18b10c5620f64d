//! Configuration management module.
//!
//! Supports loading configuration from:
//! - A `.env` file in the working directory
//! - TOML files (config/default.toml, config/{profile}.toml)
//! - Environment variables with `CODEFACTORY__<SECTION>__<KEY>` pattern

mod generator;

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use generator::{GeneratorSettings, Preset};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Code generation settings.
    pub generator: GeneratorSettings,

    /// Observability configuration.
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{CODEFACTORY_PROFILE}.toml` (if `CODEFACTORY_PROFILE` is set)
    /// 3. Environment variables with `CODEFACTORY__` prefix
    ///
    /// Variables from a `.env` file are exported before any source is read.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let profile =
            std::env::var("CODEFACTORY_PROFILE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{profile}")).required(false))
            .add_source(environment())
            .build()?;

        Self::from_config(config)
    }

    /// Load configuration from a single file, overridden by the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the result is invalid.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::from(path))
            .add_source(environment())
            .build()?;

        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self, ConfigError> {
        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.generator.count == 0 {
            return Err(ConfigError::Message(
                "generator.count cannot be 0".to_string(),
            ));
        }

        if self.generator.max_codes == 0 {
            return Err(ConfigError::Message(
                "generator.max_codes cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// `CODEFACTORY__GENERATOR__FORMAT=#xxxx` -> `generator.format = "#xxxx"`
fn environment() -> Environment {
    Environment::with_prefix("CODEFACTORY")
        .separator("__")
        .try_parsing(true)
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.generator.format, "#aaaa");
        assert_eq!(config.generator.preset, Preset::Standard);
        assert_eq!(config.generator.count, 10);
        assert_eq!(config.generator.max_codes, 100_000_000);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_validate_rejects_zero_count() {
        let mut config = AppConfig::default();
        config.generator.count = 0;
        assert!(config.validate().is_err());

        config.generator.count = 1;
        config.generator.max_codes = 0;
        assert!(config.validate().is_err());
    }
}
