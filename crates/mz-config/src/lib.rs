//! # mz-config
//!
//! Layered configuration loading for MZ using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MZ_*` prefix, `__` as separator)
//! 2. `ANTHROPIC_API_KEY` (mapped to `llm.api_key`)
//! 3. The YAML file passed with `--config` (default `config.yaml`)
//! 4. User-level `~/.config/mz/config.yaml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MZ_LOGGING__LEVEL` -> `logging.level`,
//! `MZ_STORAGE__MEMORY_PATH` -> `storage.memory_path`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use mz_config::MzConfig;
//!
//! let config = MzConfig::load_with_dotenv(Path::new("config.yaml"), false).expect("config");
//! config.validate().expect("usable config");
//! println!("memory lives at {}", config.storage.memory_path.display());
//! ```

mod error;
mod llm;
mod logging;
mod storage;

pub use error::ConfigError;
pub use llm::LlmConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default project config file name.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MzConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

impl MzConfig {
    /// Load configuration from all sources (YAML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`MzConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileNotFound`] when `required` is set and
    /// `config_path` does not exist, or [`ConfigError::Figment`] when a source
    /// fails to parse.
    pub fn load(config_path: &Path, required: bool) -> Result<Self, ConfigError> {
        Self::figment(config_path, required)?
            .extract()
            .map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` next to the config file if there is one, otherwise lets
    /// `dotenvy` search the current directory and its parents.
    ///
    /// # Errors
    ///
    /// Same as [`MzConfig::load`].
    pub fn load_with_dotenv(config_path: &Path, required: bool) -> Result<Self, ConfigError> {
        Self::load_dotenv_near(config_path);
        Self::load(config_path, required)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileNotFound`] when `required` is set and
    /// `config_path` does not exist.
    pub fn figment(config_path: &Path, required: bool) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Yaml::file(global_path));
        }

        // Layer 2: Project config
        if config_path.exists() {
            figment = figment.merge(Yaml::file(config_path));
        } else if required {
            return Err(ConfigError::FileNotFound {
                path: config_path.to_path_buf(),
            });
        }

        // Layer 3: Conventional API key variable
        figment = figment.merge(
            Env::raw()
                .only(&["ANTHROPIC_API_KEY"])
                .map(|_| "llm.api_key".into()),
        );

        // Layer 4: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("MZ_").split("__"));

        Ok(figment)
    }

    /// Check the startup requirements: a usable log level and an API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a bad log level and
    /// [`ConfigError::NotConfigured`] when no API key is available.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logging.level_directive()?;
        if !self.llm.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: String::from("llm"),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mz").join(DEFAULT_CONFIG_FILE))
    }

    /// Load `.env` from the config file's directory, falling back to the
    /// standard `dotenvy` search. Silently does nothing if no `.env` is found.
    fn load_dotenv_near(config_path: &Path) {
        let sibling = config_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(|dir| dir.join(".env"));

        if let Some(env_path) = sibling
            && env_path.exists()
        {
            let _ = dotenvy::from_path(&env_path);
            return;
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = MzConfig::default();
        assert!(!config.llm.is_configured());
        assert_eq!(config.logging.level, "INFO");
        assert_eq!(
            config.storage.memory_path,
            PathBuf::from("data/memory.json")
        );
    }

    #[test]
    fn default_config_fails_validation_without_api_key() {
        let err = MzConfig::default().validate().expect_err("no api key");
        assert!(matches!(err, ConfigError::NotConfigured { ref section } if section == "llm"));
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let err = MzConfig::figment(Path::new("definitely/not/here.yaml"), true)
            .expect_err("required file missing");
        assert!(err.to_string().contains("not found"));
    }
}
