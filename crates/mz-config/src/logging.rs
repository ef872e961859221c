//! Logging sink configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_level() -> String {
    String::from("INFO")
}

fn default_file() -> String {
    String::from("logs/mz.log")
}

/// Line layout for log output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Minimum level (`TRACE`, `DEBUG`, `INFO`, `WARN`, `ERROR`), case-insensitive.
    #[serde(default = "default_level")]
    pub level: String,

    /// Output layout.
    #[serde(default)]
    pub format: LogFormat,

    /// Log file path. Empty disables the file sink.
    #[serde(default = "default_file")]
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
            file: default_file(),
        }
    }
}

impl LoggingConfig {
    /// Normalize `level` into a lowercase filter directive.
    ///
    /// Accepts the aliases `WARNING` and `CRITICAL` found in older
    /// config files.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for unknown level names.
    pub fn level_directive(&self) -> Result<&'static str, ConfigError> {
        match self.level.trim().to_ascii_uppercase().as_str() {
            "TRACE" => Ok("trace"),
            "DEBUG" => Ok("debug"),
            "INFO" => Ok("info"),
            "WARN" | "WARNING" => Ok("warn"),
            "ERROR" | "CRITICAL" => Ok("error"),
            _ => Err(ConfigError::InvalidValue {
                field: String::from("logging.level"),
                reason: format!(
                    "unknown level '{}' (expected TRACE, DEBUG, INFO, WARN or ERROR)",
                    self.level
                ),
            }),
        }
    }

    /// Log file destination, if file logging is enabled.
    #[must_use]
    pub fn file_path(&self) -> Option<PathBuf> {
        let trimmed = self.file.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}
