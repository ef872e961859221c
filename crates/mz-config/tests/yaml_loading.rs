//! Integration tests for YAML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed file and env var manipulation.

use std::path::{Path, PathBuf};

use figment::Jail;
use mz_config::{LogFormat, MzConfig};

#[test]
fn loads_logging_config_from_yaml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.yaml",
            r#"
logging:
  level: DEBUG
  format: compact
  file: logs/custom.log
"#,
        )?;

        let config = MzConfig::load(Path::new("config.yaml"), true)
            .map_err(|e| e.to_string())?;

        assert_eq!(config.logging.level, "DEBUG");
        assert_eq!(config.logging.format, LogFormat::Compact);
        assert_eq!(
            config.logging.file_path(),
            Some(PathBuf::from("logs/custom.log"))
        );
        Ok(())
    });
}

#[test]
fn loads_storage_and_llm_config_from_yaml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "mz.yaml",
            r#"
storage:
  memory_path: state/memory.json
llm:
  api_key: sk-ant-from-yaml
  model: claude-3-5-haiku-latest
  max_tokens: 256
"#,
        )?;

        let config =
            MzConfig::load(Path::new("mz.yaml"), true).map_err(|e| e.to_string())?;

        assert_eq!(
            config.storage.memory_path,
            PathBuf::from("state/memory.json")
        );
        assert!(config.llm.is_configured());
        assert_eq!(config.llm.model, "claude-3-5-haiku-latest");
        assert_eq!(config.llm.max_tokens, 256);
        assert_eq!(config.llm.base_url, "https://api.anthropic.com");
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn partial_yaml_keeps_defaults_for_other_sections() {
    Jail::expect_with(|jail| {
        jail.create_file("config.yaml", "logging:\n  level: WARNING\n")?;

        let config = MzConfig::load(Path::new("config.yaml"), true)
            .map_err(|e| e.to_string())?;

        assert_eq!(config.logging.level_directive().unwrap(), "warn");
        assert_eq!(config.logging.format, LogFormat::Full);
        assert_eq!(
            config.storage.memory_path,
            PathBuf::from("data/memory.json")
        );
        assert_eq!(config.llm.max_tokens, 1024);
        Ok(())
    });
}

#[test]
fn missing_default_file_falls_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let config = MzConfig::load(Path::new("config.yaml"), false)
            .map_err(|e| e.to_string())?;
        assert_eq!(config.logging.level, "INFO");
        Ok(())
    });
}

#[test]
fn missing_explicit_file_is_rejected() {
    Jail::expect_with(|_jail| {
        let result = MzConfig::load(Path::new("custom.yaml"), true);
        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn invalid_yaml_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("config.yaml", "logging: [unclosed\n")?;
        let result = MzConfig::load(Path::new("config.yaml"), true);
        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn shipped_sample_config_matches_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.yaml", include_str!("../../../config.yaml"))?;

        let loaded = MzConfig::load(Path::new("config.yaml"), true).map_err(|e| e.to_string())?;
        let defaults = MzConfig::default();

        assert_eq!(loaded.logging.level, defaults.logging.level);
        assert_eq!(loaded.logging.format, defaults.logging.format);
        assert_eq!(loaded.logging.file, defaults.logging.file);
        assert_eq!(loaded.storage.memory_path, defaults.storage.memory_path);
        assert_eq!(loaded.llm.model, defaults.llm.model);
        assert_eq!(loaded.llm.max_tokens, defaults.llm.max_tokens);
        Ok(())
    });
}
