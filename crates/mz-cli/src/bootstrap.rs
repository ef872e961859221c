use anyhow::Context;

use mz_config::{ConfigError, MzConfig};

use crate::cli::Cli;

/// Load `.env` and the layered configuration for this invocation.
pub fn load_config(cli: &Cli) -> anyhow::Result<MzConfig> {
    let (path, required) = cli.config_source();
    MzConfig::load_with_dotenv(&path, required)
        .with_context(|| format!("failed to load configuration from {}", path.display()))
}

/// Fail startup when required settings are missing.
pub fn ensure_ready(config: &MzConfig) -> anyhow::Result<()> {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }

    match config.validate() {
        Ok(()) => Ok(()),
        Err(error @ ConfigError::NotConfigured { .. }) => Err(anyhow::Error::new(error)
            .context("ANTHROPIC_API_KEY is missing; add it to .env or set llm.api_key")),
        Err(error) => Err(anyhow::Error::new(error).context("invalid configuration")),
    }
}

/// Flag `MZ_LLM_*` variables that were ignored for lack of a double underscore.
fn collect_unconfigured_warnings<I>(config: &MzConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let single_underscore = env
        .into_iter()
        .any(|(key, _)| key.starts_with("MZ_LLM_") && !key.starts_with("MZ_LLM__"));

    if !config.llm.is_configured() && single_underscore {
        vec![String::from(
            "LLM config appears default while MZ_LLM_* env vars exist. Use double underscores (example: MZ_LLM__API_KEY).",
        )]
    } else {
        Vec::new()
    }
}
