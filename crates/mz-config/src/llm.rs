//! Conversational model configuration.

use serde::{Deserialize, Serialize};

const DEFAULT_SYSTEM_PROMPT: &str = "You are MZ (Monozukuri), a personal AI assistant.

Your purpose is to:
- Help with coding and technical problems
- Assist with daily tasks and organization
- Learn and adapt to your user's needs
- Be conversational, helpful, and direct

Keep responses concise unless asked for detail.";

fn default_model() -> String {
    String::from("claude-sonnet-4-20250514")
}

const fn default_max_tokens() -> u32 {
    1024
}

fn default_base_url() -> String {
    String::from("https://api.anthropic.com")
}

fn default_system_prompt() -> String {
    String::from(DEFAULT_SYSTEM_PROMPT)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LlmConfig {
    /// Anthropic API key. Also read from `ANTHROPIC_API_KEY`.
    #[serde(default)]
    pub api_key: String,

    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Upper bound on reply length.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// API endpoint (override for proxies and tests).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Persona sent as the system prompt.
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            base_url: default_base_url(),
            system_prompt: default_system_prompt(),
        }
    }
}

impl LlmConfig {
    /// Check if an API key is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = LlmConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.model, "claude-sonnet-4-20250514");
        assert_eq!(config.max_tokens, 1024);
        assert!(config.system_prompt.starts_with("You are MZ"));
    }

    #[test]
    fn whitespace_key_is_not_configured() {
        let config = LlmConfig {
            api_key: "   ".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn configured_with_key() {
        let config = LlmConfig {
            api_key: "sk-ant-test".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }
}
