//! Daemon configuration loaded from TOML.

use anyhow::Result;
use compact_str::CompactString;
use serde::Deserialize;
use std::path::Path;

/// Default system prompt for the Slack assistant.
pub const SYSTEM_PROMPT: &str = "You are a helpful, concise assistant integrated into Slack. \
     Keep your answers clear and to the point. \
     When formatting code, use Slack-compatible markdown (triple backticks).";

/// Scaffold configuration used when no config file is present.
///
/// Secrets come from the environment via `${VAR}` expansion.
pub const DEFAULT_CONFIG: &str = r#"bind_address = "0.0.0.0:3000"

[slack]
bot_token = "${SLACK_BOT_TOKEN}"

[llm]
api_key = "${ANTHROPIC_API_KEY}"
"#;

/// Top-level daemon configuration.
#[derive(Debug, Deserialize)]
pub struct DaemonConfig {
    /// Address for the Events API endpoint to listen on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Slack credentials.
    pub slack: SlackConfig,
    /// LLM provider settings.
    pub llm: LlmConfig,
    /// History store settings.
    #[serde(default)]
    pub history: HistoryConfig,
}

/// Slack credentials.
#[derive(Debug, Deserialize)]
pub struct SlackConfig {
    /// Bot OAuth token (supports `${ENV_VAR}` expansion).
    pub bot_token: String,
}

/// LLM provider settings.
#[derive(Debug, Deserialize)]
pub struct LlmConfig {
    /// API key (supports `${ENV_VAR}` expansion).
    pub api_key: String,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: CompactString,
    /// Token generation limit per completion.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// System prompt sent with every completion.
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

/// History store settings.
#[derive(Debug, Deserialize)]
pub struct HistoryConfig {
    /// Maximum turns retained per conversation.
    #[serde(default = "default_max_turns")]
    pub max_turns: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_turns: default_max_turns(),
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_model() -> CompactString {
    claude::DEFAULT_MODEL.into()
}

fn default_max_tokens() -> u32 {
    claude::DEFAULT_MAX_TOKENS
}

fn default_system_prompt() -> String {
    SYSTEM_PROMPT.to_string()
}

fn default_max_turns() -> usize {
    history::DEFAULT_MAX_TURNS
}

impl DaemonConfig {
    /// Parse a TOML string, expanding `${ENV_VAR}` references first.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let expanded = expand_env_vars(toml_str);
        let config: Self = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

/// Expand `${VAR}` patterns in a string with environment variable values.
///
/// Unknown variables are replaced with an empty string.
pub fn expand_env_vars(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && chars.peek() == Some(&'{') {
            chars.next(); // consume '{'
            let mut var_name = String::new();
            for c in chars.by_ref() {
                if c == '}' {
                    break;
                }
                var_name.push(c);
            }
            if let Ok(val) = std::env::var(&var_name) {
                result.push_str(&val);
            }
        } else {
            result.push(ch);
        }
    }

    result
}
