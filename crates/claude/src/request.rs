//! The request body for the Anthropic Messages API.

use compact_str::CompactString;
use llm::{Message, Role};
use serde::Serialize;

/// Default model for completions.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5";

/// Default maximum number of tokens to generate.
pub const DEFAULT_MAX_TOKENS: u32 = 2048;

/// Chat configuration for the Messages API.
#[derive(Debug, Clone)]
pub struct Request {
    /// The model we are using.
    pub model: CompactString,
    /// The maximum number of tokens to generate.
    pub max_tokens: u32,
    /// System prompt, sent as the top-level `system` field.
    pub system: Option<String>,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            system: None,
        }
    }
}

impl Request {
    /// Create a request configuration for the given model.
    pub fn new(model: impl Into<CompactString>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }

    /// Set the system prompt.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set the token generation limit.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Construct the wire body for an ordered message history.
    ///
    /// The Messages API takes no system role inside `messages`;
    /// system-role entries are lifted into the top-level `system`
    /// field, after any configured prompt.
    pub fn body(&self, messages: &[Message]) -> Body {
        let mut system: Vec<&str> = Vec::new();
        if let Some(prompt) = &self.system {
            system.push(prompt);
        }

        let mut turns = Vec::with_capacity(messages.len());
        for message in messages {
            match message.role {
                Role::System => system.push(&message.content),
                _ => turns.push(message.clone()),
            }
        }

        Body {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            system: if system.is_empty() {
                None
            } else {
                Some(system.join("\n\n"))
            },
            messages: turns,
        }
    }
}

/// The serialized Messages API request body.
#[derive(Debug, Clone, Serialize)]
pub struct Body {
    /// The model we are using.
    pub model: CompactString,
    /// The maximum number of tokens to generate.
    pub max_tokens: u32,
    /// The system prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// The conversation turns, oldest first.
    pub messages: Vec<Message>,
}
