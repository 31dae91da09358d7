//! The response body for the Anthropic Messages API.

use compact_str::CompactString;
use serde::Deserialize;

/// A Messages API response.
#[derive(Debug, Deserialize)]
pub struct Response {
    /// Message id.
    #[serde(default)]
    pub id: CompactString,
    /// Model that produced the response.
    #[serde(default)]
    pub model: CompactString,
    /// Content blocks, in order.
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    /// Why generation stopped.
    #[serde(default)]
    pub stop_reason: Option<CompactString>,
    /// Token accounting.
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl Response {
    /// Concatenate all text blocks into a single string.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text.as_str()),
                ContentBlock::Unknown => None,
            })
            .collect()
    }
}

/// One content block in a response.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum ContentBlock {
    /// A text block.
    #[serde(rename = "text")]
    Text {
        /// The text content.
        text: String,
    },
    /// Catch-all for block types we do not consume.
    #[serde(other)]
    Unknown,
}

/// Token usage for a response.
#[derive(Debug, Deserialize)]
pub struct Usage {
    /// Tokens in the prompt.
    #[serde(default)]
    pub input_tokens: u32,
    /// Tokens generated.
    #[serde(default)]
    pub output_tokens: u32,
}

/// Anthropic error envelope: `{"type":"error","error":{...}}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(rename = "type")]
    kind: CompactString,
    message: String,
}

/// Extract a readable message from an error response body, if it
/// matches the Anthropic error envelope.
pub fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    Some(format!("{}: {}", parsed.error.kind, parsed.error.message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_joins_blocks_in_order() {
        let json = serde_json::json!({
            "id": "msg_01",
            "model": "claude-sonnet-4-5",
            "content": [
                { "type": "text", "text": "Hello" },
                { "type": "tool_use", "id": "tu_1", "name": "t", "input": {} },
                { "type": "text", "text": ", world" }
            ],
            "stop_reason": "end_turn",
            "usage": { "input_tokens": 12, "output_tokens": 5 }
        });
        let response: Response = serde_json::from_value(json).unwrap();
        assert_eq!(response.text(), "Hello, world");
        assert_eq!(response.stop_reason.as_deref(), Some("end_turn"));
        assert_eq!(response.usage.unwrap().output_tokens, 5);
    }

    #[test]
    fn empty_content_yields_empty_text() {
        let response: Response = serde_json::from_str(r#"{"content":[]}"#).unwrap();
        assert!(response.text().is_empty());
    }

    #[test]
    fn error_envelope_parses() {
        let body = r#"{"type":"error","error":{"type":"rate_limit_error","message":"slow down"}}"#;
        assert_eq!(
            error_message(body).unwrap(),
            "rate_limit_error: slow down"
        );
    }

    #[test]
    fn error_message_rejects_non_envelope() {
        assert!(error_message("upstream exploded").is_none());
        assert!(error_message(r#"{"ok":false}"#).is_none());
    }
}
