//! Anthropic Messages API provider.
//!
//! Implements the [`LLM`] trait over the non-streaming Messages
//! endpoint. The full response is aggregated into a single string;
//! callers that want incremental delivery should post a placeholder
//! and edit it, which is what the Slack relay does.

pub use request::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, Request};
pub use response::Response;

mod request;
mod response;

use anyhow::Result;
use llm::{
    Client, LLM, Message, UpstreamError,
    reqwest::header::{self, HeaderMap, HeaderName},
};

const ENDPOINT: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// The Anthropic LLM provider.
#[derive(Clone)]
pub struct Claude {
    client: Client,
    headers: HeaderMap,
}

impl Claude {
    /// Create a new provider with the given API key.
    pub fn new(client: Client, key: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "application/json".parse()?);
        headers.insert(HeaderName::from_static("x-api-key"), key.parse()?);
        headers.insert(
            HeaderName::from_static("anthropic-version"),
            ANTHROPIC_VERSION.parse()?,
        );
        Ok(Self { client, headers })
    }
}

impl LLM for Claude {
    type ChatConfig = Request;

    async fn complete(
        &self,
        config: &Request,
        messages: &[Message],
    ) -> Result<String, UpstreamError> {
        let body = config.body(messages);
        tracing::debug!(
            "request: {}",
            serde_json::to_string(&body).unwrap_or_default()
        );

        let response = self
            .client
            .post(ENDPOINT)
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("response ({status}): {text}");

        if !status.is_success() {
            let message = response::error_message(&text).unwrap_or(text);
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: Response =
            serde_json::from_str(&text).map_err(|e| UpstreamError::Malformed(e.to_string()))?;
        let out = parsed.text();
        if out.is_empty() {
            return Err(UpstreamError::Malformed(
                "response contained no text content".into(),
            ));
        }

        Ok(out)
    }
}
