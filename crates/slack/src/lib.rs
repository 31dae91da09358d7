//! Kelp Slack channel adapter.
//!
//! Talks to the Slack Web API using reqwest directly and implements
//! the [`Channel`] trait from kelp-core. Inbound delivery is push:
//! the Events API posts envelopes to the daemon's HTTP endpoint, and
//! [`channel_event_from_envelope`] normalizes them.

pub use event::{channel_event_from_envelope, strip_mention};

mod event;

use anyhow::Result;
use compact_str::CompactString;
use kcore::{Channel, Outbound, Platform};
use reqwest::Client;
use serde::Deserialize;

/// Slack Web API channel adapter.
///
/// Uses `chat.postMessage` for sending, `chat.update` for editing a
/// previously posted message (placeholder-then-update UX), and
/// `auth.test` to discover the bot's own user id.
pub struct SlackChannel {
    /// Bot OAuth token (`xoxb-...`).
    bot_token: CompactString,
    /// HTTP client for API calls.
    client: Client,
}

impl SlackChannel {
    /// Create a new SlackChannel with the given bot token.
    pub fn new(bot_token: impl Into<CompactString>) -> Self {
        Self {
            bot_token: bot_token.into(),
            client: Client::new(),
        }
    }

    /// Create with a custom reqwest client.
    pub fn with_client(bot_token: impl Into<CompactString>, client: Client) -> Self {
        Self {
            bot_token: bot_token.into(),
            client,
        }
    }

    /// Call a Web API method and parse the common response envelope.
    async fn call(&self, method: &str, params: serde_json::Value) -> Result<ApiResponse> {
        let response: ApiResponse = self
            .client
            .post(api_url(method))
            .bearer_auth(self.bot_token.as_str())
            .json(&params)
            .send()
            .await?
            .json()
            .await?;

        if !response.ok {
            let error = response.error.as_deref().unwrap_or("unknown_error");
            anyhow::bail!("{method} failed: {error}");
        }

        Ok(response)
    }

    /// Identify the bot user behind the token.
    ///
    /// The returned user id is what mention text refers to as
    /// `<@BOTID>`.
    pub async fn auth_test(&self) -> Result<CompactString> {
        let response = self.call("auth.test", serde_json::json!({})).await?;
        response
            .user_id
            .ok_or_else(|| anyhow::anyhow!("auth.test returned no user_id"))
    }
}

/// Common Slack Web API response envelope.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    ts: Option<CompactString>,
    #[serde(default)]
    user_id: Option<CompactString>,
    #[serde(default)]
    error: Option<CompactString>,
}

/// Construct the Web API URL for a given method.
pub fn api_url(method: &str) -> String {
    format!("https://slack.com/api/{method}")
}

impl Channel for SlackChannel {
    fn platform(&self) -> Platform {
        Platform::Slack
    }

    async fn post(&self, message: Outbound) -> Result<CompactString> {
        let mut params = serde_json::json!({
            "channel": message.channel.as_str(),
            "text": message.text,
        });
        if let Some(thread) = &message.thread {
            params["thread_ts"] = serde_json::json!(thread.as_str());
        }

        let response = self.call("chat.postMessage", params).await?;
        response
            .ts
            .ok_or_else(|| anyhow::anyhow!("chat.postMessage returned no ts"))
    }

    async fn update(&self, channel: &str, ts: &str, text: &str) -> Result<()> {
        self.call(
            "chat.update",
            serde_json::json!({
                "channel": channel,
                "ts": ts,
                "text": text,
            }),
        )
        .await?;
        Ok(())
    }
}
