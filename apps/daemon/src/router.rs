//! Events API endpoint routing.
//!
//! Slack requires the endpoint to answer the `url_verification`
//! handshake with its challenge and to ack event callbacks within
//! three seconds. The actual completion round runs in a spawned task
//! so slow upstream calls never delay the ack.

use crate::events;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use compact_str::CompactString;
use kcore::Channel;
use llm::LLM;
use relay::Responder;
use std::sync::Arc;

/// Shared state for the event endpoint.
///
/// Generic over the provider and outbound channel so the relay flow
/// can run against stubs in tests.
pub struct AppState<P: LLM, C: Channel> {
    /// The completion responder.
    pub responder: Arc<Responder<P>>,
    /// Outbound channel for replies.
    pub channel: Arc<C>,
    /// Our own bot user id, for mention stripping.
    pub bot_user: CompactString,
}

impl<P: LLM, C: Channel> Clone for AppState<P, C> {
    fn clone(&self) -> Self {
        Self {
            responder: Arc::clone(&self.responder),
            channel: Arc::clone(&self.channel),
            bot_user: self.bot_user.clone(),
        }
    }
}

/// Build the daemon router.
pub fn router<P, C>(state: AppState<P, C>) -> Router
where
    P: LLM + 'static,
    P::ChatConfig: 'static,
    C: Channel + 'static,
{
    Router::new()
        .route("/slack/events", post(slack_events::<P, C>))
        .with_state(state)
}

async fn slack_events<P, C>(
    State(state): State<AppState<P, C>>,
    Json(envelope): Json<serde_json::Value>,
) -> Response
where
    P: LLM + 'static,
    P::ChatConfig: 'static,
    C: Channel + 'static,
{
    if let Some(challenge) = verification_challenge(&envelope) {
        tracing::info!("answering url_verification handshake");
        return Json(serde_json::json!({ "challenge": challenge })).into_response();
    }

    if let Some(event) = slack::channel_event_from_envelope(&envelope) {
        tracing::debug!("event in {} from {}", event.channel, event.sender);
        tokio::spawn(events::handle_event(state, event));
    }

    StatusCode::OK.into_response()
}

/// Extract the challenge from a `url_verification` envelope, if any.
pub fn verification_challenge(envelope: &serde_json::Value) -> Option<String> {
    if envelope["type"] != "url_verification" {
        return None;
    }
    envelope["challenge"].as_str().map(String::from)
}
