//! Per-event relay handling.

use crate::router::AppState;
use kcore::{Channel, ChannelEvent, EventKind, Outbound};
use llm::LLM;

/// Placeholder posted while the completion is in flight.
pub const PLACEHOLDER: &str = "_Thinking…_";

/// Reply for a mention with no text left after stripping.
pub const GREETING: &str = "Hi! Ask me anything.";

/// Run one full relay round for a normalized inbound event.
///
/// Mentions get the bot token stripped first; a mention with nothing
/// else in it is answered with a greeting. Direct messages arrive
/// pre-trimmed and non-empty, so they go straight to the responder.
/// Otherwise: post a placeholder into the reply thread, run the
/// responder, and edit the placeholder with the final text. Relay
/// failures are logged and dropped; there is nothing useful to do
/// with them beyond that.
pub async fn handle_event<P: LLM, C: Channel>(state: AppState<P, C>, mut event: ChannelEvent) {
    let thread = event.reply_thread().clone();

    if event.kind == EventKind::Mention {
        event.text = slack::strip_mention(&event.text, &state.bot_user);
        if event.text.is_empty() {
            let greeting = Outbound {
                channel: event.channel.clone(),
                thread: Some(thread),
                text: GREETING.to_string(),
            };
            if let Err(e) = state.channel.post(greeting).await {
                tracing::error!("failed to post greeting: {e}");
            }
            return;
        }
    }

    let placeholder = Outbound {
        channel: event.channel.clone(),
        thread: Some(thread),
        text: PLACEHOLDER.to_string(),
    };
    let placeholder_ts = match state.channel.post(placeholder).await {
        Ok(ts) => ts,
        Err(e) => {
            tracing::error!("failed to post placeholder: {e}");
            return;
        }
    };

    let reply = state.responder.respond(&event).await;
    if let Err(e) = state
        .channel
        .update(&event.channel, &placeholder_ts, &reply.text)
        .await
    {
        tracing::error!("failed to update placeholder {placeholder_ts}: {e}");
    }
}
