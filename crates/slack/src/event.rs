//! Slack Events API envelope parsing and normalization.
//!
//! The Events API delivers an outer envelope whose `event` field
//! carries the actual message. Two event types matter here:
//! `app_mention` (the bot was @-mentioned in a channel) and `message`
//! (direct messages, channel_type `im`/`mpim`). Everything else,
//! including bot echoes and message subtypes (edits, deletes, joins),
//! is dropped before it reaches the relay.

use compact_str::CompactString;
use kcore::{ChannelEvent, EventKind, Platform};
use serde::Deserialize;

/// Outer Events API envelope.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: CompactString,
    #[serde(default)]
    event: Option<Event>,
}

/// The inner message event.
#[derive(Debug, Deserialize)]
struct Event {
    #[serde(rename = "type")]
    kind: CompactString,
    #[serde(default)]
    user: Option<CompactString>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    channel: CompactString,
    #[serde(default)]
    ts: CompactString,
    #[serde(default)]
    thread_ts: Option<CompactString>,
    #[serde(default)]
    channel_type: Option<CompactString>,
    #[serde(default)]
    bot_id: Option<CompactString>,
    #[serde(default)]
    subtype: Option<CompactString>,
}

/// Convert an Events API envelope to a normalized ChannelEvent.
///
/// Returns `None` for anything the relay must not respond to:
/// non-`event_callback` envelopes, bot messages (including our own
/// echoes), message subtypes, `message` events outside DM channels,
/// and direct messages with no text. An empty mention still comes
/// through so the relay can greet.
pub fn channel_event_from_envelope(envelope: &serde_json::Value) -> Option<ChannelEvent> {
    let envelope: Envelope = serde_json::from_value(envelope.clone()).ok()?;
    if envelope.kind != "event_callback" {
        return None;
    }
    convert_event(envelope.event?)
}

fn convert_event(event: Event) -> Option<ChannelEvent> {
    if event.bot_id.is_some() || event.subtype.is_some() {
        return None;
    }

    let kind = match event.kind.as_str() {
        "app_mention" => EventKind::Mention,
        // Channel mentions arrive as app_mention; the message event
        // only covers direct and group direct messages.
        "message" => match event.channel_type.as_deref() {
            Some("im") | Some("mpim") => EventKind::DirectMessage,
            _ => return None,
        },
        _ => return None,
    };

    let mut text = event.text.unwrap_or_default();
    if kind == EventKind::DirectMessage {
        text = text.trim().to_string();
        // Nothing to say and nothing to greet for.
        if text.is_empty() {
            return None;
        }
    }

    Some(ChannelEvent {
        platform: Platform::Slack,
        kind,
        channel: event.channel,
        thread: event.thread_ts,
        sender: event.user.unwrap_or_default(),
        text,
        ts: event.ts,
    })
}

/// Strip `<@BOTID>` mention tokens from message text and trim.
pub fn strip_mention(text: &str, bot_user_id: &str) -> String {
    text.replace(&format!("<@{bot_user_id}>"), "")
        .trim()
        .to_string()
}
