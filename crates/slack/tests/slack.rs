//! Tests for the Slack channel adapter.

use kcore::{Channel, EventKind, Platform};
use kelp_slack::{SlackChannel, api_url, channel_event_from_envelope, strip_mention};

#[test]
fn slack_channel_platform() {
    let channel = SlackChannel::new("xoxb-test");
    assert_eq!(channel.platform(), Platform::Slack);
}

#[test]
fn slack_channel_construction() {
    let channel = SlackChannel::with_client("xoxb-test", reqwest::Client::new());
    assert_eq!(channel.platform(), Platform::Slack);
}

#[test]
fn app_mention_parses() {
    let envelope = serde_json::json!({
        "type": "event_callback",
        "event": {
            "type": "app_mention",
            "user": "U123",
            "text": "<@UBOT> what is rust?",
            "channel": "C456",
            "ts": "1700000000.000100"
        }
    });

    let event = channel_event_from_envelope(&envelope).unwrap();
    assert_eq!(event.platform, Platform::Slack);
    assert_eq!(event.kind, EventKind::Mention);
    assert_eq!(event.channel, "C456");
    assert_eq!(event.sender, "U123");
    assert_eq!(event.text, "<@UBOT> what is rust?");
    assert!(event.thread.is_none());
    assert_eq!(event.reply_thread(), "1700000000.000100");
}

#[test]
fn threaded_mention_keeps_thread_ts() {
    let envelope = serde_json::json!({
        "type": "event_callback",
        "event": {
            "type": "app_mention",
            "user": "U123",
            "text": "<@UBOT> and then?",
            "channel": "C456",
            "ts": "1700000010.000200",
            "thread_ts": "1700000000.000100"
        }
    });

    let event = channel_event_from_envelope(&envelope).unwrap();
    assert_eq!(event.thread.as_deref(), Some("1700000000.000100"));
    assert_eq!(event.reply_thread(), "1700000000.000100");
}

#[test]
fn direct_message_parses() {
    let envelope = serde_json::json!({
        "type": "event_callback",
        "event": {
            "type": "message",
            "channel_type": "im",
            "user": "U123",
            "text": "hello there",
            "channel": "D789",
            "ts": "1700000000.000300"
        }
    });

    let event = channel_event_from_envelope(&envelope).unwrap();
    assert_eq!(event.kind, EventKind::DirectMessage);
    assert_eq!(event.channel, "D789");
    assert_eq!(event.text, "hello there");
}

#[test]
fn empty_direct_message_is_dropped() {
    let envelope = serde_json::json!({
        "type": "event_callback",
        "event": {
            "type": "message",
            "channel_type": "im",
            "user": "U123",
            "text": "",
            "channel": "D789",
            "ts": "1700000000.000310"
        }
    });
    assert!(channel_event_from_envelope(&envelope).is_none());
}

#[test]
fn whitespace_only_direct_message_is_dropped() {
    let envelope = serde_json::json!({
        "type": "event_callback",
        "event": {
            "type": "message",
            "channel_type": "im",
            "user": "U123",
            "text": "   \n ",
            "channel": "D789",
            "ts": "1700000000.000320"
        }
    });
    assert!(channel_event_from_envelope(&envelope).is_none());
}

#[test]
fn direct_message_text_is_trimmed() {
    let envelope = serde_json::json!({
        "type": "event_callback",
        "event": {
            "type": "message",
            "channel_type": "im",
            "user": "U123",
            "text": "  hello  ",
            "channel": "D789",
            "ts": "1700000000.000330"
        }
    });
    let event = channel_event_from_envelope(&envelope).unwrap();
    assert_eq!(event.text, "hello");
}

#[test]
fn empty_mention_still_comes_through() {
    // A bare @-mention has no text left after stripping, but the
    // relay answers it with a greeting, so it must not be dropped.
    let envelope = serde_json::json!({
        "type": "event_callback",
        "event": {
            "type": "app_mention",
            "user": "U123",
            "text": "<@UBOT>",
            "channel": "C456",
            "ts": "1700000000.000340"
        }
    });
    let event = channel_event_from_envelope(&envelope).unwrap();
    assert_eq!(event.kind, EventKind::Mention);
    assert_eq!(event.text, "<@UBOT>");
}

#[test]
fn non_dm_message_event_is_dropped() {
    let envelope = serde_json::json!({
        "type": "event_callback",
        "event": {
            "type": "message",
            "channel_type": "channel",
            "user": "U123",
            "text": "ambient chatter",
            "channel": "C456",
            "ts": "1700000000.000400"
        }
    });
    assert!(channel_event_from_envelope(&envelope).is_none());
}

#[test]
fn bot_messages_are_dropped() {
    let envelope = serde_json::json!({
        "type": "event_callback",
        "event": {
            "type": "message",
            "channel_type": "im",
            "bot_id": "B999",
            "text": "i am a bot",
            "channel": "D789",
            "ts": "1700000000.000500"
        }
    });
    assert!(channel_event_from_envelope(&envelope).is_none());
}

#[test]
fn message_subtypes_are_dropped() {
    let envelope = serde_json::json!({
        "type": "event_callback",
        "event": {
            "type": "message",
            "channel_type": "im",
            "subtype": "message_changed",
            "user": "U123",
            "channel": "D789",
            "ts": "1700000000.000600"
        }
    });
    assert!(channel_event_from_envelope(&envelope).is_none());
}

#[test]
fn url_verification_is_not_an_event() {
    let envelope = serde_json::json!({
        "type": "url_verification",
        "challenge": "abc123"
    });
    assert!(channel_event_from_envelope(&envelope).is_none());
}

#[test]
fn strip_mention_removes_bot_token() {
    assert_eq!(strip_mention("<@UBOT> hello", "UBOT"), "hello");
    assert_eq!(strip_mention("hello <@UBOT>", "UBOT"), "hello");
    assert_eq!(strip_mention("plain text", "UBOT"), "plain text");
    assert_eq!(strip_mention("  <@UBOT>  ", "UBOT"), "");
    // Other users' mentions survive.
    assert_eq!(strip_mention("<@UOTHER> hi", "UBOT"), "<@UOTHER> hi");
}

#[test]
fn api_url_format() {
    assert_eq!(api_url("chat.postMessage"), "https://slack.com/api/chat.postMessage");
}
