//! Channel trait and normalized event types.

use compact_str::CompactString;
use std::future::Future;

/// Messaging platform identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Platform {
    /// Slack messaging platform.
    Slack,
}

/// How the platform delivered a message to the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// The bot was @-mentioned in a channel.
    Mention,
    /// A direct or group direct message.
    DirectMessage,
}

/// A normalized inbound message event from a channel.
#[derive(Debug, Clone)]
pub struct ChannelEvent {
    /// Platform this event belongs to.
    pub platform: Platform,
    /// How the message reached the bot.
    pub kind: EventKind,
    /// Channel identifier on the platform.
    pub channel: CompactString,
    /// Thread identifier, if the message was sent inside a thread.
    pub thread: Option<CompactString>,
    /// Sender identifier on the platform.
    pub sender: CompactString,
    /// Message text content.
    pub text: String,
    /// Platform timestamp/id of the message itself.
    pub ts: CompactString,
}

impl ChannelEvent {
    /// The thread a reply to this event should land in.
    ///
    /// Falls back to the event's own ts, which starts a new thread on
    /// platforms that thread by message id.
    pub fn reply_thread(&self) -> &CompactString {
        self.thread.as_ref().unwrap_or(&self.ts)
    }
}

impl From<ChannelEvent> for llm::Message {
    fn from(event: ChannelEvent) -> Self {
        llm::Message::user(event.text)
    }
}

/// An outbound text payload for a channel to deliver.
#[derive(Debug, Clone)]
pub struct Outbound {
    /// Target channel identifier.
    pub channel: CompactString,
    /// Thread to post into, if any.
    pub thread: Option<CompactString>,
    /// Message text content.
    pub text: String,
}

/// A connection to a messaging platform.
///
/// Methods use RPITIT for async without boxing. Inbound delivery is
/// platform-specific (push or poll) and lives with the adapter; the
/// trait covers the outbound surface the relay needs.
pub trait Channel: Send + Sync {
    /// The platform this channel connects to.
    fn platform(&self) -> Platform;

    /// Post a message and return its platform message id.
    fn post(&self, message: Outbound)
    -> impl Future<Output = anyhow::Result<CompactString>> + Send;

    /// Replace the text of a previously posted message.
    fn update(
        &self,
        channel: &str,
        ts: &str,
        text: &str,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}
