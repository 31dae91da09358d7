//! Channel trait and types for platform integrations.
//!
//! Channels connect the relay to messaging platforms (Slack, etc.).
//! Each channel normalizes inbound platform events into
//! [`ChannelEvent`] and delivers outbound text payloads.

pub use channel::{Channel, ChannelEvent, EventKind, Outbound, Platform};

mod channel;
