//! Kelp Slack relay daemon.
//!
//! Receives Slack Events API callbacks over HTTP, relays message text
//! to the LLM provider with per-conversation history as context, and
//! posts the response back into the originating thread with a
//! placeholder-then-update UX.

pub use config::{DEFAULT_CONFIG, DaemonConfig};
pub use router::{AppState, router, verification_challenge};

pub mod config;
pub mod events;
pub mod router;
