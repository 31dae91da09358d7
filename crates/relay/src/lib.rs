//! Inbound message responder.
//!
//! The responder is the seam between a channel adapter and an LLM
//! provider: it derives the conversation key, records the user turn,
//! requests a completion with the bounded history as context, records
//! genuine model output, and hands back the text to relay.
//!
//! Collaborators are injected (no process-wide singletons) so the
//! whole path is testable with a stub provider.

use compact_str::CompactString;
use history::{History, derive_key};
use kcore::ChannelEvent;
use llm::{LLM, Message};
use std::sync::Arc;

/// Orchestrates one completion round per inbound event.
pub struct Responder<P: LLM> {
    provider: P,
    config: P::ChatConfig,
    history: Arc<History>,
}

/// The outcome of one completion round.
#[derive(Debug, Clone)]
pub struct Reply {
    /// Conversation key the round was recorded under.
    pub key: CompactString,
    /// Text to relay back into the originating thread.
    pub text: String,
    /// False when the text is an upstream failure diagnostic rather
    /// than model output.
    pub ok: bool,
}

impl<P: LLM> Responder<P> {
    /// Create a responder over an injected provider and history store.
    pub fn new(provider: P, config: P::ChatConfig, history: Arc<History>) -> Self {
        Self {
            provider,
            config,
            history,
        }
    }

    /// The shared history store.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Produce a reply for one normalized inbound event.
    ///
    /// The user turn is recorded before the upstream call; the
    /// assistant turn is recorded only on success. Upstream failures
    /// become a user-visible diagnostic and are deliberately kept out
    /// of the history so they never feed back into model context.
    pub async fn respond(&self, event: &ChannelEvent) -> Reply {
        let key = derive_key(&event.channel, event.thread.as_deref(), &event.sender);
        let context = self.history.append(&key, Message::user(event.text.clone()));

        // The upstream call happens on our own snapshot, outside any lock.
        match self.provider.complete(&self.config, &context).await {
            Ok(text) => {
                self.history.append(&key, Message::assistant(text.clone()));
                Reply {
                    key,
                    text,
                    ok: true,
                }
            }
            Err(e) => {
                tracing::error!("completion failed for {key}: {e}");
                Reply {
                    key,
                    text: format!(":warning: Sorry, I hit an error talking to the model: `{e}`"),
                    ok: false,
                }
            }
        }
    }
}
