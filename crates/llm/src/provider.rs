//! Provider abstractions for the unified LLM Interfaces

use crate::{Message, UpstreamError};
use std::future::Future;

/// A trait for LLM providers
pub trait LLM: Clone + Send + Sync {
    /// The chat configuration.
    type ChatConfig: Send + Sync;

    /// Request a single completion for an ordered message history.
    ///
    /// Exactly one upstream attempt per call; retry policy is the
    /// caller's concern.
    fn complete(
        &self,
        config: &Self::ChatConfig,
        messages: &[Message],
    ) -> impl Future<Output = Result<String, UpstreamError>> + Send;
}
