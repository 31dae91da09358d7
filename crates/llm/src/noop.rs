//! No-op LLM provider for testing.
//!
//! Implements [`LLM`] but panics on `complete`. Intended for unit
//! tests that exercise history and routing logic without making real
//! LLM calls.

use crate::{LLM, Message, UpstreamError};

/// A no-op LLM provider that panics on any actual LLM call.
///
/// # Panics
///
/// `complete` panics if called. Only use this provider in tests that
/// never invoke LLM methods.
#[derive(Clone, Copy)]
pub struct NoopProvider;

impl LLM for NoopProvider {
    type ChatConfig = ();

    async fn complete(
        &self,
        _config: &(),
        _messages: &[Message],
    ) -> Result<String, UpstreamError> {
        panic!("NoopProvider::complete called; not intended for real LLM calls");
    }
}
