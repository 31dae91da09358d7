//! Bounded per-conversation chat history.
//!
//! The store maps a conversation key to an ordered sequence of turns,
//! truncated FIFO to a fixed bound. All access goes through a single
//! internal lock so concurrent event handlers never observe partial
//! mutations, and every read hands back an owned snapshot.
//!
//! Keys are derived, not stored independently: see [`derive_key`] for
//! the thread-vs-DM branching that groups messages into one logical
//! conversation.

pub use key::derive_key;
pub use store::{DEFAULT_MAX_TURNS, History};

mod key;
mod store;
