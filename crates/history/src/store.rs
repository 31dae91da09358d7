//! The bounded conversation store.

use compact_str::CompactString;
use llm::Message;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Default maximum number of turns retained per conversation.
pub const DEFAULT_MAX_TURNS: usize = 20;

/// Thread-safe map from conversation key to a bounded turn sequence.
///
/// Conversations are created lazily on first append and live for the
/// process lifetime; only turns within a conversation are bounded,
/// never the key set itself. The lock is held only for the in-memory
/// mutation and copy, never across an LLM or platform call.
pub struct History {
    max_turns: usize,
    conversations: Mutex<HashMap<CompactString, Vec<Message>>>,
}

impl History {
    /// Create an empty store with the default turn bound.
    pub fn new() -> Self {
        Self::with_max_turns(DEFAULT_MAX_TURNS)
    }

    /// Create an empty store retaining at most `max_turns` per key.
    pub fn with_max_turns(max_turns: usize) -> Self {
        Self {
            max_turns,
            conversations: Mutex::new(HashMap::new()),
        }
    }

    /// The per-conversation turn bound.
    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// Append one turn to the conversation for `key`.
    ///
    /// Creates the conversation if absent, then truncates from the
    /// front once the bound is exceeded. Eviction is strict FIFO with
    /// no role special-casing: the oldest surviving turn may well be
    /// an assistant turn.
    ///
    /// Returns a snapshot copy of the resulting sequence so the caller
    /// can use it without a second read under the lock.
    pub fn append(&self, key: &str, message: Message) -> Vec<Message> {
        let mut conversations = self.conversations.lock();
        let turns = conversations.entry(CompactString::from(key)).or_default();
        turns.push(message);
        if turns.len() > self.max_turns {
            let excess = turns.len() - self.max_turns;
            turns.drain(..excess);
        }
        turns.clone()
    }

    /// A snapshot copy of the conversation for `key`.
    ///
    /// Empty if the key has never been appended to. The returned
    /// sequence never aliases internal state, so callers are insulated
    /// from concurrent appends while they hold it.
    pub fn snapshot(&self, key: &str) -> Vec<Message> {
        self.conversations
            .lock()
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of conversations seen so far.
    pub fn conversations(&self) -> usize {
        self.conversations.lock().len()
    }

    /// Whether no conversation has been appended to yet.
    pub fn is_empty(&self) -> bool {
        self.conversations.lock().is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
