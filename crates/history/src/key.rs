//! Conversation key derivation.

use compact_str::{CompactString, format_compact};

/// Derive the key that groups messages into one logical conversation.
///
/// Messages inside a thread share a key regardless of sender, so
/// threaded conversations accumulate history across participants.
/// Unthreaded messages (direct messages) are scoped per channel and
/// sender instead.
///
/// Pure and infallible; `channel` and `user` are expected to be the
/// non-empty identifiers the platform adapter hands over.
pub fn derive_key(channel: &str, thread: Option<&str>, user: &str) -> CompactString {
    match thread {
        Some(thread) => format_compact!("{channel}:{thread}"),
        None => format_compact!("{channel}:{user}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let a = derive_key("C1", Some("170.001"), "U1");
        let b = derive_key("C1", Some("170.001"), "U1");
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_threads_get_distinct_keys() {
        let a = derive_key("C1", Some("170.001"), "U1");
        let b = derive_key("C1", Some("170.002"), "U1");
        assert_ne!(a, b);
    }

    #[test]
    fn threaded_key_ignores_sender() {
        let a = derive_key("C1", Some("170.001"), "U1");
        let b = derive_key("C1", Some("170.001"), "U2");
        assert_eq!(a, b);
    }

    #[test]
    fn unthreaded_key_scopes_by_sender() {
        let a = derive_key("D1", None, "U1");
        let b = derive_key("D1", None, "U2");
        assert_ne!(a, b);
    }

    #[test]
    fn key_format() {
        assert_eq!(derive_key("C1", Some("170.001"), "U1"), "C1:170.001");
        assert_eq!(derive_key("D1", None, "U9"), "D1:U9");
    }
}
