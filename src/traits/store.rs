//! Read access to the chat store.

use crate::models::{BadgeMap, ConversationIdKey, ConversationMeta};

/// Snapshot reads of conversation state.
///
/// Implementations return `ConversationMeta::default()` for conversations
/// they do not know about rather than failing.
pub trait ConversationStore: Send + Sync {
    /// Metadata for a conversation.
    fn meta(&self, conversation_id: &ConversationIdKey) -> ConversationMeta;

    /// Unread counts for every conversation.
    fn badge_map(&self) -> &BadgeMap;
}
