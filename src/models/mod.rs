//! Data models read by the header layer.
//!
//! Everything here is owned by the chat store; the header code only reads
//! and projects it.

pub mod conversation;
pub mod route;

pub use conversation::{
    BadgeMap, ConversationIdKey, ConversationMeta, TeamType, PENDING_ERROR_CONVERSATION_ID,
    PENDING_WAITING_CONVERSATION_ID,
};
pub use route::{inbox_path, is_on_top_of_inbox, tabs, RouteSegment, VisiblePath};
