//! Actions the header layer asks the store to perform.

use crate::models::ConversationIdKey;

/// Requests issued from a rendered header.
///
/// These are fire-and-forget: the header never reads a result back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderAction {
    /// Open the conversation's file-storage folder view
    OpenFolder { conversation_id: ConversationIdKey },
    /// Set the conversation's mute flag
    MuteConversation {
        conversation_id: ConversationIdKey,
        muted: bool,
    },
    /// Show or hide the in-thread search bar
    ToggleThreadSearch { conversation_id: ConversationIdKey },
    /// Navigate to a user's profile
    ShowUserProfile { username: String },
}

impl HeaderAction {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            HeaderAction::OpenFolder { .. } => "open_folder",
            HeaderAction::MuteConversation { .. } => "mute_conversation",
            HeaderAction::ToggleThreadSearch { .. } => "toggle_thread_search",
            HeaderAction::ShowUserProfile { .. } => "show_user_profile",
        }
    }

    /// Conversation the action targets, if any.
    pub fn conversation_id(&self) -> Option<&ConversationIdKey> {
        match self {
            HeaderAction::OpenFolder { conversation_id }
            | HeaderAction::MuteConversation {
                conversation_id, ..
            }
            | HeaderAction::ToggleThreadSearch { conversation_id } => Some(conversation_id),
            HeaderAction::ShowUserProfile { .. } => None,
        }
    }
}
