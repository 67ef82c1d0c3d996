//! Conversation metadata as held by the chat store.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Key for a conversation that is still being created on the server.
pub const PENDING_WAITING_CONVERSATION_ID: &str = "pendingWaiting";

/// Key for a conversation whose creation failed.
pub const PENDING_ERROR_CONVERSATION_ID: &str = "pendingError";

/// Opaque conversation identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationIdKey(String);

impl ConversationIdKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The "no conversation selected" key.
    pub fn none() -> Self {
        Self(String::new())
    }

    pub fn pending_waiting() -> Self {
        Self::new(PENDING_WAITING_CONVERSATION_ID)
    }

    pub fn pending_error() -> Self {
        Self::new(PENDING_ERROR_CONVERSATION_ID)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for an empty key.
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    /// True for either pending sentinel (still creating, or failed to create).
    pub fn is_pending(&self) -> bool {
        self.0 == PENDING_WAITING_CONVERSATION_ID || self.0 == PENDING_ERROR_CONVERSATION_ID
    }
}

impl fmt::Display for ConversationIdKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConversationIdKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ConversationIdKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Kind of team a conversation belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamType {
    /// Not a team: an ad-hoc group of participants.
    #[default]
    Adhoc,
    /// Team with a single general channel.
    Small,
    /// Team with multiple channels.
    Big,
}

/// Unread counts keyed by conversation.
pub type BadgeMap = HashMap<ConversationIdKey, u32>;

/// Metadata for one conversation.
///
/// A conversation is either a team channel (`team_name` set) or a direct
/// conversation with a participant list. Empty strings are treated the same
/// as missing names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConversationMeta {
    #[serde(rename = "teamname")]
    pub team_name: Option<String>,
    #[serde(rename = "channelname")]
    pub channel_name: Option<String>,
    pub team_type: TeamType,
    pub is_muted: bool,
    /// Participants other than the current user, in display order.
    pub name_participants: Vec<String>,
    /// Contact-book display names for participants that have one.
    pub participant_to_contact_name: HashMap<String, String>,
}

impl ConversationMeta {
    /// Team name, if this is a team conversation.
    pub fn team_name(&self) -> Option<&str> {
        non_empty(self.team_name.as_deref())
    }

    /// Channel name, if one is set.
    pub fn channel_name(&self) -> Option<&str> {
        non_empty(self.channel_name.as_deref())
    }

    pub fn is_team(&self) -> bool {
        self.team_name().is_some()
    }

    pub fn with_team(mut self, team_name: impl Into<String>, team_type: TeamType) -> Self {
        self.team_name = Some(team_name.into());
        self.team_type = team_type;
        self
    }

    pub fn with_channel(mut self, channel_name: impl Into<String>) -> Self {
        self.channel_name = Some(channel_name.into());
        self
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.name_participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_contact_name(
        mut self,
        participant: impl Into<String>,
        contact_name: impl Into<String>,
    ) -> Self {
        self.participant_to_contact_name
            .insert(participant.into(), contact_name.into());
        self
    }

    pub fn with_muted(mut self, muted: bool) -> Self {
        self.is_muted = muted;
        self
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_sentinels() {
        assert!(ConversationIdKey::pending_waiting().is_pending());
        assert!(ConversationIdKey::pending_error().is_pending());
        assert!(!ConversationIdKey::new("0000abcd").is_pending());
        assert!(!ConversationIdKey::none().is_pending());
    }

    #[test]
    fn test_empty_team_name_is_not_a_team() {
        let meta = ConversationMeta {
            team_name: Some(String::new()),
            ..Default::default()
        };
        assert!(!meta.is_team());
        assert_eq!(meta.team_name(), None);
    }

    #[test]
    fn test_default_meta_is_empty_adhoc() {
        let meta = ConversationMeta::default();
        assert_eq!(meta.team_type, TeamType::Adhoc);
        assert!(meta.name_participants.is_empty());
        assert!(!meta.is_muted);
    }

    #[test]
    fn test_deserialize_store_shape() {
        let json = r#"{
            "teamname": "eng",
            "channelname": "general",
            "teamType": "big",
            "isMuted": true
        }"#;
        let meta: ConversationMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.team_name(), Some("eng"));
        assert_eq!(meta.channel_name(), Some("general"));
        assert_eq!(meta.team_type, TeamType::Big);
        assert!(meta.is_muted);
        assert!(meta.participant_to_contact_name.is_empty());
    }
}
