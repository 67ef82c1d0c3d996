//! Common fixtures for integration tests.

use std::sync::Arc;

use convo_header::adapters::{MemoryStore, RecordingDispatcher};
use convo_header::header::{HeaderContainer, InfoPanelToggle};
use convo_header::models::{inbox_path, ConversationMeta, RouteSegment, TeamType, VisiblePath};

/// Store with one of each kind of conversation and some unread badges.
///
/// | id        | kind                         | badge |
/// |-----------|------------------------------|-------|
/// | `eng`     | big team, `#general`         | 2     |
/// | `family`  | small team                   | 0     |
/// | `alice`   | username DM                  | 3     |
/// | `phone`   | DM with a phone participant  | 1     |
/// | `email`   | DM with an email participant | 0     |
pub fn sample_store(visible_path: VisiblePath) -> MemoryStore {
    MemoryStore::new()
        .with_meta(
            "eng",
            ConversationMeta::default()
                .with_team("eng", TeamType::Big)
                .with_channel("general")
                .with_participants(["alice@phone"]),
        )
        .with_meta(
            "family",
            ConversationMeta::default()
                .with_team("family", TeamType::Small)
                .with_muted(true),
        )
        .with_meta(
            "alice",
            ConversationMeta::default().with_participants(["alice", "bob"]),
        )
        .with_meta(
            "phone",
            ConversationMeta::default()
                .with_participants(["carol", "15555550100@phone"])
                .with_contact_name("15555550100@phone", "Mom"),
        )
        .with_meta(
            "email",
            ConversationMeta::default().with_participants(["bob@email"]),
        )
        .with_badge("eng", 2)
        .with_badge("family", 0)
        .with_badge("alice", 3)
        .with_badge("phone", 1)
        .with_visible_path(visible_path)
}

/// Visible path while a conversation is open on top of the inbox.
pub fn conversation_path() -> VisiblePath {
    let mut path = inbox_path();
    path.push(RouteSegment::named("chatConversation"));
    path
}

/// Container over a store, recording dispatched actions.
pub fn container(store: MemoryStore) -> (HeaderContainer, RecordingDispatcher) {
    let store = Arc::new(store);
    let recorder = RecordingDispatcher::new();
    let container = HeaderContainer::new(store.clone(), store, Arc::new(recorder.clone()));
    (container, recorder)
}

pub fn noop_toggle() -> InfoPanelToggle {
    Arc::new(|| {})
}
