//! In-memory store snapshot.
//!
//! Holds conversation metadata, the badge map and the visible path. Loads
//! from the JSON shape the chat store dumps, so a header can be rendered
//! from a saved snapshot.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::models::{BadgeMap, ConversationIdKey, ConversationMeta, VisiblePath};
use crate::traits::{ConversationStore, Router};

/// Snapshot of the pieces of store state the header reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MemoryStore {
    metas: HashMap<ConversationIdKey, ConversationMeta>,
    badge_map: BadgeMap,
    visible_path: VisiblePath,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a snapshot written as JSON.
    pub fn from_file(path: &Path) -> Result<Self, SnapshotError> {
        let json = fs::read_to_string(path).map_err(|source| SnapshotError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let store: Self = serde_json::from_str(&json).map_err(|source| SnapshotError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            conversations = store.metas.len(),
            badges = store.badge_map.len(),
            "loaded store snapshot from {:?}",
            path
        );
        Ok(store)
    }

    pub fn insert_meta(
        &mut self,
        conversation_id: impl Into<ConversationIdKey>,
        meta: ConversationMeta,
    ) {
        self.metas.insert(conversation_id.into(), meta);
    }

    pub fn set_badge(&mut self, conversation_id: impl Into<ConversationIdKey>, count: u32) {
        self.badge_map.insert(conversation_id.into(), count);
    }

    pub fn set_visible_path(&mut self, path: VisiblePath) {
        self.visible_path = path;
    }

    pub fn with_meta(
        mut self,
        conversation_id: impl Into<ConversationIdKey>,
        meta: ConversationMeta,
    ) -> Self {
        self.insert_meta(conversation_id, meta);
        self
    }

    pub fn with_badge(mut self, conversation_id: impl Into<ConversationIdKey>, count: u32) -> Self {
        self.set_badge(conversation_id, count);
        self
    }

    pub fn with_visible_path(mut self, path: VisiblePath) -> Self {
        self.visible_path = path;
        self
    }

    /// Known conversation ids, sorted.
    pub fn conversation_ids(&self) -> Vec<&ConversationIdKey> {
        let mut ids: Vec<_> = self.metas.keys().collect();
        ids.sort();
        ids
    }
}

impl ConversationStore for MemoryStore {
    fn meta(&self, conversation_id: &ConversationIdKey) -> ConversationMeta {
        self.metas.get(conversation_id).cloned().unwrap_or_default()
    }

    fn badge_map(&self) -> &BadgeMap {
        &self.badge_map
    }
}

impl Router for MemoryStore {
    fn visible_path(&self) -> VisiblePath {
        self.visible_path.clone()
    }
}
