//! Adapter wiring the header computation to its collaborators.

use std::fmt;
use std::sync::Arc;

use crate::actions::HeaderAction;
use crate::models::ConversationIdKey;
use crate::traits::{ConversationStore, Dispatcher, Router};

use super::props::{compute_header_props, select_variant, HeaderProps, HeaderVariant};

/// Callback owned by the surrounding screen for toggling the info panel.
pub type InfoPanelToggle = Arc<dyn Fn() + Send + Sync>;

/// Handles a rendered header uses to act on its conversation.
#[derive(Clone)]
pub struct HeaderCallbacks {
    conversation_id: ConversationIdKey,
    dispatcher: Arc<dyn Dispatcher>,
    on_toggle_info_panel: InfoPanelToggle,
}

impl HeaderCallbacks {
    pub fn new(
        conversation_id: ConversationIdKey,
        dispatcher: Arc<dyn Dispatcher>,
        on_toggle_info_panel: InfoPanelToggle,
    ) -> Self {
        Self {
            conversation_id,
            dispatcher,
            on_toggle_info_panel,
        }
    }

    pub fn open_folder(&self) {
        self.send(HeaderAction::OpenFolder {
            conversation_id: self.conversation_id.clone(),
        });
    }

    pub fn unmute_conversation(&self) {
        self.send(HeaderAction::MuteConversation {
            conversation_id: self.conversation_id.clone(),
            muted: false,
        });
    }

    pub fn toggle_thread_search(&self) {
        self.send(HeaderAction::ToggleThreadSearch {
            conversation_id: self.conversation_id.clone(),
        });
    }

    pub fn show_profile(&self, username: &str) {
        self.send(HeaderAction::ShowUserProfile {
            username: username.to_string(),
        });
    }

    /// Passed through from the owner unchanged.
    pub fn toggle_info_panel(&self) {
        (self.on_toggle_info_panel)();
    }

    fn send(&self, action: HeaderAction) {
        tracing::debug!(
            action = action.name(),
            conversation_id = %self.conversation_id,
            "header action"
        );
        self.dispatcher.dispatch(action);
    }
}

impl fmt::Debug for HeaderCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderCallbacks")
            .field("conversation_id", &self.conversation_id)
            .finish_non_exhaustive()
    }
}

/// Resolved header for one conversation: props, presentation and callbacks.
#[derive(Debug, Clone)]
pub struct HeaderView {
    pub props: HeaderProps,
    pub variant: HeaderVariant,
    pub callbacks: HeaderCallbacks,
}

/// Reads collaborators and produces a [`HeaderView`].
///
/// Holds no state of its own; call [`HeaderContainer::view`] again whenever
/// the store or router changes.
#[derive(Clone)]
pub struct HeaderContainer {
    store: Arc<dyn ConversationStore>,
    router: Arc<dyn Router>,
    dispatcher: Arc<dyn Dispatcher>,
}

impl HeaderContainer {
    pub fn new(
        store: Arc<dyn ConversationStore>,
        router: Arc<dyn Router>,
        dispatcher: Arc<dyn Dispatcher>,
    ) -> Self {
        Self {
            store,
            router,
            dispatcher,
        }
    }

    /// Build the header for `conversation_id` from the current snapshot.
    pub fn view(
        &self,
        conversation_id: &ConversationIdKey,
        info_panel_open: bool,
        on_toggle_info_panel: InfoPanelToggle,
    ) -> HeaderView {
        let meta = self.store.meta(conversation_id);
        let visible_path = self.router.visible_path();
        let props = compute_header_props(
            &meta,
            self.store.badge_map(),
            &visible_path,
            conversation_id,
            info_panel_open,
        );
        let variant = select_variant(&props);
        tracing::debug!(
            conversation_id = %conversation_id,
            variant = variant.name(),
            badge_number = props.badge_number,
            "header selected"
        );

        HeaderView {
            props,
            variant,
            callbacks: HeaderCallbacks::new(
                conversation_id.clone(),
                Arc::clone(&self.dispatcher),
                on_toggle_info_panel,
            ),
        }
    }
}

impl fmt::Debug for HeaderContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderContainer").finish_non_exhaustive()
    }
}
