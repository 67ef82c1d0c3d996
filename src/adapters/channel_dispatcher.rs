//! Dispatcher that forwards actions over a tokio channel.

use tokio::sync::mpsc;

use crate::actions::HeaderAction;
use crate::traits::Dispatcher;

/// Sends header actions to whoever owns the receiving end (usually the
/// app's main loop).
#[derive(Debug, Clone)]
pub struct ChannelDispatcher {
    tx: mpsc::UnboundedSender<HeaderAction>,
}

impl ChannelDispatcher {
    pub fn new(tx: mpsc::UnboundedSender<HeaderAction>) -> Self {
        Self { tx }
    }

    /// Create a dispatcher and the receiver its actions arrive on.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<HeaderAction>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl Dispatcher for ChannelDispatcher {
    fn dispatch(&self, action: HeaderAction) {
        if let Err(e) = self.tx.send(action) {
            tracing::warn!("Dropping {} action: receiver closed", e.0.name());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConversationIdKey;

    #[tokio::test]
    async fn test_actions_arrive_in_order() {
        let (dispatcher, mut rx) = ChannelDispatcher::channel();
        let id = ConversationIdKey::new("c1");
        dispatcher.dispatch(HeaderAction::OpenFolder {
            conversation_id: id.clone(),
        });
        dispatcher.dispatch(HeaderAction::ToggleThreadSearch {
            conversation_id: id.clone(),
        });

        assert_eq!(
            rx.recv().await,
            Some(HeaderAction::OpenFolder {
                conversation_id: id.clone()
            })
        );
        assert_eq!(
            rx.recv().await,
            Some(HeaderAction::ToggleThreadSearch { conversation_id: id })
        );
    }

    #[test]
    fn test_closed_receiver_does_not_panic() {
        let (dispatcher, rx) = ChannelDispatcher::channel();
        drop(rx);
        dispatcher.dispatch(HeaderAction::ShowUserProfile {
            username: "alice".to_string(),
        });
    }
}
