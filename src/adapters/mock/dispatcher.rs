//! Recording dispatcher for tests.

use std::sync::{Arc, Mutex};

use crate::actions::HeaderAction;
use crate::traits::Dispatcher;

/// Dispatcher that keeps every action it receives.
///
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingDispatcher {
    actions: Arc<Mutex<Vec<HeaderAction>>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Actions dispatched so far, oldest first.
    pub fn actions(&self) -> Vec<HeaderAction> {
        self.actions.lock().map(|a| a.clone()).unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut actions) = self.actions.lock() {
            actions.clear();
        }
    }
}

impl Dispatcher for RecordingDispatcher {
    fn dispatch(&self, action: HeaderAction) {
        if let Ok(mut actions) = self.actions.lock() {
            actions.push(action);
        }
    }
}
