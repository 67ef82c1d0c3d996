//! Action dispatch.

use crate::actions::HeaderAction;

/// Sink for header actions.
///
/// Dispatch is fire-and-forget. Implementations must not block the caller.
pub trait Dispatcher: Send + Sync {
    fn dispatch(&self, action: HeaderAction);
}

impl<F> Dispatcher for F
where
    F: Fn(HeaderAction) + Send + Sync,
{
    fn dispatch(&self, action: HeaderAction) {
        self(action)
    }
}
