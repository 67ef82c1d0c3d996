//! Read access to navigation state.

use crate::models::VisiblePath;

/// Source of the currently visible route stack.
pub trait Router: Send + Sync {
    /// Route segments from the root navigator to the visible screen.
    fn visible_path(&self) -> VisiblePath;
}
