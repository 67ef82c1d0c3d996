//! Trait abstractions for the collaborators the header layer depends on.
//!
//! The header computation never touches global state. Everything it reads
//! arrives through these traits, which keeps it testable without a running
//! store.
//!
//! # Traits
//!
//! - [`ConversationStore`] - Conversation metadata and the badge map
//! - [`Router`] - The visible navigation path
//! - [`Dispatcher`] - Sink for [`HeaderAction`](crate::actions::HeaderAction)s

pub mod dispatcher;
pub mod router;
pub mod store;

pub use dispatcher::Dispatcher;
pub use router::Router;
pub use store::ConversationStore;
