//! Concrete implementations of the collaborator traits.
//!
//! # Adapters
//!
//! - [`MemoryStore`] - Store snapshot implementing
//!   [`ConversationStore`](crate::traits::ConversationStore) and
//!   [`Router`](crate::traits::Router)
//! - [`ChannelDispatcher`] - Forwards actions over a tokio channel
//!
//! # Mock Implementations
//!
//! - [`mock::RecordingDispatcher`] - Records dispatched actions

pub mod channel_dispatcher;
pub mod memory_store;
pub mod mock;

pub use channel_dispatcher::ChannelDispatcher;
pub use memory_store::MemoryStore;
pub use mock::RecordingDispatcher;
