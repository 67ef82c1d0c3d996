//! Conversation header selection for a terminal chat client.
//!
//! Derives header props from conversation metadata, the badge map and the
//! visible navigation path, picks one of three header presentations, and
//! renders it with ratatui. Also hosts the client's process-wide feature
//! flags.

pub mod actions;
pub mod adapters;
pub mod cli;
pub mod error;
pub mod feature_flags;
pub mod header;
pub mod models;
pub mod traits;
pub mod ui;
