//! Test doubles for the collaborator traits.

pub mod dispatcher;

pub use dispatcher::RecordingDispatcher;
