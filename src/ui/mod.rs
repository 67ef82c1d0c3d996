//! Terminal rendering for the conversation header.
//!
//! Maps a [`HeaderVariant`](crate::header::HeaderVariant) to its
//! presentation. The header computation never depends on this module.

pub mod header;
pub mod theme;

pub use header::{render, render_to_buffer};
