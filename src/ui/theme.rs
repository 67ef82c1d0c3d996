//! Color theme constants for the conversation header.

use ratatui::style::Color;

/// Conversation title text
pub const COLOR_TITLE: Color = Color::White;

/// Team name shown before a big-team channel
pub const COLOR_TEAM: Color = Color::Gray;

/// Secondary text (separators, hints, pending label)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Unread badge
pub const COLOR_BADGE: Color = Color::LightRed;

/// Muted indicator
pub const COLOR_MUTED: Color = Color::Yellow;

/// Info-panel indicator while the panel is open
pub const COLOR_ACCENT: Color = Color::LightBlue;
