//! Derived header props and variant selection.
//!
//! This is the pure half of the header layer: data in, props out. Nothing
//! here reads global state or dispatches anything.

use std::collections::HashMap;

use crate::models::{
    is_on_top_of_inbox, BadgeMap, ConversationIdKey, ConversationMeta, RouteSegment, TeamType,
};

/// Identifier suffix for participants known only by phone number.
pub const PHONE_SUFFIX: &str = "@phone";

/// Identifier suffix for participants known only by email address.
pub const EMAIL_SUFFIX: &str = "@email";

/// Which header presentation to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderVariant {
    /// Team channel header
    Channel,
    /// Direct conversation that includes a phone or email participant
    PhoneOrEmail,
    /// Direct conversation between usernames
    Username,
}

impl HeaderVariant {
    pub fn name(&self) -> &'static str {
        match self {
            HeaderVariant::Channel => "channel",
            HeaderVariant::PhoneOrEmail => "phone_or_email",
            HeaderVariant::Username => "username",
        }
    }
}

/// Everything a header presentation needs to render.
///
/// Recomputed on every read and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderProps {
    /// Unread count across other conversations (0 unless the inbox is on top)
    pub badge_number: u32,
    pub channel_name: Option<String>,
    /// Participant -> contact-book display name
    pub contact_names: HashMap<String, String>,
    pub info_panel_open: bool,
    pub muted: bool,
    /// Non-self participants; always empty for team conversations
    pub participants: Vec<String>,
    /// The conversation is still being created, or failed to be
    pub pending_waiting: bool,
    pub small_team: bool,
    pub team_name: Option<String>,
}

impl HeaderProps {
    /// Contact name for a participant, falling back to the raw identifier.
    pub fn display_name<'a>(&'a self, participant: &'a str) -> &'a str {
        self.contact_names
            .get(participant)
            .map(String::as_str)
            .unwrap_or(participant)
    }
}

/// True if the identifier is a phone-number or email placeholder.
pub fn is_phone_or_email(participant: &str) -> bool {
    participant.ends_with(PHONE_SUFFIX) || participant.ends_with(EMAIL_SUFFIX)
}

/// Choose the header presentation for a set of props.
///
/// First match wins: team name, then phone/email participants, then
/// plain usernames.
pub fn select_variant(props: &HeaderProps) -> HeaderVariant {
    if props.team_name.is_some() {
        return HeaderVariant::Channel;
    }
    if props.participants.iter().any(|p| is_phone_or_email(p)) {
        return HeaderVariant::PhoneOrEmail;
    }
    HeaderVariant::Username
}

/// Sum of unread counts for every conversation except `current`.
///
/// Only meaningful while the inbox list is visible; zero otherwise.
pub fn badge_total(
    badge_map: &BadgeMap,
    visible_path: &[RouteSegment],
    current: &ConversationIdKey,
) -> u32 {
    if !is_on_top_of_inbox(visible_path) {
        return 0;
    }
    badge_map
        .iter()
        .filter(|(id, _)| *id != current)
        .fold(0u32, |total, (_, count)| total.saturating_add(*count))
}

/// Project conversation state into header props.
pub fn compute_header_props(
    meta: &ConversationMeta,
    badge_map: &BadgeMap,
    visible_path: &[RouteSegment],
    conversation_id: &ConversationIdKey,
    info_panel_open: bool,
) -> HeaderProps {
    let team_name = meta.team_name().map(str::to_owned);
    let participants = if team_name.is_some() {
        Vec::new()
    } else {
        meta.name_participants.clone()
    };

    HeaderProps {
        badge_number: badge_total(badge_map, visible_path, conversation_id),
        channel_name: meta.channel_name().map(str::to_owned),
        contact_names: meta.participant_to_contact_name.clone(),
        info_panel_open,
        muted: meta.is_muted,
        participants,
        pending_waiting: conversation_id.is_pending(),
        small_team: meta.team_type != TeamType::Big,
        team_name,
    }
}
