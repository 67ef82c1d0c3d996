//! Conversation header presentations.
//!
//! One renderer per [`HeaderVariant`]. Each takes the full [`HeaderProps`]
//! and produces the title [`Line`]; [`render`] adds the shared badge and
//! status decorations and writes the result into the frame.
//!
//! # Layout
//! ```text
//! (3) alice, bob                                 muted  [i]
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::header::{HeaderProps, HeaderVariant, HeaderView, EMAIL_SUFFIX, PHONE_SUFFIX};

use super::theme::{COLOR_ACCENT, COLOR_BADGE, COLOR_DIM, COLOR_MUTED, COLOR_TEAM, COLOR_TITLE};

/// Label shown while a conversation is still being created.
const PENDING_LABEL: &str = "Creating conversation...";

/// Ellipsis appended to truncated titles.
const ELLIPSIS: &str = "\u{2026}";

// ============================================================================
// Public API
// ============================================================================

/// Render a resolved header into `area` (first row only).
pub fn render(frame: &mut Frame, area: Rect, view: &HeaderView) {
    render_to_buffer(frame.buffer_mut(), area, view);
}

/// Render into a buffer directly.
pub fn render_to_buffer(buf: &mut Buffer, area: Rect, view: &HeaderView) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let status = status_line(&view.props);
    let status_width = status.width() as u16;
    let title_width = if status_width > 0 && status_width + 2 < area.width {
        area.width - status_width - 1
    } else {
        area.width
    };

    let mut spans = badge_spans(view.props.badge_number);
    spans.extend(header_line(view.variant, &view.props).spans);
    let title = truncate_line(Line::from(spans), title_width as usize);
    buf.set_line(area.x, area.y, &title, title_width);

    if title_width < area.width {
        let x = area.x + area.width - status_width;
        buf.set_line(x, area.y, &status, status_width);
    }
}

/// Title line for a variant.
pub fn header_line(variant: HeaderVariant, props: &HeaderProps) -> Line<'static> {
    match variant {
        HeaderVariant::Channel => channel_line(props),
        HeaderVariant::PhoneOrEmail => phone_or_email_line(props),
        HeaderVariant::Username => username_line(props),
    }
}

/// Team channel: `team#channel` for big teams, just the team otherwise.
pub fn channel_line(props: &HeaderProps) -> Line<'static> {
    let team = props.team_name.clone().unwrap_or_default();
    match (&props.channel_name, props.small_team) {
        (Some(channel), false) => Line::from(vec![
            Span::styled(team, Style::default().fg(COLOR_TEAM)),
            Span::styled(
                format!("#{}", channel),
                Style::default().fg(COLOR_TITLE).add_modifier(Modifier::BOLD),
            ),
        ]),
        _ => Line::from(Span::styled(
            team,
            Style::default().fg(COLOR_TITLE).add_modifier(Modifier::BOLD),
        )),
    }
}

/// Direct conversation between usernames.
pub fn username_line(props: &HeaderProps) -> Line<'static> {
    if props.participants.is_empty() {
        return pending_or_empty(props);
    }
    let names: Vec<&str> = props
        .participants
        .iter()
        .map(|p| props.display_name(p))
        .collect();
    Line::from(Span::styled(
        names.join(", "),
        Style::default().fg(COLOR_TITLE).add_modifier(Modifier::BOLD),
    ))
}

/// Direct conversation with phone-number or email participants.
///
/// Contact names win; otherwise the bare number or address is shown.
pub fn phone_or_email_line(props: &HeaderProps) -> Line<'static> {
    if props.participants.is_empty() {
        return pending_or_empty(props);
    }
    let names: Vec<String> = props
        .participants
        .iter()
        .map(|p| match props.contact_names.get(p) {
            Some(name) => name.clone(),
            None => strip_contact_suffix(p).to_string(),
        })
        .collect();
    Line::from(Span::styled(
        names.join(", "),
        Style::default().fg(COLOR_TITLE).add_modifier(Modifier::BOLD),
    ))
}

/// Remove a trailing `@phone` / `@email` marker.
pub fn strip_contact_suffix(participant: &str) -> &str {
    participant
        .strip_suffix(PHONE_SUFFIX)
        .or_else(|| participant.strip_suffix(EMAIL_SUFFIX))
        .unwrap_or(participant)
}

// ============================================================================
// Helpers
// ============================================================================

fn pending_or_empty(props: &HeaderProps) -> Line<'static> {
    if props.pending_waiting {
        Line::from(Span::styled(PENDING_LABEL, Style::default().fg(COLOR_DIM)))
    } else {
        Line::default()
    }
}

fn badge_spans(badge_number: u32) -> Vec<Span<'static>> {
    if badge_number == 0 {
        return Vec::new();
    }
    vec![
        Span::styled(
            format!("({})", badge_number),
            Style::default().fg(COLOR_BADGE).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ]
}

/// Right-hand indicators: mute state and the info-panel toggle.
fn status_line(props: &HeaderProps) -> Line<'static> {
    let mut spans = Vec::new();
    if props.muted {
        spans.push(Span::styled("muted", Style::default().fg(COLOR_MUTED)));
        spans.push(Span::raw("  "));
    }
    let info_color = if props.info_panel_open {
        COLOR_ACCENT
    } else {
        COLOR_DIM
    };
    spans.push(Span::styled("[i]", Style::default().fg(info_color)));
    Line::from(spans)
}

/// Cut a line to `max_width` columns, ending in an ellipsis if shortened.
fn truncate_line(line: Line<'static>, max_width: usize) -> Line<'static> {
    if line.width() <= max_width {
        return line;
    }
    let budget = max_width.saturating_sub(ELLIPSIS.width());
    let mut used = 0;
    let mut spans = Vec::new();
    'spans: for span in line.spans {
        let mut content = String::new();
        for ch in span.content.chars() {
            let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
            if used + w > budget {
                // Nothing after the first overflowing character is drawn.
                if !content.is_empty() {
                    spans.push(Span::styled(content, span.style));
                }
                break 'spans;
            }
            used += w;
            content.push(ch);
        }
        spans.push(Span::styled(content, span.style));
    }
    if max_width > 0 {
        spans.push(Span::styled(ELLIPSIS, Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::RecordingDispatcher;
    use crate::header::HeaderCallbacks;
    use crate::models::ConversationIdKey;
    use std::sync::Arc;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn view(props: HeaderProps, variant: HeaderVariant) -> HeaderView {
        HeaderView {
            props,
            variant,
            callbacks: HeaderCallbacks::new(
                ConversationIdKey::new("c1"),
                Arc::new(RecordingDispatcher::new()),
                Arc::new(|| {}),
            ),
        }
    }

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_big_team_channel() {
        let props = HeaderProps {
            team_name: Some("eng".to_string()),
            channel_name: Some("general".to_string()),
            small_team: false,
            ..Default::default()
        };
        assert_eq!(line_text(&channel_line(&props)), "eng#general");
    }

    #[test]
    fn test_small_team_shows_team_only() {
        let props = HeaderProps {
            team_name: Some("eng".to_string()),
            channel_name: Some("general".to_string()),
            small_team: true,
            ..Default::default()
        };
        assert_eq!(line_text(&channel_line(&props)), "eng");
    }

    #[test]
    fn test_username_uses_contact_names() {
        let mut props = HeaderProps {
            participants: vec!["alice".to_string(), "bob".to_string()],
            ..Default::default()
        };
        props
            .contact_names
            .insert("bob".to_string(), "Bobby".to_string());
        assert_eq!(line_text(&username_line(&props)), "alice, Bobby");
    }

    #[test]
    fn test_phone_or_email_strips_suffix() {
        let mut props = HeaderProps {
            participants: vec![
                "15555550100@phone".to_string(),
                "dan@example.com@email".to_string(),
                "erin@email".to_string(),
            ],
            ..Default::default()
        };
        props
            .contact_names
            .insert("erin@email".to_string(), "Erin".to_string());
        assert_eq!(
            line_text(&phone_or_email_line(&props)),
            "15555550100, dan@example.com, Erin"
        );
    }

    #[test]
    fn test_pending_label() {
        let props = HeaderProps {
            pending_waiting: true,
            ..Default::default()
        };
        assert_eq!(line_text(&username_line(&props)), PENDING_LABEL);
        assert_eq!(line_text(&username_line(&HeaderProps::default())), "");
    }

    #[test]
    fn test_render_badge_and_status() {
        let props = HeaderProps {
            participants: vec!["alice".to_string()],
            badge_number: 3,
            muted: true,
            ..Default::default()
        };
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        render_to_buffer(&mut buf, area, &view(props, HeaderVariant::Username));

        let text = buffer_text(&buf);
        assert!(text.starts_with("(3) alice"), "got {:?}", text);
        assert!(text.trim_end().ends_with("muted  [i]"), "got {:?}", text);
    }

    #[test]
    fn test_render_without_badge() {
        let props = HeaderProps {
            participants: vec!["alice".to_string()],
            ..Default::default()
        };
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        render_to_buffer(&mut buf, area, &view(props, HeaderVariant::Username));
        assert!(buffer_text(&buf).starts_with("alice"));
    }

    #[test]
    fn test_render_truncates_long_titles() {
        let props = HeaderProps {
            participants: (0..20).map(|i| format!("user{}", i)).collect(),
            ..Default::default()
        };
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        render_to_buffer(&mut buf, area, &view(props, HeaderVariant::Username));

        let text = buffer_text(&buf);
        assert!(text.contains(ELLIPSIS), "got {:?}", text);
        assert!(text.ends_with("[i]"), "got {:?}", text);
    }

    #[test]
    fn test_truncate_stops_at_wide_char() {
        let props = HeaderProps {
            team_name: Some("ab\u{6f22}".to_string()),
            channel_name: Some("cd".to_string()),
            small_team: false,
            ..Default::default()
        };
        let line = channel_line(&props);
        assert_eq!(line_text(&line), "ab\u{6f22}#cd");
        assert_eq!(line_text(&truncate_line(line, 4)), "ab\u{2026}");
    }

    #[test]
    fn test_truncate_keeps_fitting_prefix_across_spans() {
        let props = HeaderProps {
            team_name: Some("eng".to_string()),
            channel_name: Some("general".to_string()),
            small_team: false,
            ..Default::default()
        };
        assert_eq!(
            line_text(&truncate_line(channel_line(&props), 7)),
            "eng#ge\u{2026}"
        );
    }

    #[test]
    fn test_render_zero_area_is_noop() {
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        render_to_buffer(
            &mut buf,
            area,
            &view(HeaderProps::default(), HeaderVariant::Username),
        );
    }
}
