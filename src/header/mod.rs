//! Conversation header selection.
//!
//! Two halves:
//!
//! - [`props`]: pure projection of conversation state into [`HeaderProps`]
//!   plus the [`HeaderVariant`] to render. No collaborators.
//! - [`container`]: [`HeaderContainer`] reads the store and router, runs the
//!   projection, and hands back a [`HeaderView`] whose callbacks dispatch
//!   [`HeaderAction`](crate::actions::HeaderAction)s.

pub mod container;
pub mod props;

pub use container::{HeaderCallbacks, HeaderContainer, HeaderView, InfoPanelToggle};
pub use props::{
    badge_total, compute_header_props, is_phone_or_email, select_variant, HeaderProps,
    HeaderVariant, EMAIL_SUFFIX, PHONE_SUFFIX,
};
