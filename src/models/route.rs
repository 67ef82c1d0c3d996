//! Navigation state as exposed by the router.

use serde::{Deserialize, Serialize};

/// Top-level tab route names.
pub mod tabs {
    pub const PEOPLE_TAB: &str = "tabs.peopleTab";
    pub const CHAT_TAB: &str = "tabs.chatTab";
    pub const CRYPTO_TAB: &str = "tabs.cryptoTab";
    pub const DEVICES_TAB: &str = "tabs.devicesTab";
    pub const FOLDERS_TAB: &str = "tabs.foldersTab";
    pub const PROFILE_TAB: &str = "tabs.profileTab";
    pub const SETTINGS_TAB: &str = "tabs.settingsTab";
    pub const TEAMS_TAB: &str = "tabs.teamsTab";
    pub const WALLETS_TAB: &str = "tabs.walletsTab";
}

/// One level of the visible route stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSegment {
    #[serde(default)]
    pub route_name: Option<String>,
}

impl RouteSegment {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            route_name: Some(name.into()),
        }
    }

    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn is(&self, name: &str) -> bool {
        self.route_name.as_deref() == Some(name)
    }
}

/// Route segments from the root navigator down to the visible screen.
pub type VisiblePath = Vec<RouteSegment>;

/// Depth of the visible path while the inbox list is on top of the chat tab.
const INBOX_PATH_DEPTH: usize = 4;

/// Index of the tab segment within the visible path.
const TAB_SEGMENT_INDEX: usize = 2;

/// True when the chat inbox is the top-most screen.
///
/// The visible path is then exactly root, app, tab and inbox.
pub fn is_on_top_of_inbox(path: &[RouteSegment]) -> bool {
    path.len() == INBOX_PATH_DEPTH && path[TAB_SEGMENT_INDEX].is(tabs::CHAT_TAB)
}

/// Build the visible path for the chat inbox.
pub fn inbox_path() -> VisiblePath {
    vec![
        RouteSegment::unnamed(),
        RouteSegment::named("loggedIn"),
        RouteSegment::named(tabs::CHAT_TAB),
        RouteSegment::named("chatRoot"),
    ]
}
