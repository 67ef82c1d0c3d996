//! Process-wide feature flags.
//!
//! Flags resolve once per process, lowest precedence first:
//!
//! 1. Built-in defaults ([`FeatureFlags::default`])
//! 2. `~/.convo/features.json` (camelCase keys, missing keys keep the default)
//! 3. `CONVO_FEATURES`, a comma-separated list of flag names to switch on
//!
//! Naming `admin` in `CONVO_FEATURES` also switches on the admin-only flags
//! (`chatIndexProfilingEnabled`, `dbCleanEnabled`, `lagRadar`, `moveOrCopy`).

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Directory under the home directory holding client config.
const CONFIG_DIR: &str = ".convo";

/// Feature flag override file name.
const FLAGS_FILE: &str = "features.json";

/// Environment variable listing flags to switch on.
pub const FEATURES_ENV: &str = "CONVO_FEATURES";

/// Every flag name, in declaration order.
pub const FLAG_NAMES: [&str; 17] = [
    "admin",
    "airdrop",
    "audioAttachments",
    "chatIndexProfilingEnabled",
    "conflictResolution",
    "cryptoTab",
    "dbCleanEnabled",
    "fastAccountSwitch",
    "foldersInProfileTab",
    "lagRadar",
    "moveOrCopy",
    "newTeamBuildingForChatAllowMakeTeam",
    "outOfDateBanner",
    "plansEnabled",
    "proofProviders",
    "stellarExternalPartners",
    "userBlocking",
];

static GLOBAL: OnceCell<FeatureFlags> = OnceCell::new();

/// Named boolean toggles read as configuration across the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct FeatureFlags {
    pub admin: bool,
    pub airdrop: bool,
    pub audio_attachments: bool,
    pub chat_index_profiling_enabled: bool,
    pub conflict_resolution: bool,
    pub crypto_tab: bool,
    pub db_clean_enabled: bool,
    pub fast_account_switch: bool,
    pub folders_in_profile_tab: bool,
    pub lag_radar: bool,
    pub move_or_copy: bool,
    pub new_team_building_for_chat_allow_make_team: bool,
    pub out_of_date_banner: bool,
    pub plans_enabled: bool,
    pub proof_providers: bool,
    pub stellar_external_partners: bool,
    pub user_blocking: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            admin: false,
            airdrop: true,
            audio_attachments: true,
            chat_index_profiling_enabled: false,
            conflict_resolution: false,
            crypto_tab: true,
            db_clean_enabled: false,
            fast_account_switch: true,
            folders_in_profile_tab: false,
            lag_radar: false,
            move_or_copy: false,
            new_team_building_for_chat_allow_make_team: false,
            out_of_date_banner: false,
            plans_enabled: false,
            proof_providers: true,
            stellar_external_partners: false,
            user_blocking: true,
        }
    }
}

impl FeatureFlags {
    /// The process-wide flags, resolved on first use.
    ///
    /// Resolution errors fall back to the defaults with a warning.
    pub fn global() -> &'static FeatureFlags {
        GLOBAL.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Falling back to default feature flags: {}", e);
                Self::default()
            })
        })
    }

    /// Resolve flags from the default file location and `CONVO_FEATURES`.
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var(FEATURES_ENV).ok();
        Self::load_from(default_flags_path().as_deref(), env.as_deref())
    }

    /// Resolve flags from an optional override file and env value.
    ///
    /// A missing file is not an error.
    pub fn load_from(path: Option<&Path>, env: Option<&str>) -> Result<Self, ConfigError> {
        let mut flags = match path {
            Some(path) if path.exists() => Self::from_file(path)?,
            _ => Self::default(),
        };
        if let Some(env) = env {
            flags.apply_env(env);
        }
        Ok(flags)
    }

    /// Read an override file; keys it omits keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Switch on every flag named in a comma-separated list.
    ///
    /// Blank entries are skipped; unknown names are logged and ignored.
    pub fn apply_env(&mut self, value: &str) {
        for name in value.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            if let Err(e) = self.set(name, true) {
                tracing::warn!("{}: ignoring {} entry", e, FEATURES_ENV);
                continue;
            }
            if name == "admin" {
                self.enable_admin_flags();
            }
        }
    }

    /// Switch on the flags gated behind `admin`.
    fn enable_admin_flags(&mut self) {
        self.chat_index_profiling_enabled = true;
        self.db_clean_enabled = true;
        self.lag_radar = true;
        self.move_or_copy = true;
    }

    /// Look a flag up by its camelCase name.
    pub fn is_enabled(&self, name: &str) -> Option<bool> {
        self.slot(name).copied()
    }

    /// Set a flag by its camelCase name.
    pub fn set(&mut self, name: &str, value: bool) -> Result<(), ConfigError> {
        let slot = self
            .slot_mut(name)
            .ok_or_else(|| ConfigError::UnknownFlag(name.to_string()))?;
        *slot = value;
        Ok(())
    }

    /// Every flag name paired with its value, in declaration order.
    pub fn entries(&self) -> Vec<(&'static str, bool)> {
        FLAG_NAMES
            .iter()
            .map(|name| (*name, self.is_enabled(name).unwrap_or(false)))
            .collect()
    }

    /// Names of every flag that is switched on.
    pub fn enabled(&self) -> Vec<&'static str> {
        FLAG_NAMES
            .iter()
            .copied()
            .filter(|name| self.is_enabled(name) == Some(true))
            .collect()
    }

    fn slot(&self, name: &str) -> Option<&bool> {
        let slot = match name {
            "admin" => &self.admin,
            "airdrop" => &self.airdrop,
            "audioAttachments" => &self.audio_attachments,
            "chatIndexProfilingEnabled" => &self.chat_index_profiling_enabled,
            "conflictResolution" => &self.conflict_resolution,
            "cryptoTab" => &self.crypto_tab,
            "dbCleanEnabled" => &self.db_clean_enabled,
            "fastAccountSwitch" => &self.fast_account_switch,
            "foldersInProfileTab" => &self.folders_in_profile_tab,
            "lagRadar" => &self.lag_radar,
            "moveOrCopy" => &self.move_or_copy,
            "newTeamBuildingForChatAllowMakeTeam" => {
                &self.new_team_building_for_chat_allow_make_team
            }
            "outOfDateBanner" => &self.out_of_date_banner,
            "plansEnabled" => &self.plans_enabled,
            "proofProviders" => &self.proof_providers,
            "stellarExternalPartners" => &self.stellar_external_partners,
            "userBlocking" => &self.user_blocking,
            _ => return None,
        };
        Some(slot)
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut bool> {
        let slot = match name {
            "admin" => &mut self.admin,
            "airdrop" => &mut self.airdrop,
            "audioAttachments" => &mut self.audio_attachments,
            "chatIndexProfilingEnabled" => &mut self.chat_index_profiling_enabled,
            "conflictResolution" => &mut self.conflict_resolution,
            "cryptoTab" => &mut self.crypto_tab,
            "dbCleanEnabled" => &mut self.db_clean_enabled,
            "fastAccountSwitch" => &mut self.fast_account_switch,
            "foldersInProfileTab" => &mut self.folders_in_profile_tab,
            "lagRadar" => &mut self.lag_radar,
            "moveOrCopy" => &mut self.move_or_copy,
            "newTeamBuildingForChatAllowMakeTeam" => {
                &mut self.new_team_building_for_chat_allow_make_team
            }
            "outOfDateBanner" => &mut self.out_of_date_banner,
            "plansEnabled" => &mut self.plans_enabled,
            "proofProviders" => &mut self.proof_providers,
            "stellarExternalPartners" => &mut self.stellar_external_partners,
            "userBlocking" => &mut self.user_blocking,
            _ => return None,
        };
        Some(slot)
    }
}

/// `~/.convo/features.json`, or `None` without a home directory.
pub fn default_flags_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(FLAGS_FILE))
}
