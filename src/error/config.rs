//! Feature-flag configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving feature flags.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The override file exists but could not be read.
    #[error("Failed to read feature flags from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The override file is not valid flag JSON.
    #[error("Invalid feature flags in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A flag name that is not one of the known toggles.
    #[error("Unknown feature flag: {0}")]
    UnknownFlag(String),
}
