//! Store snapshot loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a store snapshot from disk.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid snapshot {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
