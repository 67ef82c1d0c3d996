//! Error types for the configuration and snapshot layers.
//!
//! The header computation itself has no failure path: unknown conversations
//! degrade to empty metadata. Errors only arise at the edges, when loading
//! feature flags or a store snapshot from disk.

mod config;
mod snapshot;

pub use config::ConfigError;
pub use snapshot::SnapshotError;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::path::PathBuf;

    #[test]
    fn test_unknown_flag_message() {
        let err = ConfigError::UnknownFlag("teleport".to_string());
        assert_eq!(err.to_string(), "Unknown feature flag: teleport");
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SnapshotError::Parse {
            path: PathBuf::from("/tmp/snap.json"),
            source,
        };
        assert!(err.to_string().contains("snap.json"));
        assert!(err.source().is_some());
    }
}
