use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::{EventError, EventKind};

/// Severity assigned to each event kind.
///
/// Loaded from a JSON object keyed by kind label, e.g.
/// `{"Stalled": "Critical", "LagDuration": "Major", ...}`. All four kinds
/// must have an entry; the table is read once at startup and never
/// invalidated.
#[derive(Debug, Clone, Deserialize)]
pub struct SeverityMap {
    #[serde(rename = "Stalled")]
    stalled: String,
    #[serde(rename = "LagDuration")]
    lag_duration: String,
    #[serde(rename = "ElapsedReplicationDuration")]
    elapsed_replication_duration: String,
    #[serde(rename = "DisconnectFromService")]
    disconnect_from_service: String,
}

impl Default for SeverityMap {
    fn default() -> Self {
        Self {
            stalled: "Critical".to_string(),
            lag_duration: "Major".to_string(),
            elapsed_replication_duration: "Major".to_string(),
            disconnect_from_service: "Major".to_string(),
        }
    }
}

impl SeverityMap {
    /// Parse a severity table from its JSON text.
    pub fn from_json(text: &str) -> Result<Self, EventError> {
        serde_json::from_str(text)
            .map_err(|e| EventError::Config(format!("invalid severity table: {e}")))
    }

    /// Load the severity table from `path`.
    ///
    /// Falls back to the built-in defaults when the file does not exist; a
    /// file that exists but cannot be parsed or is missing a kind is an
    /// error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EventError> {
        let path = path.as_ref();
        if !path.exists() {
            info!(
                path = %path.display(),
                "Severity file not found, using built-in defaults"
            );
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|e| {
            EventError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let map = Self::from_json(&text)?;
        info!(path = %path.display(), "Loaded severity table");
        Ok(map)
    }

    /// Severity for an event kind.
    pub fn severity(&self, kind: EventKind) -> &str {
        match kind {
            EventKind::Stalled => &self.stalled,
            EventKind::LagDuration => &self.lag_duration,
            EventKind::ElapsedReplicationDuration => &self.elapsed_replication_duration,
            EventKind::DisconnectFromService => &self.disconnect_from_service,
        }
    }
}

/// Log-line prefix for a severity value.
///
/// `Critical` marks the line critical, `Major` a warning, and any other
/// value is informational.
pub fn level_prefix(severity: &str) -> &'static str {
    match severity {
        "Critical" => "CRITICAL",
        "Major" => "WARN",
        _ => "INFO",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_a_full_table() {
        let map = SeverityMap::from_json(
            r#"{
                "Stalled": "Critical",
                "LagDuration": "Major",
                "ElapsedReplicationDuration": "Minor",
                "DisconnectFromService": "Warning"
            }"#,
        )
        .unwrap();
        assert_eq!(map.severity(EventKind::Stalled), "Critical");
        assert_eq!(map.severity(EventKind::ElapsedReplicationDuration), "Minor");
        assert_eq!(map.severity(EventKind::DisconnectFromService), "Warning");
    }

    #[test]
    fn test_rejects_a_table_missing_a_kind() {
        let err = SeverityMap::from_json(r#"{ "Stalled": "Critical" }"#).unwrap_err();
        match err {
            EventError::Config(msg) => assert!(msg.contains("LagDuration"), "{msg}"),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults_cover_all_kinds() {
        let map = SeverityMap::default();
        for kind in EventKind::ALL {
            assert!(!map.severity(kind).is_empty());
        }
        assert_eq!(map.severity(EventKind::Stalled), "Critical");
    }

    #[test]
    fn test_level_prefix_buckets_severities() {
        assert_eq!(level_prefix("Critical"), "CRITICAL");
        assert_eq!(level_prefix("Major"), "WARN");
        assert_eq!(level_prefix("Minor"), "INFO");
        assert_eq!(level_prefix("Warning"), "INFO");
    }
}
