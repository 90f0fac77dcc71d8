use serde::{Deserialize, Serialize};

use super::Snapshot;

/// Message carried by the error-shaped document while telemetry is disabled.
pub const DISABLED_MESSAGE: &str = "Telemetry disabled";

/// The snapshot document exposed to consumers.
///
/// Serializes either to `{"error": "Telemetry disabled"}` or to a JSON array
/// of snapshots ordered oldest to newest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TelemetryDocument {
    Disabled { error: String },
    Series(Vec<Snapshot>),
}

impl TelemetryDocument {
    pub fn disabled() -> Self {
        Self::Disabled {
            error: DISABLED_MESSAGE.to_string(),
        }
    }

    /// The newest snapshot in the document, if it has one.
    pub fn latest(&self) -> Option<&Snapshot> {
        match self {
            Self::Series(snapshots) => snapshots.last(),
            Self::Disabled { .. } => None,
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled { .. })
    }
}
