use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::TelemetryDocument;

/// One entry in the append-only audit log.
///
/// `telemetry` is `null` when the document provider was unavailable for the
/// cycle; the record is still appended so failures stay visible in the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub timestamp: String,
    pub telemetry: Option<TelemetryDocument>,
}

impl AuditRecord {
    pub fn new(at: DateTime<Local>, telemetry: Option<TelemetryDocument>) -> Self {
        Self {
            timestamp: at.format("%Y-%m-%d %H:%M:%S").to_string(),
            telemetry,
        }
    }

    pub fn now(telemetry: Option<TelemetryDocument>) -> Self {
        Self::new(Local::now(), telemetry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_local_timestamp() {
        let at = Local.with_ymd_and_hms(2026, 3, 9, 14, 5, 9).unwrap();
        let record = AuditRecord::new(at, None);
        assert_eq!(record.timestamp, "2026-03-09 14:05:09");
    }

    #[test]
    fn unavailable_provider_serializes_as_null() {
        let at = Local.with_ymd_and_hms(2026, 3, 9, 0, 0, 0).unwrap();
        let json = serde_json::to_string(&AuditRecord::new(at, None)).unwrap();
        assert!(json.contains("\"telemetry\":null"));
    }

    #[test]
    fn record_round_trips_with_document() {
        let record = AuditRecord::now(Some(TelemetryDocument::disabled()));
        let json = serde_json::to_string(&record).unwrap();
        let back: AuditRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
