use async_trait::async_trait;

use crate::domain::TelemetryDocument;

/// Port for reading the latest snapshot document.
///
/// Implemented in-process by the telemetry service and across the process
/// boundary by the HTTP client adapter. Every read is also a sampling tick
/// when the service backs the source.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn latest(&self) -> Result<TelemetryDocument, Box<dyn std::error::Error + Send + Sync>>;
}
