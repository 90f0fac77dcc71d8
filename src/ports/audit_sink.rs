use async_trait::async_trait;

use crate::domain::AuditRecord;

/// Port for the append-only audit log.
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Append one record; records are never rewritten or removed
    async fn append(
        &self,
        record: &AuditRecord,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
