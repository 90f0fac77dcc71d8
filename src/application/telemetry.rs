use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Snapshot, TelemetryDocument};
use crate::ports::{ConfigChannel, DocumentSource, SystemSource};

use super::TelemetryContext;

/// The read-side protocol over the telemetry history.
///
/// Reads are sampling ticks: every successful query samples once, inserts
/// into the history, and returns the full ordered series. Disabling
/// telemetry short-circuits before any sampling, so history growth stops
/// rather than merely being hidden.
pub struct TelemetryService {
    context: Arc<TelemetryContext>,
    source: Arc<dyn SystemSource>,
}

impl TelemetryService {
    pub fn new(context: Arc<TelemetryContext>, source: Arc<dyn SystemSource>) -> Self {
        Self { context, source }
    }

    pub fn context(&self) -> &Arc<TelemetryContext> {
        &self.context
    }

    /// Sample, record, and return the chronological snapshot series.
    pub async fn query(
        &self,
    ) -> Result<TelemetryDocument, Box<dyn std::error::Error + Send + Sync>> {
        if !self.context.config.enabled() {
            return Ok(TelemetryDocument::disabled());
        }

        // One critical section around sample + insert + read-out: concurrent
        // queries serialize here, so insertion order matches call order and
        // no reader observes a half-updated buffer.
        let mut history = self.context.history.lock().await;
        let snapshot = self.sample().await?;
        history.insert(snapshot);
        Ok(TelemetryDocument::Series(history.snapshots_in_order()))
    }

    async fn sample(&self) -> Result<Snapshot, Box<dyn std::error::Error + Send + Sync>> {
        let (uptime_jiffies, context_switches, memory) = tokio::try_join!(
            self.source.uptime_ticks(),
            self.source.context_switches(),
            self.source.memory(),
        )?;

        Ok(Snapshot::new(
            uptime_jiffies,
            context_switches,
            self.context.irq.value(),
            memory.free_mb,
            memory.total_mb,
        ))
    }
}

#[async_trait]
impl DocumentSource for TelemetryService {
    async fn latest(
        &self,
    ) -> Result<TelemetryDocument, Box<dyn std::error::Error + Send + Sync>> {
        self.query().await
    }
}
