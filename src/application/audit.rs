use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::domain::AuditRecord;
use crate::ports::{AuditSink, ConfigChannel, DocumentSource};

/// Periodic audit logger.
///
/// Each cycle sleeps for the configured interval, fetches the latest
/// document, and appends exactly one record. The interval is re-read at the
/// start of every cycle, never mid-sleep. Shutdown is observed only between
/// cycles: once a cycle starts its fetch, the append runs to completion; a
/// cycle still sleeping is dropped without a record.
pub struct AuditLogger {
    config: Arc<dyn ConfigChannel>,
    source: Arc<dyn DocumentSource>,
    sink: Arc<dyn AuditSink>,
}

impl AuditLogger {
    pub fn new(
        config: Arc<dyn ConfigChannel>,
        source: Arc<dyn DocumentSource>,
        sink: Arc<dyn AuditSink>,
    ) -> Self {
        Self {
            config,
            source,
            sink,
        }
    }

    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        info!("audit logger started");

        loop {
            let interval = Duration::from_secs(self.config.interval_secs());

            tokio::select! {
                _ = tokio::time::sleep(interval) => self.log_cycle().await,
                _ = shutdown.changed() => {
                    info!("audit logger stopping");
                    break;
                }
            }
        }
    }

    async fn log_cycle(&self) {
        let telemetry = match self.source.latest().await {
            Ok(document) => Some(document),
            Err(e) => {
                warn!("telemetry document unavailable: {}", e);
                None
            }
        };

        let record = AuditRecord::now(telemetry);
        if let Err(e) = self.sink.append(&record).await {
            warn!("failed to append audit record: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::adapters::store::RuntimeConfig;
    use crate::domain::TelemetryDocument;

    struct FixedSource {
        available: bool,
    }

    #[async_trait]
    impl DocumentSource for FixedSource {
        async fn latest(
            &self,
        ) -> Result<TelemetryDocument, Box<dyn std::error::Error + Send + Sync>> {
            if self.available {
                Ok(TelemetryDocument::Series(Vec::new()))
            } else {
                Err("provider unreachable".into())
            }
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        records: Mutex<Vec<AuditRecord>>,
    }

    impl RecordingSink {
        fn len(&self) -> usize {
            self.records.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl AuditSink for RecordingSink {
        async fn append(
            &self,
            record: &AuditRecord,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    struct Harness {
        config: Arc<RuntimeConfig>,
        sink: Arc<RecordingSink>,
        shutdown: watch::Sender<bool>,
        handle: tokio::task::JoinHandle<()>,
    }

    fn start_logger(available: bool) -> Harness {
        let config = Arc::new(RuntimeConfig::new());
        let sink = Arc::new(RecordingSink::default());
        let (shutdown, rx) = watch::channel(false);

        let logger = AuditLogger::new(
            Arc::clone(&config) as Arc<dyn ConfigChannel>,
            Arc::new(FixedSource { available }),
            Arc::clone(&sink) as Arc<dyn AuditSink>,
        );
        let handle = tokio::spawn(logger.run(rx));

        Harness {
            config,
            sink,
            shutdown,
            handle,
        }
    }

    /// Let the logger task run until it parks on its next sleep.
    async fn settle() {
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn appends_exactly_one_record_per_interval() {
        let harness = start_logger(true);
        settle().await;

        for cycle in 1..=3u64 {
            tokio::time::advance(Duration::from_secs(5)).await;
            settle().await;
            assert_eq!(harness.sink.len(), cycle as usize);
        }

        harness.shutdown.send(true).unwrap();
        harness.handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn interval_change_applies_at_the_next_cycle_boundary() {
        let harness = start_logger(true);
        settle().await;

        // Shorten the interval while the first 5s sleep is pending.
        harness.config.set_interval_secs(1).unwrap();

        tokio::time::advance(Duration::from_secs(1)).await;
        settle().await;
        assert_eq!(harness.sink.len(), 0, "change must not apply mid-sleep");

        tokio::time::advance(Duration::from_secs(4)).await;
        settle().await;
        assert_eq!(harness.sink.len(), 1);

        tokio::time::advance(Duration::from_secs(1)).await;
        settle().await;
        assert_eq!(harness.sink.len(), 2, "next cycle runs on the new interval");

        harness.shutdown.send(true).unwrap();
        harness.handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn unavailable_provider_still_appends_a_null_record() {
        let harness = start_logger(false);
        settle().await;

        tokio::time::advance(Duration::from_secs(5)).await;
        settle().await;

        assert_eq!(harness.sink.len(), 1);
        let records = harness.sink.records.lock().unwrap();
        assert!(records[0].telemetry.is_none());
        drop(records);

        harness.shutdown.send(true).unwrap();
        harness.handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_mid_sleep_exits_without_a_partial_record() {
        let harness = start_logger(true);
        settle().await;

        tokio::time::advance(Duration::from_secs(2)).await;
        settle().await;

        harness.shutdown.send(true).unwrap();
        harness.handle.await.unwrap();

        // The interrupted cycle is dropped; nothing half-written appears.
        assert_eq!(harness.sink.len(), 0);
    }
}
