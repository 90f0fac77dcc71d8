use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::adapters::store::{RuntimeConfig, SnapshotHistory};

/// Interrupt counter shared between an interrupt-like writer and the sampler.
///
/// Only atomic fetch-add and load are exposed; there is no plain arithmetic
/// path that could lose increments under concurrent delivery.
#[derive(Debug, Default)]
pub struct IrqCounter(AtomicU64);

impl IrqCounter {
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    /// Record one delivered interrupt.
    pub fn record_one(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn value(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Process-wide mutable telemetry state, owned once and passed by reference.
///
/// The history mutex spans the whole sample + insert + read-out sequence in
/// the service, which is what keeps concurrent queries totally ordered.
pub struct TelemetryContext {
    pub config: Arc<RuntimeConfig>,
    pub irq: IrqCounter,
    pub history: Mutex<SnapshotHistory>,
}

impl TelemetryContext {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            config: Arc::new(RuntimeConfig::new()),
            irq: IrqCounter::new(),
            history: Mutex::new(SnapshotHistory::new(history_capacity)),
        }
    }

    pub fn with_default_capacity() -> Self {
        Self::new(crate::adapters::store::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn concurrent_increments_are_never_lost() {
        let counter = Arc::new(IrqCounter::new());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let counter = Arc::clone(&counter);
            handles.push(thread::spawn(move || {
                for _ in 0..10_000 {
                    counter.record_one();
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(counter.value(), 80_000);
    }

    #[test]
    fn counter_is_non_decreasing_under_interleaved_reads() {
        let counter = Arc::new(IrqCounter::new());
        let writer = {
            let counter = Arc::clone(&counter);
            thread::spawn(move || {
                for _ in 0..50_000 {
                    counter.record_one();
                }
            })
        };

        let mut last = 0;
        for _ in 0..10_000 {
            let seen = counter.value();
            assert!(seen >= last);
            last = seen;
        }

        writer.join().unwrap();
        assert_eq!(counter.value(), 50_000);
    }
}
