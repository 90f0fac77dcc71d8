use serde::{Deserialize, Serialize};

/// One timestamped sample of host metrics.
///
/// Field order is the wire order of the snapshot document; consumers on the
/// other side of the process boundary rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub uptime_jiffies: u64,
    pub context_switches: u64,
    pub irq_count: u64,
    #[serde(rename = "free_ram_MB")]
    pub free_ram_mb: u64,
    #[serde(rename = "total_ram_MB")]
    pub total_ram_mb: u64,
}

impl Snapshot {
    pub fn new(
        uptime_jiffies: u64,
        context_switches: u64,
        irq_count: u64,
        free_ram_mb: u64,
        total_ram_mb: u64,
    ) -> Self {
        Self {
            uptime_jiffies,
            context_switches,
            irq_count,
            free_ram_mb,
            total_ram_mb,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_key_order() {
        let snapshot = Snapshot::new(1000, 42, 7, 512, 2048);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(
            json,
            "{\"uptime_jiffies\":1000,\"context_switches\":42,\"irq_count\":7,\
             \"free_ram_MB\":512,\"total_ram_MB\":2048}"
        );
    }

    #[test]
    fn round_trips_through_json() {
        let snapshot = Snapshot::new(99, 1, 2, 3, 4);
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
