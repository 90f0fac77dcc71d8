use crate::domain::Snapshot;

/// Number of snapshots retained by default.
pub const DEFAULT_CAPACITY: usize = 10;

/// Fixed-capacity ring buffer of snapshots.
///
/// A fixed arena plus a write cursor and a saturating size. Once full, every
/// insert overwrites the oldest slot; chronological order is reconstructed on
/// read-out, so the internal layout never leaks to callers. Mutation happens
/// only through `insert`, under the service's critical section.
pub struct SnapshotHistory {
    slots: Vec<Option<Snapshot>>,
    head: usize,
    size: usize,
}

impl SnapshotHistory {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "history capacity must be positive");
        Self {
            slots: vec![None; capacity],
            head: 0,
            size: 0,
        }
    }

    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Store a snapshot, evicting the oldest one when full. Never fails.
    pub fn insert(&mut self, snapshot: Snapshot) {
        let capacity = self.slots.len();
        self.slots[self.head] = Some(snapshot);
        self.head = (self.head + 1) % capacity;
        if self.size < capacity {
            self.size += 1;
        }
    }

    /// All stored snapshots, oldest to newest.
    pub fn snapshots_in_order(&self) -> Vec<Snapshot> {
        let capacity = self.slots.len();
        // When full, the write cursor points at the oldest slot; before that,
        // slot 0 is the oldest.
        let oldest = if self.size == capacity { self.head } else { 0 };

        (0..self.size)
            .filter_map(|i| self.slots[(oldest + i) % capacity])
            .collect()
    }
}
