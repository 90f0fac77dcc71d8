use async_trait::async_trait;

/// Free and total RAM in megabytes, as reported by the memory collaborator.
#[derive(Debug, Clone, Copy)]
pub struct MemoryInfo {
    pub free_mb: u64,
    pub total_mb: u64,
}

/// Port for reading raw host counters.
#[async_trait]
pub trait SystemSource: Send + Sync {
    /// Total context switches since boot (monotonic, non-decreasing)
    async fn context_switches(&self) -> Result<u64, Box<dyn std::error::Error + Send + Sync>>;

    /// Free and total RAM in MB
    async fn memory(&self) -> Result<MemoryInfo, Box<dyn std::error::Error + Send + Sync>>;

    /// Host uptime in clock ticks
    async fn uptime_ticks(&self) -> Result<u64, Box<dyn std::error::Error + Send + Sync>>;
}
