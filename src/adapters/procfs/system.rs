use std::fs;

use async_trait::async_trait;

use crate::ports::{MemoryInfo, SystemSource};

use super::parser;
use super::ProcfsConfig;

/// System source implementation using procfs
pub struct ProcfsSystemSource {
    config: ProcfsConfig,
}

impl ProcfsSystemSource {
    pub fn new(config: ProcfsConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl SystemSource for ProcfsSystemSource {
    async fn context_switches(&self) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
        let stat_path = self.config.proc_path.join("stat");
        let stat_content = fs::read_to_string(&stat_path)?;
        Ok(parser::parse_context_switches(&stat_content)?)
    }

    async fn memory(&self) -> Result<MemoryInfo, Box<dyn std::error::Error + Send + Sync>> {
        let meminfo_path = self.config.proc_path.join("meminfo");
        let meminfo_content = fs::read_to_string(&meminfo_path)?;
        let mem = parser::parse_meminfo(&meminfo_content)?;

        Ok(MemoryInfo {
            free_mb: mem.free_mb,
            total_mb: mem.total_mb,
        })
    }

    async fn uptime_ticks(&self) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
        let uptime_path = self.config.proc_path.join("uptime");
        let uptime_content = fs::read_to_string(&uptime_path)?;
        Ok(parser::parse_uptime_ticks(&uptime_content)?)
    }
}
