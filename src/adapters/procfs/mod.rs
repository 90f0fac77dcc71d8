mod parser;
mod system;

use std::path::PathBuf;

pub use system::ProcfsSystemSource;

/// Configuration for the procfs root (useful for container mounts and tests)
#[derive(Debug, Clone)]
pub struct ProcfsConfig {
    pub proc_path: PathBuf,
}

impl ProcfsConfig {
    pub fn new(proc_path: impl Into<PathBuf>) -> Self {
        Self {
            proc_path: proc_path.into(),
        }
    }

    pub fn host() -> Self {
        Self {
            proc_path: PathBuf::from("/proc"),
        }
    }
}

impl Default for ProcfsConfig {
    fn default() -> Self {
        Self::host()
    }
}
