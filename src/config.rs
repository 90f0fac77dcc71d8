use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub exporter_port: u16,
    pub audit_log: PathBuf,
    pub proc_path: PathBuf,
    pub history_size: usize,
    pub irq_pulse_ms: u64,
    pub document_url: Option<String>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("TELEMON_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            exporter_port: env::var("TELEMON_EXPORTER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(9090),
            audit_log: env::var("TELEMON_AUDIT_LOG")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("telemetry_log.jsonl")),
            proc_path: env::var("TELEMON_PROC_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/proc")),
            history_size: env::var("TELEMON_HISTORY_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            irq_pulse_ms: env::var("TELEMON_IRQ_PULSE_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(500),
            document_url: env::var("TELEMON_DOCUMENT_URL").ok(),
            log_level: env::var("TELEMON_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
