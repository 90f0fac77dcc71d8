use std::sync::Mutex;

use crate::ports::{ConfigChannel, ConfigError};

const DEFAULT_INTERVAL_SECS: u64 = 5;

#[derive(Debug, Clone, Copy)]
struct ConfigState {
    enabled: bool,
    interval_secs: u64,
}

/// Runtime-mutable settings shared between the control surface, the
/// telemetry service, and the audit logger.
///
/// Both fields live behind one mutex so a reader never sees a combination
/// that no single completed write produced.
pub struct RuntimeConfig {
    state: Mutex<ConfigState>,
}

impl RuntimeConfig {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ConfigState {
                enabled: true,
                interval_secs: DEFAULT_INTERVAL_SECS,
            }),
        }
    }

    /// Both settings from a single completed write.
    pub fn snapshot(&self) -> (bool, u64) {
        let state = self.state.lock().unwrap();
        (state.enabled, state.interval_secs)
    }

    /// Text protocol of the `enable` attribute: "0" or "1", nothing else.
    pub fn write_enable_text(&self, text: &str) -> Result<(), ConfigError> {
        match text.trim() {
            "0" => {
                self.set_enabled(false);
                Ok(())
            }
            "1" => {
                self.set_enabled(true);
                Ok(())
            }
            other => Err(ConfigError::InvalidFlag(other.to_string())),
        }
    }

    pub fn read_enable_text(&self) -> String {
        if self.enabled() { "1" } else { "0" }.to_string()
    }

    /// Text protocol of the `log_interval` attribute: positive decimal seconds.
    pub fn write_interval_text(&self, text: &str) -> Result<(), ConfigError> {
        let trimmed = text.trim();
        let secs = trimmed
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidInterval(trimmed.to_string()))?;
        self.set_interval_secs(secs)
    }

    pub fn read_interval_text(&self) -> String {
        self.interval_secs().to_string()
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigChannel for RuntimeConfig {
    fn enabled(&self) -> bool {
        self.state.lock().unwrap().enabled
    }

    fn set_enabled(&self, enabled: bool) {
        self.state.lock().unwrap().enabled = enabled;
    }

    fn interval_secs(&self) -> u64 {
        self.state.lock().unwrap().interval_secs
    }

    fn set_interval_secs(&self, secs: u64) -> Result<(), ConfigError> {
        if secs == 0 {
            return Err(ConfigError::NonPositiveInterval);
        }
        self.state.lock().unwrap().interval_secs = secs;
        Ok(())
    }
}
