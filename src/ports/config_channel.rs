use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("interval must be a positive number of seconds")]
    NonPositiveInterval,

    #[error("invalid enable flag {0:?} (expected \"0\" or \"1\")")]
    InvalidFlag(String),

    #[error("invalid interval {0:?} (expected a positive decimal number)")]
    InvalidInterval(String),
}

/// Port for reading and writing the runtime-mutable settings.
///
/// Both settings can be mutated by an external control surface while the
/// logger and the telemetry service read them; implementations must never
/// expose a torn combination of the two fields.
pub trait ConfigChannel: Send + Sync {
    fn enabled(&self) -> bool;

    fn set_enabled(&self, enabled: bool);

    fn interval_secs(&self) -> u64;

    /// Rejects zero rather than clamping; stored state is untouched on error.
    fn set_interval_secs(&self, secs: u64) -> Result<(), ConfigError>;
}
