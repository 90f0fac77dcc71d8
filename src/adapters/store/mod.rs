mod config;
mod history;

pub use config::RuntimeConfig;
pub use history::{SnapshotHistory, DEFAULT_CAPACITY};
