pub mod audit_sink;
pub mod config_channel;
pub mod document_source;
pub mod system_source;

pub use audit_sink::AuditSink;
pub use config_channel::{ConfigChannel, ConfigError};
pub use document_source::DocumentSource;
pub use system_source::{MemoryInfo, SystemSource};
