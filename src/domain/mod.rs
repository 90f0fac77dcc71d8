pub mod audit;
pub mod document;
pub mod snapshot;

pub use audit::AuditRecord;
pub use document::{TelemetryDocument, DISABLED_MESSAGE};
pub use snapshot::Snapshot;
