pub mod audit;
pub mod procfs;
pub mod remote;
pub mod store;

pub use audit::FileAuditSink;
pub use procfs::{ProcfsConfig, ProcfsSystemSource};
pub use remote::HttpDocumentSource;
pub use store::{RuntimeConfig, SnapshotHistory};
