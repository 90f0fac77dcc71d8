pub mod audit;
pub mod context;
pub mod telemetry;

pub use audit::AuditLogger;
pub use context::{IrqCounter, TelemetryContext};
pub use telemetry::TelemetryService;
