mod adapters;
mod application;
mod config;
mod domain;
#[cfg(feature = "fault-injection")]
mod fault;
mod interface;
mod ports;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adapters::{FileAuditSink, HttpDocumentSource, ProcfsConfig, ProcfsSystemSource};
use application::{AuditLogger, TelemetryContext, TelemetryService};
use config::Config;
use interface::http::create_router;
use interface::Exporter;
use ports::{AuditSink, ConfigChannel, DocumentSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("telemon={},tower_http=info", config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🚀 Starting telemon v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: {:?}", config);

    // Process-wide telemetry state and the sampling service
    let context = Arc::new(TelemetryContext::new(config.history_size));
    let source = ProcfsSystemSource::new(ProcfsConfig::new(config.proc_path.clone()));
    let service = Arc::new(TelemetryService::new(Arc::clone(&context), Arc::new(source)));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Interrupt-like source feeding the IRQ counter
    if config.irq_pulse_ms > 0 {
        spawn_irq_pulse(
            Arc::clone(&context),
            Duration::from_millis(config.irq_pulse_ms),
            shutdown_rx.clone(),
        );
    }

    // Consumers read the in-process service, or a remote surface when configured
    let document_source: Arc<dyn DocumentSource> = match &config.document_url {
        Some(url) => {
            info!("✓ Reading snapshot documents from {}", url);
            Arc::new(HttpDocumentSource::new(url.clone()))
        }
        None => Arc::clone(&service) as Arc<dyn DocumentSource>,
    };

    // Exposition endpoint
    let exporter_listener =
        tokio::net::TcpListener::bind(("0.0.0.0", config.exporter_port)).await?;
    let exporter = Exporter::new(Arc::clone(&document_source));
    let exporter_task = tokio::spawn(exporter.run(exporter_listener, shutdown_rx.clone()));
    info!("✓ Exposition endpoint on port {}", config.exporter_port);

    // Audit logger
    let sink: Arc<dyn AuditSink> = Arc::new(FileAuditSink::new(config.audit_log.clone()));
    let logger = AuditLogger::new(
        Arc::clone(&context.config) as Arc<dyn ConfigChannel>,
        Arc::clone(&document_source),
        sink,
    );
    let logger_task = tokio::spawn(logger.run(shutdown_rx.clone()));
    info!("✓ Audit logger appending to {}", config.audit_log.display());

    // HTTP document/control surface
    let app = create_router(Arc::clone(&service), Arc::clone(&context.config));
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("✓ telemon listening on {}", addr);
    info!("  → Document: http://localhost:{}/telemetry", config.port);
    info!("  → Metrics:  tcp://localhost:{}", config.exporter_port);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    let mut http_shutdown = shutdown_rx.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = http_shutdown.changed().await;
        })
        .await?;

    if let Err(e) = exporter_task.await {
        warn!("exporter task failed: {}", e);
    }
    if let Err(e) = logger_task.await {
        warn!("audit logger task failed: {}", e);
    }

    info!("telemon stopped");
    Ok(())
}

fn spawn_irq_pulse(
    context: Arc<TelemetryContext>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            tokio::select! {
                _ = ticker.tick() => context.irq.record_one(),
                _ = shutdown.changed() => break,
            }
        }
    });
}
