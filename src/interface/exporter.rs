use std::sync::Arc;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::domain::TelemetryDocument;
use crate::ports::DocumentSource;

/// Deadline for writing a response to a slow client.
const WRITE_DEADLINE: Duration = Duration::from_secs(5);

/// Prometheus-style exposition endpoint over raw TCP.
///
/// Clients are served one at a time: per connection, fetch the latest
/// document, write one exposition body, close. A provider failure degrades
/// to a single error counter instead of the four metrics.
pub struct Exporter {
    source: Arc<dyn DocumentSource>,
}

impl Exporter {
    pub fn new(source: Arc<dyn DocumentSource>) -> Self {
        Self { source }
    }

    pub async fn run(self, listener: TcpListener, mut shutdown: watch::Receiver<bool>) {
        match listener.local_addr() {
            Ok(addr) => info!("exporter listening on {}", addr),
            Err(_) => info!("exporter listening"),
        }

        loop {
            tokio::select! {
                accepted = listener.accept() => match accepted {
                    Ok((stream, peer)) => {
                        debug!("serving exposition to {}", peer);
                        self.serve_connection(stream).await;
                    }
                    Err(e) => warn!("accept failed: {}", e),
                },
                _ = shutdown.changed() => {
                    info!("exporter stopping");
                    break;
                }
            }
        }
    }

    async fn serve_connection(&self, mut stream: TcpStream) {
        let body = match self.source.latest().await {
            Ok(document) => render_exposition(&document),
            Err(e) => {
                warn!("telemetry document unavailable: {}", e);
                render_error_body()
            }
        };

        match tokio::time::timeout(WRITE_DEADLINE, stream.write_all(body.as_bytes())).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("write to client failed: {}", e),
            Err(_) => warn!("client write exceeded deadline, dropping connection"),
        }
        let _ = stream.shutdown().await;
    }
}

/// Render the newest record of a document as exposition text.
///
/// A document with no extractable record (disabled, or an empty series)
/// renders the same error counter as an unreachable provider.
pub fn render_exposition(document: &TelemetryDocument) -> String {
    let snapshot = match document.latest() {
        Some(snapshot) => snapshot,
        None => return render_error_body(),
    };

    let mut body = String::new();
    body.push_str("# HELP telemetry_context_switches Total context switches\n");
    body.push_str("# TYPE telemetry_context_switches counter\n");
    body.push_str(&format!(
        "telemetry_context_switches {}\n",
        snapshot.context_switches
    ));
    body.push_str("# HELP telemetry_irq_count Total IRQs handled\n");
    body.push_str("# TYPE telemetry_irq_count counter\n");
    body.push_str(&format!("telemetry_irq_count {}\n", snapshot.irq_count));
    body.push_str("# HELP telemetry_free_ram_MB Free RAM in MB\n");
    body.push_str("# TYPE telemetry_free_ram_MB gauge\n");
    body.push_str(&format!("telemetry_free_ram_MB {}\n", snapshot.free_ram_mb));
    body.push_str("# HELP telemetry_total_ram_MB Total RAM in MB\n");
    body.push_str("# TYPE telemetry_total_ram_MB gauge\n");
    body.push_str(&format!(
        "telemetry_total_ram_MB {}\n",
        snapshot.total_ram_mb
    ));
    body
}

pub fn render_error_body() -> String {
    "# HELP telemetry_error Error reading telemetry\n\
     # TYPE telemetry_error counter\n\
     telemetry_error 1\n"
        .to_string()
}
