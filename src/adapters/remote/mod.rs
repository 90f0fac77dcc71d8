use async_trait::async_trait;

use crate::domain::TelemetryDocument;
use crate::ports::DocumentSource;

/// Document source that reads a telemon HTTP surface on another process or
/// host. Lets the exporter and logger run detached from the sampling daemon.
pub struct HttpDocumentSource {
    client: reqwest::Client,
    url: String,
}

impl HttpDocumentSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl DocumentSource for HttpDocumentSource {
    async fn latest(
        &self,
    ) -> Result<TelemetryDocument, Box<dyn std::error::Error + Send + Sync>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}
