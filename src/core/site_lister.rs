use crate::config::SitesSettings;
use crate::core::{Probe, Report, Result};
use reqwest::{Client, StatusCode};

pub struct SiteLister {
    settings: SitesSettings,
    client: Client,
}

impl SiteLister {
    pub fn new(settings: SitesSettings) -> Self {
        Self {
            settings,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl Probe for SiteLister {
    fn target(&self) -> String {
        self.settings.endpoint.clone()
    }

    async fn fetch(&self) -> Result<Report> {
        tracing::debug!("Making API request to: {}", self.settings.endpoint);
        let response = self.client.get(&self.settings.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status != StatusCode::OK {
            return Ok(Report::HttpFailure {
                status: status.as_u16(),
                body: None,
            });
        }

        // Entries are checked while printing, so earlier sites still show
        // when a later one is malformed.
        let body = response.text().await?;
        let entries: Vec<serde_json::Value> = serde_json::from_str(&body)?;

        tracing::debug!("Received {} sites", entries.len());
        Ok(Report::Sites(entries))
    }
}
