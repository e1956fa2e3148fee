use crate::config::BackendSettings;
use crate::core::{Probe, Report, Result};
use reqwest::{Client, StatusCode};

/// Reads one named row from the backend's REST interface.
pub struct ConfigFetcher {
    settings: BackendSettings,
    client: Client,
}

impl ConfigFetcher {
    pub fn new(settings: BackendSettings) -> Self {
        Self {
            settings,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl Probe for ConfigFetcher {
    fn target(&self) -> String {
        self.settings.table_url()
    }

    async fn fetch(&self) -> Result<Report> {
        let url = self.settings.table_url();
        tracing::debug!(
            "Requesting {} where name = {}",
            url,
            self.settings.site_name
        );

        let response = self
            .client
            .get(&url)
            .query(&[("name", self.settings.name_filter())])
            .header("apikey", &self.settings.api_key)
            .bearer_auth(&self.settings.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Backend response status: {}", status);

        let body = response.text().await?;
        if status == StatusCode::OK {
            let payload: serde_json::Value = serde_json::from_str(&body)?;
            Ok(Report::Config(payload))
        } else {
            tracing::warn!("Backend returned {} for {}", status, url);
            Ok(Report::HttpFailure {
                status: status.as_u16(),
                body: Some(body),
            })
        }
    }
}
