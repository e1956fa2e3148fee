use crate::domain::model::Report;
use crate::utils::error::Result;
use async_trait::async_trait;

/// A single request/response cycle against one remote service.
#[async_trait]
pub trait Probe: Send + Sync {
    /// URL the probe talks to, for logging.
    fn target(&self) -> String;

    async fn fetch(&self) -> Result<Report>;
}
