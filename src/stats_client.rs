// HTTP source for dashboard snapshots.

use crate::models::DashboardSnapshot;
use std::time::Duration;
use tracing::instrument;

/// Failures on the polling path. All of these are logged and swallowed by
/// the poller; the next tick is the retry.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("stats request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("stats endpoint returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("invalid stats payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can produce a point-in-time dashboard snapshot.
/// The poller depends on this seam, not on reqwest.
#[async_trait::async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch_snapshot(&self) -> Result<DashboardSnapshot, ClientError>;
}

/// Read-only client for GET /dashboard/stats. No request body, no query
/// parameters; idempotent and side-effect-free on the server.
pub struct HttpStatsClient {
    client: reqwest::Client,
    stats_url: String,
}

impl HttpStatsClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            stats_url: format!("{}/dashboard/stats", base_url.trim_end_matches('/')),
        })
    }

    /// Full URL this client polls (for logs and tests).
    pub fn stats_url(&self) -> &str {
        &self.stats_url
    }
}

#[async_trait::async_trait]
impl SnapshotSource for HttpStatsClient {
    #[instrument(skip(self), fields(operation = "fetch_snapshot"))]
    async fn fetch_snapshot(&self) -> Result<DashboardSnapshot, ClientError> {
        let response = self.client.get(&self.stats_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
