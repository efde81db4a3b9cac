//! Fetching raw dataset text from HTTP or the local filesystem.

use super::{DatasetError, DatasetSource};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Retrieves the full text of a dataset.
///
/// Each call is a single suspend point; everything done with the text
/// afterwards is synchronous.
#[async_trait]
pub trait TextFetcher: Send + Sync {
    async fn fetch_text(&self, source: &DatasetSource) -> Result<String, DatasetError>;
}

/// Fetcher backed by reqwest for URLs and tokio::fs for files.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a new fetcher whose HTTP requests give up after `timeout_sec`.
    pub fn new(timeout_sec: u64) -> Result<Self, DatasetError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()
            .map_err(|e| DatasetError::fetch("http client", e))?;

        Ok(Self { client })
    }

    async fn fetch_url(&self, url: &str) -> Result<String, DatasetError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DatasetError::fetch(url, e))?;

        if !response.status().is_success() {
            return Err(DatasetError::fetch(
                url,
                format!("status {}", response.status()),
            ));
        }

        response.text().await.map_err(|e| DatasetError::fetch(url, e))
    }
}

#[async_trait]
impl TextFetcher for HttpFetcher {
    async fn fetch_text(&self, source: &DatasetSource) -> Result<String, DatasetError> {
        debug!("Fetching {}", source);
        match source {
            DatasetSource::Url(url) => self.fetch_url(url).await,
            DatasetSource::File(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|e| DatasetError::fetch(source, e)),
        }
    }
}
