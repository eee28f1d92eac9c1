//! HTTP-backed content repository source.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use super::{CatalogError, CatalogSource, ContentRecord, RepositorySnapshot};
use crate::config::CatalogConfig;

/// Fetches the content repository over HTTP.
///
/// Performs one GET per call with no retries and no response caching, so
/// every resolution observes the repository as it currently is.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    repository_url: Url,
}

impl HttpCatalogSource {
    /// Creates a source from catalog configuration.
    ///
    /// # Errors
    /// - `CatalogError::MalformedData` - repository URL does not parse
    /// - `CatalogError::Fetch` - HTTP client construction failed
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let repository_url =
            Url::parse(&config.repository_url).map_err(|e| CatalogError::MalformedData {
                reason: format!("invalid repository URL '{}': {e}", config.repository_url),
            })?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| CatalogError::Fetch {
            status: 0,
            status_text: format!("client construction failed: {e}"),
        })?;

        Ok(Self {
            client,
            repository_url,
        })
    }

    /// Repository endpoint this source reads from.
    pub fn repository_url(&self) -> &Url {
        &self.repository_url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_snapshot(&self) -> Result<RepositorySnapshot, CatalogError> {
        debug!("fetching content repository from {}", self.repository_url);

        let response = self
            .client
            .get(self.repository_url.clone())
            .send()
            .await
            .map_err(|e| CatalogError::Fetch {
                status: 0,
                status_text: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Fetch {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let records: HashMap<String, ContentRecord> =
            response
                .json()
                .await
                .map_err(|e| CatalogError::MalformedData {
                    reason: e.to_string(),
                })?;

        debug!(records = records.len(), "repository snapshot fetched");
        Ok(RepositorySnapshot::new(records))
    }
}
