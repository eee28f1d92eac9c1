//! Remote content repository access.
//!
//! The repository is a single JSON document whose top-level keys are content
//! identifiers and whose values describe one playable item each. A fetch
//! produces an immutable [`RepositorySnapshot`]; the next fetch replaces it
//! wholesale. Nothing is cached between resolutions.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod http;
pub mod mock;

pub use http::HttpCatalogSource;
#[cfg(test)]
pub use mock::MockCatalogSource;

/// One playable entry in the content repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Display title shown during playback
    pub title: String,
    /// Author or channel name, shown as the playback subtitle
    pub author: String,
    /// Longer description, shown on the browse rail
    #[serde(default)]
    pub description: String,
    /// Poster image URL for browse tiles
    #[serde(default)]
    pub poster: String,
    /// Stream URLs keyed by adaptive-streaming protocol
    pub stream: StreamSet,
}

/// Per-protocol stream URLs for one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamSet {
    /// MPEG-DASH manifest URL
    pub dash: String,
    /// HLS playlist URL
    pub hls: String,
}

/// In-memory catalog built from one repository fetch.
///
/// Lookup by content identifier is the only operation resolution needs;
/// iteration exists for the browse rail.
#[derive(Debug, Clone, Default)]
pub struct RepositorySnapshot {
    records: HashMap<String, ContentRecord>,
}

impl RepositorySnapshot {
    /// Wraps a decoded repository document.
    pub fn new(records: HashMap<String, ContentRecord>) -> Self {
        Self { records }
    }

    /// Looks up a record by content identifier.
    pub fn record(&self, content_id: &str) -> Option<&ContentRecord> {
        self.records.get(content_id)
    }

    /// Iterates over (content identifier, record) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ContentRecord)> {
        self.records.iter()
    }

    /// Number of records in the snapshot.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the repository carried no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Errors raised while fetching or decoding the content repository.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport failure or non-2xx response from the repository endpoint.
    ///
    /// Transport-level failures carry status 0, the convention senders
    /// already handle from XHR-based receivers.
    #[error("repository fetch failed: HTTP {status} {status_text}")]
    Fetch {
        /// HTTP status code; 0 when the request never completed
        status: u16,
        /// Status line or transport error description
        status_text: String,
    },

    /// Response body was not a valid content repository document.
    #[error("malformed repository data: {reason}")]
    MalformedData {
        /// What failed to decode
        reason: String,
    },
}

/// Provides repository snapshots to the resolver.
///
/// Implementations fetch fresh data on every call; the resolver performs no
/// caching of its own. Mock implementations back the test suites.
#[async_trait]
pub trait CatalogSource: Send + Sync + std::fmt::Debug {
    /// Fetches a fresh snapshot of the content repository.
    ///
    /// # Errors
    /// - `CatalogError::Fetch` - transport failure or non-2xx status
    /// - `CatalogError::MalformedData` - body failed to decode
    async fn fetch_snapshot(&self) -> Result<RepositorySnapshot, CatalogError>;
}
