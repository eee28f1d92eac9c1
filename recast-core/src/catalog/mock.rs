//! Mock catalog source for tests.

#[cfg(test)]
use std::collections::HashMap;

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use super::{CatalogError, CatalogSource, ContentRecord, RepositorySnapshot, StreamSet};

/// In-memory catalog source returning a fixed snapshot or a scripted error.
///
/// Lets resolver and dispatcher tests exercise every fetch outcome without
/// a network.
#[cfg(test)]
#[derive(Debug)]
pub struct MockCatalogSource {
    outcome: Outcome,
}

#[cfg(test)]
#[derive(Debug)]
enum Outcome {
    Snapshot(RepositorySnapshot),
    FetchFailure { status: u16, status_text: String },
    MalformedData { reason: String },
}

#[cfg(test)]
impl MockCatalogSource {
    /// Source that always returns the given snapshot.
    pub fn with_snapshot(snapshot: RepositorySnapshot) -> Self {
        Self {
            outcome: Outcome::Snapshot(snapshot),
        }
    }

    /// Source that always returns a snapshot built from the given records.
    pub fn with_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (String, ContentRecord)>,
    {
        let records: HashMap<String, ContentRecord> = records.into_iter().collect();
        Self::with_snapshot(RepositorySnapshot::new(records))
    }

    /// Source that always fails with an HTTP-level fetch error.
    pub fn failing_with_status(status: u16, status_text: &str) -> Self {
        Self {
            outcome: Outcome::FetchFailure {
                status,
                status_text: status_text.to_string(),
            },
        }
    }

    /// Source that always fails to decode its response body.
    pub fn malformed(reason: &str) -> Self {
        Self {
            outcome: Outcome::MalformedData {
                reason: reason.to_string(),
            },
        }
    }

    /// Record fixture with both stream URLs filled in.
    pub fn record(title: &str, author: &str, dash: &str, hls: &str) -> ContentRecord {
        ContentRecord {
            title: title.to_string(),
            author: author.to_string(),
            description: format!("{title} description"),
            poster: format!("https://example.com/{}.jpg", title.to_lowercase()),
            stream: StreamSet {
                dash: dash.to_string(),
                hls: hls.to_string(),
            },
        }
    }
}

#[cfg(test)]
#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn fetch_snapshot(&self) -> Result<RepositorySnapshot, CatalogError> {
        match &self.outcome {
            Outcome::Snapshot(snapshot) => Ok(snapshot.clone()),
            Outcome::FetchFailure {
                status,
                status_text,
            } => Err(CatalogError::Fetch {
                status: *status,
                status_text: status_text.clone(),
            }),
            Outcome::MalformedData { reason } => Err(CatalogError::MalformedData {
                reason: reason.clone(),
            }),
        }
    }
}
