//! Recast Core - Content resolution for a Cast-style media receiver
//!
//! This crate provides the resolvable core of a media receiver application:
//! fetching a remote content repository, resolving incoming load requests to
//! playable stream URLs with display metadata, routing receiver messages to
//! interceptors, and projecting the repository into a browse rail.

pub mod browse;
pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod resolver;

// Re-export main types for convenient access
pub use browse::{BrowseContent, BrowseItem};
pub use catalog::{CatalogError, CatalogSource, ContentRecord, HttpCatalogSource, RepositorySnapshot};
pub use config::ReceiverConfig;
pub use dispatch::{LoadInterceptor, MessageDispatcher, MessageType};
pub use resolver::{
    ContentResolver, HlsSegmentFormat, LoadRequest, MediaMetadata, ResolveError, StreamProtocol,
};

/// Core errors that can bubble up from any Recast subsystem.
///
/// High-level error types representing failures in receiver functionality.
#[derive(Debug, thiserror::Error)]
pub enum RecastError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Configuration error: {reason}")]
    Configuration { reason: String },
}

impl RecastError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            RecastError::Catalog(e) => match e {
                CatalogError::Fetch { status, .. } if *status == 0 => {
                    "Could not reach the content repository".to_string()
                }
                CatalogError::Fetch { status, .. } => {
                    format!("Content repository returned HTTP {status}")
                }
                CatalogError::MalformedData { .. } => {
                    "Content repository returned unreadable data".to_string()
                }
            },
            RecastError::Resolve(e) => match e {
                ResolveError::ContentNotFound { content_id } => {
                    format!("Content {content_id} is not available")
                }
                ResolveError::MissingContentId => {
                    "Load request did not identify any content".to_string()
                }
                ResolveError::Catalog(_) => "Content repository is unavailable".to_string(),
            },
            RecastError::Configuration { .. } => "Configuration error occurred".to_string(),
        }
    }

    /// Checks if this error is due to sender input rather than infrastructure.
    pub fn is_sender_error(&self) -> bool {
        matches!(
            self,
            RecastError::Resolve(
                ResolveError::ContentNotFound { .. } | ResolveError::MissingContentId
            )
        )
    }
}

pub type Result<T> = std::result::Result<T, RecastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_hide_internals() {
        let transport = RecastError::Catalog(CatalogError::Fetch {
            status: 0,
            status_text: "connection refused".to_string(),
        });
        assert_eq!(
            transport.user_message(),
            "Could not reach the content repository"
        );

        let not_found = RecastError::Resolve(ResolveError::ContentNotFound {
            content_id: "movie1".to_string(),
        });
        assert_eq!(not_found.user_message(), "Content movie1 is not available");
    }

    #[test]
    fn test_sender_errors_are_classified() {
        let not_found = RecastError::Resolve(ResolveError::ContentNotFound {
            content_id: "movie1".to_string(),
        });
        assert!(not_found.is_sender_error());

        let server_down = RecastError::Catalog(CatalogError::Fetch {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        });
        assert!(!server_down.is_sender_error());
    }
}
