//! Load-request interception and content resolution.
//!
//! Maps the opaque content identifier on an incoming load request to a
//! playable stream URL plus display metadata by consulting the current
//! repository snapshot. Each resolution fetches a fresh snapshot; no state
//! survives between calls beyond the configured protocol preference.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::catalog::{CatalogError, CatalogSource};

/// Adaptive-streaming protocol used to pick a stream URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamProtocol {
    /// MPEG-DASH
    Dash,
    /// HTTP Live Streaming
    Hls,
}

impl StreamProtocol {
    /// MIME type advertised to the player for this protocol.
    pub fn content_type(&self) -> &'static str {
        match self {
            StreamProtocol::Dash => "application/dash+xml",
            StreamProtocol::Hls => "application/x-mpegurl",
        }
    }
}

impl fmt::Display for StreamProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamProtocol::Dash => write!(f, "dash"),
            StreamProtocol::Hls => write!(f, "hls"),
        }
    }
}

/// Error returned when a protocol name does not parse.
#[derive(Debug, Error)]
#[error("unknown stream protocol '{0}', expected 'dash' or 'hls'")]
pub struct ParseProtocolError(String);

impl FromStr for StreamProtocol {
    type Err = ParseProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dash" => Ok(StreamProtocol::Dash),
            "hls" => Ok(StreamProtocol::Hls),
            other => Err(ParseProtocolError(other.to_string())),
        }
    }
}

/// Container hint attached to HLS streams for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HlsSegmentFormat {
    /// Fragmented MP4 segments
    Fmp4,
    /// MPEG-2 transport stream segments
    Ts,
}

/// Load message from a sender, mutated in place by resolution.
///
/// The host owns the request before and after interception. The resolver
/// fills in the output fields (`content_url`, `content_type`, the HLS
/// segment hints and `metadata`) and leaves everything else alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoadRequest {
    /// Opaque identifier for the requested content
    pub content_id: Option<String>,
    /// Deep-link entity, treated as a synonym for `content_id`
    pub entity: Option<String>,
    /// Playable stream URL, set on successful resolution
    pub content_url: Option<String>,
    /// MIME type of the selected stream
    pub content_type: Option<String>,
    /// Audio segment container hint, set for HLS streams
    pub hls_segment_format: Option<HlsSegmentFormat>,
    /// Video segment container hint, set for HLS streams
    pub hls_video_segment_format: Option<HlsSegmentFormat>,
    /// Display metadata for the player overlay
    pub metadata: Option<MediaMetadata>,
}

impl LoadRequest {
    /// Request for a content identifier.
    pub fn for_content_id(content_id: impl Into<String>) -> Self {
        Self {
            content_id: Some(content_id.into()),
            ..Self::default()
        }
    }

    /// Request carrying only a deep-link entity.
    pub fn for_entity(entity: impl Into<String>) -> Self {
        Self {
            entity: Some(entity.into()),
            ..Self::default()
        }
    }
}

/// Title and subtitle shown by the player overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaMetadata {
    pub title: String,
    pub subtitle: String,
}

/// Errors raised while resolving a load request.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The request carried neither a content identifier nor an entity.
    #[error("load request carries no content identifier")]
    MissingContentId,

    /// The identifier is not a key of the current repository snapshot.
    ///
    /// Carries the identifier so the host can surface a meaningful
    /// rejection instead of a silent one.
    #[error("content '{content_id}' not found in repository")]
    ContentNotFound {
        /// Identifier the sender asked for
        content_id: String,
    },

    /// The repository snapshot could not be fetched or decoded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Resolves load requests against the remote content repository.
///
/// Stateless per call: every resolution fetches a fresh snapshot, and
/// overlapping resolutions proceed independently with no shared cache.
#[derive(Debug, Clone)]
pub struct ContentResolver {
    source: Arc<dyn CatalogSource>,
    preference: StreamProtocol,
}

impl ContentResolver {
    /// Creates a resolver over a catalog source with a protocol preference.
    pub fn new(source: Arc<dyn CatalogSource>, preference: StreamProtocol) -> Self {
        Self { source, preference }
    }

    /// Protocol preference this resolver selects stream URLs with.
    pub fn preference(&self) -> StreamProtocol {
        self.preference
    }

    /// Resolves a load request in place.
    ///
    /// On success the request carries the playable URL, content type, HLS
    /// segment hints (HLS preference only) and display metadata. On failure
    /// no output field is touched, so the host can reject the load and keep
    /// the request intact.
    ///
    /// # Errors
    /// - `ResolveError::MissingContentId` - neither `content_id` nor `entity` present
    /// - `ResolveError::ContentNotFound` - identifier absent from the snapshot
    /// - `ResolveError::Catalog` - repository fetch or decode failed
    pub async fn resolve(&self, request: &mut LoadRequest) -> Result<(), ResolveError> {
        info!("intercepting load request");

        // Senders deep-linking from assistant surfaces supply `entity`
        // instead of `contentId`; the entity wins when both are present.
        if let Some(entity) = &request.entity {
            request.content_id = Some(entity.clone());
        }

        let content_id = match request.content_id.as_deref() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => return Err(ResolveError::MissingContentId),
        };

        let snapshot = self.source.fetch_snapshot().await?;

        let Some(record) = snapshot.record(&content_id) else {
            error!(content_id = %content_id, "content not found in repository");
            return Err(ResolveError::ContentNotFound { content_id });
        };

        request.content_type = Some(self.preference.content_type().to_string());
        match self.preference {
            StreamProtocol::Dash => {
                request.content_url = Some(record.stream.dash.clone());
            }
            StreamProtocol::Hls => {
                request.content_url = Some(record.stream.hls.clone());
                request.hls_segment_format = Some(HlsSegmentFormat::Fmp4);
                request.hls_video_segment_format = Some(HlsSegmentFormat::Fmp4);
            }
        }

        request.metadata = Some(MediaMetadata {
            title: record.title.clone(),
            subtitle: record.author.clone(),
        });

        debug!(
            content_id = %content_id,
            url = request.content_url.as_deref().unwrap_or(""),
            "load request resolved"
        );

        Ok(())
    }
}
