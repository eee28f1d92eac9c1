//! Centralized configuration for Recast.
//!
//! Receiver scripts traditionally hard-code the repository URL and stream
//! protocol as top-of-file constants. Recast groups them into an explicit
//! configuration struct so each resolver instance can be configured and
//! tested independently.

use std::time::Duration;

use crate::resolver::StreamProtocol;

/// Sample content repository used when nothing else is configured.
pub const DEFAULT_REPOSITORY_URL: &str =
    "https://storage.googleapis.com/cpe-sample-media/content.json";

/// Central configuration for all Recast components.
///
/// Groups related configuration settings into logical sections.
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct ReceiverConfig {
    pub catalog: CatalogConfig,
    pub playback: PlaybackConfig,
}

/// Content repository access configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Remote JSON document mapping content identifiers to records
    pub repository_url: String,
    /// User agent for HTTP requests
    pub user_agent: &'static str,
    /// Per-request timeout; None waits indefinitely, which is what stock
    /// receivers do
    pub request_timeout: Option<Duration>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            repository_url: DEFAULT_REPOSITORY_URL.to_string(),
            user_agent: "recast/0.1.0",
            request_timeout: None,
        }
    }
}

/// Playback and stream selection configuration.
#[derive(Debug, Clone)]
pub struct PlaybackConfig {
    /// Adaptive-streaming protocol the resolver selects URLs with
    pub preference: StreamProtocol,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            preference: StreamProtocol::Dash,
        }
    }
}

impl ReceiverConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Allows runtime configuration via environment variables while
    /// maintaining sensible defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("RECAST_REPOSITORY_URL") {
            config.catalog.repository_url = url;
        }

        if let Ok(protocol) = std::env::var("RECAST_STREAM_PROTOCOL") {
            if let Ok(preference) = protocol.parse::<StreamProtocol>() {
                config.playback.preference = preference;
            }
        }

        if let Ok(timeout) = std::env::var("RECAST_FETCH_TIMEOUT_SECS") {
            if let Ok(seconds) = timeout.parse::<u64>() {
                config.catalog.request_timeout = Some(Duration::from_secs(seconds));
            }
        }

        config
    }
}
