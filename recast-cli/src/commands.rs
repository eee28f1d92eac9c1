//! CLI command implementations

use std::sync::Arc;

use clap::Subcommand;
use recast_core::Result;
use recast_core::browse::BrowseContent;
use recast_core::catalog::{CatalogSource, HttpCatalogSource};
use recast_core::config::ReceiverConfig;
use recast_core::resolver::{ContentResolver, LoadRequest, StreamProtocol};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a content identifier to a playable stream URL
    Resolve {
        /// Content identifier as a sender would supply it
        content_id: String,
        /// Preferred adaptive-streaming protocol (dash or hls)
        #[arg(short, long)]
        protocol: Option<StreamProtocol>,
        /// Content repository URL
        #[arg(long)]
        url: Option<String>,
    },
    /// List the browse rail built from the repository
    Browse {
        /// Content repository URL
        #[arg(long)]
        url: Option<String>,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub async fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Resolve {
            content_id,
            protocol,
            url,
        } => resolve_content(content_id, protocol, url).await,
        Commands::Browse { url } => list_browse_rail(url).await,
    }
}

fn build_config(url: Option<String>, protocol: Option<StreamProtocol>) -> ReceiverConfig {
    let mut config = ReceiverConfig::from_env();
    if let Some(url) = url {
        config.catalog.repository_url = url;
    }
    if let Some(protocol) = protocol {
        config.playback.preference = protocol;
    }
    config
}

/// Resolve a content identifier the way the receiver would for a load request
///
/// # Errors
/// - `RecastError::Catalog` - repository client construction or fetch failed
/// - `RecastError::Resolve` - identifier missing from the repository
async fn resolve_content(
    content_id: String,
    protocol: Option<StreamProtocol>,
    url: Option<String>,
) -> Result<()> {
    let config = build_config(url, protocol);
    let source = HttpCatalogSource::new(&config.catalog)?;
    let resolver = ContentResolver::new(Arc::new(source), config.playback.preference);

    let mut request = LoadRequest::for_content_id(&content_id);
    resolver.resolve(&mut request).await?;

    println!("Resolved content: {content_id}");
    if let Some(url) = &request.content_url {
        println!("  Stream URL:   {url}");
    }
    if let Some(content_type) = &request.content_type {
        println!("  Content type: {content_type}");
    }
    if let Some(metadata) = &request.metadata {
        println!("  Title:        {}", metadata.title);
        println!("  Subtitle:     {}", metadata.subtitle);
    }

    Ok(())
}

/// Fetch a snapshot and print the browse rail a smart display would show
///
/// # Errors
/// - `RecastError::Catalog` - repository fetch or decode failed
async fn list_browse_rail(url: Option<String>) -> Result<()> {
    let config = build_config(url, None);
    let source = HttpCatalogSource::new(&config.catalog)?;

    let snapshot = source.fetch_snapshot().await?;
    let rail = BrowseContent::from_snapshot(&snapshot);

    println!("{} ({} items)", rail.title, rail.items.len());
    for item in &rail.items {
        println!("  {:<16} {} - {}", item.entity, item.title, item.subtitle);
    }

    Ok(())
}
