//! Browse-rail projection of the content repository.
//!
//! Smart displays show a selectable rail of repository entries next to the
//! player. These types carry exactly the per-item fields the UI binds;
//! selecting a tile sends a load request whose `entity` is the tile's
//! content identifier, which the resolver aliases back to a content id.

use serde::{Deserialize, Serialize};

use crate::catalog::RepositorySnapshot;

/// Image shape requested for browse tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrowseImageType {
    /// Movie poster framing
    #[serde(rename = "MOVIE")]
    Movie,
}

/// Aspect ratio of the browse rail tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrowseImageAspectRatio {
    /// 16:9 landscape tiles
    #[serde(rename = "LANDSCAPE_16_TO_9")]
    Landscape16x9,
}

/// One selectable tile on the browse rail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseItem {
    /// Content identifier loaded when the tile is selected
    pub entity: String,
    /// Tile title
    pub title: String,
    /// Tile subtitle, taken from the record description
    pub subtitle: String,
    /// Poster image URL
    pub image: String,
    /// Poster framing hint
    pub image_type: BrowseImageType,
}

/// Full browse rail handed to the host UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseContent {
    /// Rail heading
    pub title: String,
    /// Tiles in display order
    pub items: Vec<BrowseItem>,
    /// Tile aspect ratio for the whole rail
    pub target_aspect_ratio: BrowseImageAspectRatio,
}

impl BrowseContent {
    /// Builds the "Up Next" rail from a repository snapshot.
    ///
    /// Items are ordered by content identifier so repeated fetches of the
    /// same repository render the same rail.
    pub fn from_snapshot(snapshot: &RepositorySnapshot) -> Self {
        let mut items: Vec<BrowseItem> = snapshot
            .iter()
            .map(|(content_id, record)| BrowseItem {
                entity: content_id.clone(),
                title: record.title.clone(),
                subtitle: record.description.clone(),
                image: record.poster.clone(),
                image_type: BrowseImageType::Movie,
            })
            .collect();
        items.sort_by(|a, b| a.entity.cmp(&b.entity));

        Self {
            title: "Up Next".to_string(),
            items,
            target_aspect_ratio: BrowseImageAspectRatio::Landscape16x9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MockCatalogSource, RepositorySnapshot};

    fn sample_snapshot() -> RepositorySnapshot {
        let records = [
            (
                "zebra".to_string(),
                MockCatalogSource::record("Zebra", "Z Author", "z.mpd", "z.m3u8"),
            ),
            (
                "alpha".to_string(),
                MockCatalogSource::record("Alpha", "A Author", "a.mpd", "a.m3u8"),
            ),
        ];
        RepositorySnapshot::new(records.into_iter().collect())
    }

    #[test]
    fn test_rail_is_ordered_by_content_id() {
        let rail = BrowseContent::from_snapshot(&sample_snapshot());

        assert_eq!(rail.title, "Up Next");
        assert_eq!(rail.target_aspect_ratio, BrowseImageAspectRatio::Landscape16x9);
        let entities: Vec<&str> = rail.items.iter().map(|i| i.entity.as_str()).collect();
        assert_eq!(entities, ["alpha", "zebra"]);
    }

    #[test]
    fn test_tile_fields_come_from_record() {
        let rail = BrowseContent::from_snapshot(&sample_snapshot());

        let tile = &rail.items[0];
        assert_eq!(tile.entity, "alpha");
        assert_eq!(tile.title, "Alpha");
        assert_eq!(tile.subtitle, "Alpha description");
        assert_eq!(tile.image, "https://example.com/alpha.jpg");
        assert_eq!(tile.image_type, BrowseImageType::Movie);
    }

    #[test]
    fn test_empty_repository_renders_empty_rail() {
        let rail = BrowseContent::from_snapshot(&RepositorySnapshot::default());
        assert!(rail.items.is_empty());
    }

    #[test]
    fn test_rail_wire_format() {
        let rail = BrowseContent::from_snapshot(&sample_snapshot());
        let json = serde_json::to_string(&rail).unwrap();

        assert!(json.contains("\"targetAspectRatio\":\"LANDSCAPE_16_TO_9\""));
        assert!(json.contains("\"imageType\":\"MOVIE\""));
    }
}
